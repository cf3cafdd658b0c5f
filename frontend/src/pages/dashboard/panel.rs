use crate::pages::dashboard::{
    components::{QuickActions, StatsSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    create_effect(move |_| vm.reload());

    view! {
        <DashboardFrame>
            <StatsSection state=vm.stats on_retry=Callback::new(move |_| vm.reload()) />
            <QuickActions />
        </DashboardFrame>
    }
}
