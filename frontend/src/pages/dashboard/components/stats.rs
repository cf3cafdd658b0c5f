use crate::{
    api::DashboardStats,
    components::{
        cards::StatCard,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::dashboard::utils::stat_tiles,
    state::LoadState,
};
use leptos::*;

#[component]
pub fn StatsSection(
    #[prop(into)] state: Signal<LoadState<DashboardStats>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || match state.get() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
        LoadState::Failed(message) => {
            view! { <ErrorMessage message=message on_retry=on_retry /> }.into_view()
        }
        LoadState::Ready(stats) => {
            let tiles = stat_tiles(&stats)
                .into_iter()
                .map(|tile| {
                    view! {
                        <StatCard title=tile.title value=tile.value color=tile.color icon=tile.icon />
                    }
                })
                .collect_view();
            view! {
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-3 sm:gap-6">{tiles}</div>
            }
            .into_view()
        }
    }
}
