use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::attendance::{
        components::{AttendanceFormModal, AttendanceRecords, DateFilter},
        layout::AttendanceFrame,
        view_model::use_attendance_view_model,
    },
    state::LoadState,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    create_effect(move |_| {
        vm.filter.with(|_| ());
        vm.reload();
    });

    let employees = Signal::derive(move || {
        vm.data
            .with(|state| state.ready().map(|data| data.employees.clone()))
            .unwrap_or_default()
    });
    let filter = view! {
        <DateFilter value=vm.filter on_change=Callback::new(move |date| vm.set_filter(date)) />
    }
    .into_view();

    view! {
        <AttendanceFrame on_mark=Callback::new(move |_| vm.open_modal()) filter=filter>
            {move || match vm.data.get() {
                LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(message) => view! {
                    <ErrorMessage message=message on_retry=Callback::new(move |_| vm.reload()) />
                }
                .into_view(),
                LoadState::Ready(data) => view! {
                    <AttendanceRecords
                        records=data.records
                        directory=data.directory
                        filter=vm.filter.get_untracked()
                    />
                }
                .into_view(),
            }}
            <AttendanceFormModal
                is_open=vm.modal_open
                form=vm.form
                employees=employees
                submit_state=vm.submit_state
                on_submit=Callback::new(move |_| vm.submit_in_background())
                on_close=Callback::new(move |_| vm.close_modal())
            />
        </AttendanceFrame>
    }
}
