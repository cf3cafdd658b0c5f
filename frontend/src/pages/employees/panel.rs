use crate::{
    components::{
        confirm_dialog::{AlertDialog, ConfirmDialog},
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::employees::{
        components::{EmployeeDetailDrawer, EmployeeFormModal, EmployeeList},
        layout::EmployeesFrame,
        view_model::use_employees_view_model,
    },
    state::LoadState,
};
use leptos::*;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this employee?";

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    create_effect(move |_| vm.reload());

    let on_select = Callback::new(move |id: i64| vm.open_detail_in_background(id));
    let on_delete = Callback::new(move |employee| vm.request_delete(employee));

    view! {
        <EmployeesFrame on_add=Callback::new(move |_| vm.open_modal())>
            {move || match vm.employees.get() {
                LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(message) => view! {
                    <ErrorMessage message=message on_retry=Callback::new(move |_| vm.reload()) />
                }
                .into_view(),
                LoadState::Ready(employees) => view! {
                    <EmployeeList employees=employees on_select=on_select on_delete=on_delete />
                }
                .into_view(),
            }}
            <EmployeeFormModal
                is_open=vm.modal_open
                form=vm.form
                submit_state=vm.submit_state
                on_submit=Callback::new(move |_| vm.submit_in_background())
                on_close=Callback::new(move |_| vm.close_modal())
            />
            <EmployeeDetailDrawer
                selected=vm.selected
                detail=vm.detail
                on_close=Callback::new(move |_| vm.close_detail())
                on_retry=on_select
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Employee"
                message=DELETE_CONFIRM_MESSAGE
                confirm_label="Delete"
                confirm_disabled=vm.deleting
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete_in_background())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
            <AlertDialog
                message=vm.delete_error
                title="Delete failed"
                on_dismiss=Callback::new(move |_| vm.dismiss_delete_error())
            />
        </EmployeesFrame>
    }
}
