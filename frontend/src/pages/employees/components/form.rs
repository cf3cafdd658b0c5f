use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{Modal, TextField},
    },
    pages::employees::utils::EmployeeFormState,
    state::FormState,
};
use leptos::*;

fn field(
    form: RwSignal<EmployeeFormState>,
    get: fn(&EmployeeFormState) -> &String,
    set: fn(&mut EmployeeFormState, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(|state| get(state).clone())),
        Callback::new(move |value| form.update(|state| set(state, value))),
    )
}

#[component]
pub fn EmployeeFormModal(
    #[prop(into)] is_open: Signal<bool>,
    form: RwSignal<EmployeeFormState>,
    #[prop(into)] submit_state: Signal<FormState>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (employee_id, set_employee_id) =
        field(form, |s| &s.employee_id, |s, v| s.employee_id = v);
    let (full_name, set_full_name) = field(form, |s| &s.full_name, |s, v| s.full_name = v);
    let (email, set_email) = field(form, |s| &s.email, |s, v| s.email = v);
    let (department, set_department) =
        field(form, |s| &s.department, |s, v| s.department = v);

    let submitting = Signal::derive(move || submit_state.get().is_submitting());
    let error = Signal::derive(move || submit_state.get().error().map(str::to_string));

    view! {
        <Modal is_open=is_open title="Add New Employee" on_close=on_close>
            <InlineErrorMessage error=error />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <TextField label="Employee ID" value=employee_id on_input=set_employee_id placeholder="e.g., EMP001" />
                <TextField label="Full Name" value=full_name on_input=set_full_name placeholder="e.g., John Doe" />
                <TextField
                    label="Email Address"
                    value=email
                    on_input=set_email
                    placeholder="e.g., john@company.com"
                    input_type="email"
                />
                <TextField label="Department" value=department on_input=set_department placeholder="e.g., Engineering" />
                <div class="flex gap-3 pt-4">
                    <Button
                        variant=ButtonVariant::Secondary
                        class="flex-1"
                        attr:type="button"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </Button>
                    <Button class="flex-1" attr:type="submit" loading=submitting>
                        {move || if submitting.get() { "Creating..." } else { "Create" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
