use crate::{
    api::{AttendanceStatus, Employee},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::Modal,
    },
    pages::attendance::utils::{employee_option_label, AttendanceFormState},
    state::FormState,
};
use leptos::*;

#[component]
pub fn AttendanceFormModal(
    #[prop(into)] is_open: Signal<bool>,
    form: RwSignal<AttendanceFormState>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] submit_state: Signal<FormState>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let submitting = Signal::derive(move || submit_state.get().is_submitting());
    let error = Signal::derive(move || submit_state.get().error().map(str::to_string));
    let selected = move || form.with(|state| state.employee_id.clone());

    let options = move || {
        employees
            .get()
            .into_iter()
            .map(|employee| {
                let value = employee.id.to_string();
                let is_selected = {
                    let value = value.clone();
                    move || selected() == value
                };
                view! {
                    <option value=value selected=is_selected>
                        {employee_option_label(&employee)}
                    </option>
                }
            })
            .collect_view()
    };

    let status_choice = move |status: AttendanceStatus| {
        view! {
            <label class="flex items-center gap-2 cursor-pointer">
                <input
                    type="radio"
                    name="status"
                    value=status.as_str()
                    prop:checked=move || form.with(|state| state.status == status)
                    on:change=move |_| form.update(|state| state.status = status)
                />
                <span class="text-sm text-fg">{status.label()}</span>
            </label>
        }
    };

    view! {
        <Modal is_open=is_open title="Mark Attendance" on_close=on_close>
            <InlineErrorMessage error=error />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div>
                    <label class="block text-sm font-medium text-fg mb-1">"Employee *"</label>
                    <select
                        required=true
                        class="w-full border border-form-control-border rounded-lg px-3 py-2 bg-form-control-bg"
                        prop:value=selected
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.employee_id = value);
                        }
                    >
                        <option value="">"Select Employee"</option>
                        {options}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg mb-1">"Date *"</label>
                    <input
                        type="date"
                        required=true
                        class="w-full border border-form-control-border rounded-lg px-3 py-2 bg-form-control-bg"
                        prop:value=move || form.with(|state| state.date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.date = value);
                        }
                    />
                </div>
                <fieldset>
                    <legend class="block text-sm font-medium text-fg mb-2">"Status *"</legend>
                    <div class="flex gap-4">
                        {status_choice(AttendanceStatus::Present)}
                        {status_choice(AttendanceStatus::Absent)}
                    </div>
                </fieldset>
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
                        {move || if submitting.get() { "Marking..." } else { "Mark Attendance" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
