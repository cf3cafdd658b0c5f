use crate::{
    api::Employee,
    components::{cards::Avatar, empty_state::EmptyState},
};
use leptos::*;

const BADGE_ICON: &str = "M10 6H5a2 2 0 00-2 2v9a2 2 0 002 2h14a2 2 0 002-2V8a2 2 0 00-2-2h-5m-4 0V5a2 2 0 114 0v1m-4 0a2 2 0 104 0";
const MAIL_ICON: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const BUILDING_ICON: &str = "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4";
const TRASH_ICON: &str = "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16";

#[component]
pub fn EmployeeList(
    employees: Vec<Employee>,
    on_select: Callback<i64>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    if employees.is_empty() {
        return view! {
            <EmptyState
                title="No employees found"
                description="Add your first employee to get started"
            />
        }
        .into_view();
    }

    let cards = employees
        .into_iter()
        .map(|employee| {
            view! { <EmployeeCard employee=employee on_select=on_select on_delete=on_delete /> }
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4" data-testid="employee-grid">
            {cards}
        </div>
    }
    .into_view()
}

#[component]
fn EmployeeCard(
    employee: Employee,
    on_select: Callback<i64>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let id = employee.id;
    let for_delete = store_value(employee.clone());

    view! {
        <div
            class="bg-surface-elevated rounded-xl shadow-sm border border-border p-4 sm:p-6 hover:shadow-md transition-shadow cursor-pointer"
            on:click=move |_| on_select.call(id)
        >
            <div class="flex items-start justify-between mb-3 sm:mb-4">
                <Avatar name=employee.full_name.clone() />
                <button
                    type="button"
                    class="p-1.5 text-fg-muted hover:text-status-error-text hover:bg-status-error-bg rounded-lg transition-colors"
                    aria-label="Delete employee"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.call(for_delete.get_value());
                    }
                >
                    <Icon path=TRASH_ICON />
                </button>
            </div>
            <h3 class="font-semibold text-base sm:text-lg text-fg mb-1 truncate">{employee.full_name.clone()}</h3>
            <div class="space-y-1.5 sm:space-y-2 text-sm text-fg-muted">
                <div class="flex items-center gap-2 min-w-0">
                    <Icon path=BADGE_ICON />
                    <span class="truncate">{employee.employee_id.clone()}</span>
                </div>
                <div class="flex items-center gap-2 min-w-0">
                    <Icon path=MAIL_ICON />
                    <span class="truncate text-xs sm:text-sm">{employee.email.clone()}</span>
                </div>
                <div class="flex items-center gap-2 min-w-0">
                    <Icon path=BUILDING_ICON />
                    <span class="truncate">{employee.department.clone()}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Icon(path: &'static str) -> impl IntoView {
    view! {
        <svg class="h-4 w-4 shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}
