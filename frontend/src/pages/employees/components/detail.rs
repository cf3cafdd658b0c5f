use crate::{
    api::AttendanceStatus,
    components::{
        cards::Avatar,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::employees::{
        repository::EmployeeDetail,
        utils::attendance_totals,
    },
    state::LoadState,
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn EmployeeDetailDrawer(
    #[prop(into)] selected: Signal<Option<i64>>,
    #[prop(into)] detail: Signal<LoadState<EmployeeDetail>>,
    on_close: Callback<()>,
    on_retry: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show when=move || selected.get().is_some()>
            <div class="fixed inset-0 z-50 flex justify-end">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <aside class="relative w-full max-w-md bg-surface-elevated shadow-xl h-full overflow-y-auto" role="dialog" aria-modal="true">
                    <div class="flex items-center justify-between border-b border-border px-6 py-4">
                        <h3 class="text-lg font-semibold text-fg">"Employee Details"</h3>
                        <button
                            type="button"
                            class="p-2 rounded-lg text-fg-muted hover:bg-action-ghost-bg-hover"
                            on:click=move |_| on_close.call(())
                        >
                            <span class="sr-only">"Close"</span>
                            "✕"
                        </button>
                    </div>
                    <div class="p-6">
                        {move || match detail.get() {
                            LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                            LoadState::Failed(message) => {
                                let retry = Callback::new(move |_| {
                                    if let Some(id) = selected.get_untracked() {
                                        on_retry.call(id);
                                    }
                                });
                                view! { <ErrorMessage message=message on_retry=retry /> }.into_view()
                            }
                            LoadState::Ready(detail) => view! { <DetailBody detail=detail /> }.into_view(),
                        }}
                    </div>
                </aside>
            </div>
        </Show>
    }
}

#[component]
fn DetailBody(detail: EmployeeDetail) -> impl IntoView {
    let totals = attendance_totals(&detail.history);
    let EmployeeDetail { employee, history } = detail;

    let rows = if history.is_empty() {
        view! { <p class="text-sm text-fg-muted">"No attendance recorded yet"</p> }.into_view()
    } else {
        let items = history
            .into_iter()
            .map(|record| {
                let badge = match record.status {
                    AttendanceStatus::Present => "bg-status-success-bg text-status-success-text",
                    AttendanceStatus::Absent => "bg-status-error-bg text-status-error-text",
                };
                view! {
                    <li class="flex items-center justify-between py-2">
                        <span class="text-sm text-fg">{format_display_date(record.date)}</span>
                        <span class=format!("px-2.5 py-1 rounded-full text-xs font-medium {}", badge)>
                            {record.status.label()}
                        </span>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="divide-y divide-border">{items}</ul> }.into_view()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center gap-4">
                <Avatar name=employee.full_name.clone() />
                <div class="min-w-0">
                    <p class="text-lg font-semibold text-fg truncate">{employee.full_name.clone()}</p>
                    <p class="text-sm text-fg-muted">{employee.employee_id.clone()}</p>
                </div>
            </div>
            <dl class="grid grid-cols-1 gap-3 text-sm">
                <div>
                    <dt class="text-fg-muted">"Email"</dt>
                    <dd class="text-fg font-medium break-all">{employee.email.clone()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Department"</dt>
                    <dd class="text-fg font-medium">{employee.department.clone()}</dd>
                </div>
            </dl>
            <div class="grid grid-cols-2 gap-3">
                <div class="rounded-lg bg-status-success-bg p-3">
                    <p class="text-xs text-status-success-text">"Present"</p>
                    <p class="text-xl font-bold text-status-success-text" data-testid="present-total">{totals.present}</p>
                </div>
                <div class="rounded-lg bg-status-error-bg p-3">
                    <p class="text-xs text-status-error-text">"Absent"</p>
                    <p class="text-xl font-bold text-status-error-text" data-testid="absent-total">{totals.absent}</p>
                </div>
            </div>
            <div>
                <h4 class="text-sm font-semibold text-fg mb-2">"Attendance History"</h4>
                {rows}
            </div>
        </div>
    }
}
