use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    components::{cards::Avatar, empty_state::EmptyState},
    pages::attendance::utils::{empty_state_description, EmployeeDirectory},
    utils::time::format_display_date,
};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Present => "bg-status-success-bg text-status-success-text",
        AttendanceStatus::Absent => "bg-status-error-bg text-status-error-text",
    };
    view! {
        <span class=format!(
            "inline-flex items-center gap-1 px-2.5 py-1 rounded-full text-xs sm:text-sm font-medium {}",
            class
        )>
            {status.label()}
        </span>
    }
}

/// Table on wide viewports, stacked cards on narrow ones.
#[component]
pub fn AttendanceRecords(
    records: Vec<AttendanceRecord>,
    directory: EmployeeDirectory,
    filter: Option<NaiveDate>,
) -> impl IntoView {
    if records.is_empty() {
        return view! {
            <EmptyState
                title="No attendance records found"
                description=empty_state_description(filter)
            />
        }
        .into_view();
    }

    let rows: Vec<(AttendanceRecord, String)> = records
        .into_iter()
        .map(|record| {
            let name = directory.display_name(record.employee_id).to_string();
            (record, name)
        })
        .collect();

    let table_rows = rows
        .iter()
        .map(|(record, name)| {
            view! {
                <tr class="hover:bg-surface-muted">
                    <td class="py-3 px-4">
                        <div class="flex items-center gap-3">
                            <Avatar name=name.clone() small=true />
                            <span class="font-medium text-fg" data-testid="employee-name">{name.clone()}</span>
                        </div>
                    </td>
                    <td class="py-3 px-4 text-fg-muted">{format_display_date(record.date)}</td>
                    <td class="py-3 px-4"><StatusBadge status=record.status /></td>
                </tr>
            }
        })
        .collect_view();

    let cards = rows
        .iter()
        .map(|(record, name)| {
            view! {
                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-4">
                    <div class="flex items-center justify-between gap-3">
                        <div class="flex items-center gap-3 min-w-0">
                            <Avatar name=name.clone() small=true />
                            <div class="min-w-0">
                                <p class="font-medium text-fg truncate">{name.clone()}</p>
                                <p class="text-xs text-fg-muted">{format_display_date(record.date)}</p>
                            </div>
                        </div>
                        <StatusBadge status=record.status />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="hidden md:block bg-surface-elevated rounded-xl shadow-sm border border-border overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-surface-muted border-b border-border">
                        <tr>
                            <th class="text-left py-3 px-4 text-sm font-medium text-fg">"Employee"</th>
                            <th class="text-left py-3 px-4 text-sm font-medium text-fg">"Date"</th>
                            <th class="text-left py-3 px-4 text-sm font-medium text-fg">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">{table_rows}</tbody>
                </table>
            </div>
        </div>
        <div class="md:hidden space-y-3">{cards}</div>
    }
    .into_view()
}
