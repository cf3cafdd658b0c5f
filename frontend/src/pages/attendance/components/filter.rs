use crate::utils::time::{format_input_date, parse_input_date};
use chrono::NaiveDate;
use leptos::*;

const FILTER_ICON: &str = "M3 4a1 1 0 011-1h16a1 1 0 011 1v2.586a1 1 0 01-.293.707l-6.414 6.414a1 1 0 00-.293.707V17l-4 4v-6.586a1 1 0 00-.293-.707L3.293 7.293A1 1 0 013 6.586V4z";

/// Single exact-date filter. Clearing the input or pressing the clear
/// control reports `None`.
#[component]
pub fn DateFilter(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 bg-surface-elevated px-3 py-2 rounded-lg border border-border">
            <svg class="h-4 w-4 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=FILTER_ICON />
            </svg>
            <input
                type="date"
                aria-label="Filter by date"
                class="outline-none text-sm bg-transparent"
                prop:value=move || value.get().map(format_input_date).unwrap_or_default()
                on:change=move |ev| on_change.call(parse_input_date(&event_target_value(&ev)))
            />
            <Show when=move || value.get().is_some()>
                <button
                    type="button"
                    aria-label="Clear date filter"
                    class="text-fg-muted hover:text-fg"
                    on:click=move |_| on_change.call(None)
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
