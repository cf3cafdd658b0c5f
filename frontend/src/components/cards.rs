use leptos::*;

use crate::utils::text::avatar_initial;

/// One dashboard count tile.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    value: u64,
    /// Tailwind background class for the icon badge.
    color: &'static str,
    /// SVG path data of the badge icon.
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border flex items-center gap-4 p-4 sm:p-6">
            <div class=format!("p-3 rounded-lg shrink-0 {}", color)>
                <svg class="h-6 w-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
                </svg>
            </div>
            <div class="min-w-0">
                <p class="text-sm text-fg-muted truncate">{title}</p>
                <p class="text-2xl font-bold text-fg" data-testid="stat-value">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Avatar(#[prop(into)] name: String, #[prop(optional)] small: bool) -> impl IntoView {
    let size = if small {
        "w-8 h-8 text-sm"
    } else {
        "w-10 h-10 sm:w-12 sm:h-12 text-base sm:text-lg"
    };
    view! {
        <div class=format!(
            "{} bg-action-primary-subtle rounded-full flex items-center justify-center text-action-primary-bg font-bold shrink-0",
            size
        )>
            {avatar_initial(&name)}
        </div>
    }
}
