use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12 text-center" data-testid="empty-state">
            <div class="bg-surface-muted p-4 rounded-full mb-4 text-fg-muted">
                <svg class="h-8 w-8" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20 13V6a2 2 0 00-2-2H6a2 2 0 00-2 2v7m16 0v5a2 2 0 01-2 2H6a2 2 0 01-2-2v-5m16 0h-2.586a1 1 0 00-.707.293l-2.414 2.414a1 1 0 01-.707.293h-3.172a1 1 0 01-.707-.293l-2.414-2.414A1 1 0 006.586 13H4" />
                </svg>
            </div>
            <h3 class="text-lg font-medium text-fg mb-1">{title}</h3>
            {description
                .filter(|desc| !desc.is_empty())
                .map(|desc| view! { <p class="text-fg-muted" data-testid="empty-state-description">{desc}</p> })}
        </div>
    }
}
