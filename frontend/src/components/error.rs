use leptos::*;

/// Error text shown inside an open form; renders nothing without a message.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="mb-4 p-3 bg-status-error-bg text-status-error-text rounded-lg text-sm" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
