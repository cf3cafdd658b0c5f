use leptos::*;

/// Overlay frame for create forms. Clicking the backdrop or the close
/// button calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-start sm:items-center justify-center p-0 sm:p-4">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <div
                    class="relative bg-surface-elevated w-full sm:max-w-md sm:rounded-xl shadow-xl max-h-screen sm:max-h-[90vh] overflow-y-auto"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="sticky top-0 bg-surface-elevated px-4 sm:px-6 py-4 border-b border-border flex items-center justify-between">
                        <h3 class="text-lg sm:text-xl font-bold text-fg">{title.get_value()}</h3>
                        <button
                            type="button"
                            class="p-2 rounded-lg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| on_close.call(())
                        >
                            <span class="sr-only">"Close"</span>
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            </svg>
                        </button>
                    </div>
                    <div class="p-4 sm:p-6">{children.with_value(|children| children())}</div>
                </div>
            </div>
        </Show>
    }
}

/// Labelled, required text input bound to a string field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg mb-1">{label}" *"</label>
            <input
                type=input_type.unwrap_or("text")
                required=true
                class="w-full border border-form-control-border rounded-lg px-3 py-2 bg-form-control-bg"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}
