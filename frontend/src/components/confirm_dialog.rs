use leptos::ev::KeyboardEvent;
use leptos::*;

const PRIMARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
const DANGER_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50";
const SECONDARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated";

/// Backdrop plus centered panel shared by both dialogs. `on_escape`, when
/// given, also closes on backdrop click.
#[component]
fn DialogFrame(
    role: &'static str,
    #[prop(optional)] on_escape: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| {
                    if let Some(cb) = on_escape {
                        cb.call(());
                    }
                }
            ></div>
            <div
                class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                role=role
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        if let Some(cb) = on_escape {
                            ev.prevent_default();
                            cb.call(());
                        }
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}

/// Two-button confirmation. Cancelling (button, backdrop or Escape) calls
/// `on_cancel` and nothing else.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] confirm_label: Option<&'static str>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive { DANGER_BUTTON } else { PRIMARY_BUTTON };
    let confirm_label = confirm_label.unwrap_or("Confirm");
    let title = store_value(title);
    let message = store_value(message);

    view! {
        <Show when=move || is_open.get()>
            <DialogFrame role="dialog" on_escape=on_cancel>
                <h2 class="text-lg font-semibold text-fg">{title.get_value()}</h2>
                <p class="text-sm text-fg-muted">{message.get_value()}</p>
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_BUTTON on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class=confirm_class
                        disabled=move || confirm_disabled.get()
                        on:click=move |_| on_confirm.call(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </DialogFrame>
        </Show>
    }
}

/// Blocking acknowledgement: the only way out is the single dismiss button.
#[component]
pub fn AlertDialog(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = store_value(title.unwrap_or_else(|| "Something went wrong".to_string()));
    view! {
        <Show when=move || message.get().is_some()>
            <DialogFrame role="alertdialog">
                <h2 class="text-lg font-semibold text-fg">{title.get_value()}</h2>
                <p class="text-sm text-fg-muted">{move || message.get().unwrap_or_default()}</p>
                <div class="flex justify-end">
                    <button type="button" class=PRIMARY_BUTTON on:click=move |_| on_dismiss.call(())>
                        "OK"
                    </button>
                </div>
            </DialogFrame>
        </Show>
    }
}
