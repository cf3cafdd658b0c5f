use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries. Icons are SVG path data (24x24 stroke glyphs).
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/",
        label: "Dashboard",
        icon: "M4 5a1 1 0 011-1h4a1 1 0 011 1v5a1 1 0 01-1 1H5a1 1 0 01-1-1V5zm10 0a1 1 0 011-1h4a1 1 0 011 1v2a1 1 0 01-1 1h-4a1 1 0 01-1-1V5zM4 15a1 1 0 011-1h4a1 1 0 011 1v4a1 1 0 01-1 1H5a1 1 0 01-1-1v-4zm10-3a1 1 0 011-1h4a1 1 0 011 1v7a1 1 0 01-1 1h-4a1 1 0 01-1-1v-7z",
    },
    NavItem {
        path: "/employees",
        label: "Employees",
        icon: "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
    },
    NavItem {
        path: "/attendance",
        label: "Attendance",
        icon: "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
    },
];

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let item = item_path.trim_end_matches('/');
    current == item
}

#[component]
pub fn Sidebar(#[prop(into)] active: String) -> impl IntoView {
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if is_active(item.path, &active) {
                "flex items-center gap-3 px-4 py-3 rounded-lg bg-action-primary-subtle text-action-primary-bg font-medium"
            } else {
                "flex items-center gap-3 px-4 py-3 rounded-lg text-fg-muted hover:bg-action-ghost-bg-hover"
            };
            view! {
                <a href=item.path class=class>
                    <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=item.icon />
                    </svg>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="fixed left-0 top-0 h-full w-64 bg-surface-elevated border-r border-border z-10 hidden lg:block">
            <div class="p-6 border-b border-border">
                <h1 class="text-xl font-bold text-action-primary-bg">"HRMS Lite"</h1>
            </div>
            <nav class="p-4 space-y-1">{links}</nav>
            <div class="absolute bottom-0 left-0 right-0 p-4 border-t border-border">
                <p class="text-xs text-fg-muted text-center">"Admin Panel v1.0"</p>
            </div>
        </aside>
    }
}

#[component]
pub fn MobileHeader(#[prop(into)] active: String) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if is_active(item.path, &active) {
                "block px-3 py-2 rounded-md text-sm font-medium text-action-primary-bg bg-action-primary-subtle"
            } else {
                "block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
            };
            view! {
                <a href=item.path class=class on:click=move |_| set_menu_open.set(false)>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="lg:hidden bg-surface-elevated border-b border-border">
            <div class="flex justify-between items-center h-14 px-4">
                <h1 class="text-lg font-bold text-action-primary-bg">"HRMS Lite"</h1>
                <button
                    type="button"
                    class="inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:bg-action-ghost-bg-hover"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-expanded=move || menu_open.get()
                    aria-controls="mobile-nav"
                >
                    <span class="sr-only">
                        {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                    </span>
                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav id="mobile-nav" class="px-4 py-3 space-y-2 border-t border-border">
                    {links.clone()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(into)] active: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Sidebar active=active.clone() />
            <MobileHeader active=active />
            <main class="lg:ml-64 p-4 sm:p-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Full-width error banner. The retry button only renders with `on_retry`.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded-lg mb-4">
            <div class="flex items-start gap-3">
                <div class="flex-shrink-0">
                    <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                </div>
                <div class="flex-1">
                    <h3 class="font-medium">"Error"</h3>
                    <p class="text-sm mt-1">{message}</p>
                    {on_retry.map(|retry| view! {
                        <button
                            type="button"
                            class="mt-3 text-sm font-medium underline"
                            on:click=move |_| retry.call(())
                        >
                            "Try again"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
