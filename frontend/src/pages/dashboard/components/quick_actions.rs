use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SHORTCUTS: [Shortcut; 2] = [
    Shortcut {
        href: "/employees",
        title: "Manage Employees",
        description: "Add, view, or remove employees",
    },
    Shortcut {
        href: "/attendance",
        title: "Mark Attendance",
        description: "Record daily attendance",
    },
];

#[component]
pub fn QuickActions() -> impl IntoView {
    let links = SHORTCUTS
        .iter()
        .map(|shortcut| {
            view! {
                <a
                    href=shortcut.href
                    class="block p-4 rounded-lg border border-border hover:border-action-primary-border hover:bg-action-primary-subtle transition-colors"
                >
                    <h3 class="font-medium text-fg">{shortcut.title}</h3>
                    <p class="text-sm text-fg-muted mt-1">{shortcut.description}</p>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="bg-surface-elevated rounded-xl shadow-sm border border-border p-4 sm:p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4">{links}</div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shortcuts_link_to_employees_and_attendance() {
        let html = render_to_string(|| view! { <QuickActions /> });
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("href=\"/attendance\""));
        assert!(html.contains("Manage Employees"));
        assert!(html.contains("Mark Attendance"));
    }
}
