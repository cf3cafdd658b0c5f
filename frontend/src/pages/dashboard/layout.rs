use crate::{components::layout::Layout, utils::time};
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    let today = time::format_long_date(time::today_local());
    view! {
        <Layout active="/">
            <div class="space-y-6">
                <header>
                    <h1 class="text-2xl sm:text-3xl font-bold text-fg">"Dashboard"</h1>
                    <p class="text-sm sm:text-base text-fg-muted mt-1">{today}</p>
                </header>
                {children()}
            </div>
        </Layout>
    }
}
