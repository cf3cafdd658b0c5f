use crate::components::{
    common::{Button, ButtonVariant},
    layout::Layout,
};
use leptos::*;

const CALENDAR_ICON: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";

#[component]
pub fn AttendanceFrame(
    on_mark: Callback<()>,
    /// Rendered next to the "Mark Attendance" button.
    filter: View,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout active="/attendance">
            <div class="space-y-4 sm:space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                    <h2 class="text-xl sm:text-2xl font-bold text-fg">"Attendance"</h2>
                    <div class="flex flex-col sm:flex-row gap-3">
                        {filter}
                        <Button variant=ButtonVariant::Primary on:click=move |_| on_mark.call(())>
                            <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=CALENDAR_ICON />
                            </svg>
                            "Mark Attendance"
                        </Button>
                    </div>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
