use crate::components::{
    common::{Button, ButtonVariant},
    layout::Layout,
};
use leptos::*;

#[component]
pub fn EmployeesFrame(on_add: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <Layout active="/employees">
            <div class="space-y-4 sm:space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-3">
                    <h2 class="text-xl sm:text-2xl font-bold text-fg">"Employees"</h2>
                    <Button variant=ButtonVariant::Primary on:click=move |_| on_add.call(())>
                        "+ "
                        <span class="hidden sm:inline">"Add Employee"</span>
                        <span class="sm:hidden">"Add"</span>
                    </Button>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
