use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{
    attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="HRMS Lite"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <Redirect path="/"/> }
}
