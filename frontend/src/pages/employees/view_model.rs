use super::{
    repository::{EmployeeDetail, EmployeesRepository},
    utils::EmployeeFormState,
};
use crate::{
    api::{ApiClient, Employee},
    state::{FormState, LoadState},
};
use leptos::*;
use std::rc::Rc;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load employees";
pub const CREATE_ERROR_FALLBACK: &str = "Failed to create employee";
pub const DELETE_ERROR_FALLBACK: &str = "Failed to delete employee";
pub const DETAIL_ERROR_FALLBACK: &str = "Failed to load employee details";
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    repository: StoredValue<EmployeesRepository>,
    pub employees: RwSignal<LoadState<Vec<Employee>>>,
    pub form: RwSignal<EmployeeFormState>,
    pub submit_state: RwSignal<FormState>,
    pub modal_open: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub deleting: RwSignal<bool>,
    pub delete_error: RwSignal<Option<String>>,
    pub selected: RwSignal<Option<i64>>,
    pub detail: RwSignal<LoadState<EmployeeDetail>>,
}

impl EmployeesViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            repository: store_value(EmployeesRepository::new_with_client(Rc::new(api))),
            employees: create_rw_signal(LoadState::Idle),
            form: create_rw_signal(EmployeeFormState::default()),
            submit_state: create_rw_signal(FormState::Idle),
            modal_open: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            deleting: create_rw_signal(false),
            delete_error: create_rw_signal(None),
            selected: create_rw_signal(None),
            detail: create_rw_signal(LoadState::Idle),
        }
    }

    pub async fn load(&self) {
        let Some(repository) = self.repository.try_get_value() else {
            return;
        };
        log::debug!("employees: loading");
        self.employees.set(LoadState::Loading);
        let result = repository.fetch_employees().await;
        if let Err(err) = &result {
            log::warn!("employees: load failed: {}", err);
        }
        self.employees
            .set(LoadState::from_result(result, |err| err.user_message(LOAD_ERROR_FALLBACK)));
    }

    pub fn reload(&self) {
        let vm = *self;
        spawn_local(async move { vm.load().await });
    }

    /// Opening and closing clear a stale inline error; an in-flight
    /// submission keeps its `Submitting` state.
    pub fn open_modal(&self) {
        self.clear_submit_error();
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.clear_submit_error();
    }

    fn clear_submit_error(&self) {
        if !self.submit_state.get_untracked().is_submitting() {
            self.submit_state.set(FormState::Idle);
        }
    }

    /// Creates the employee described by the form. Success closes the modal,
    /// clears the fields and re-fetches the list once.
    pub async fn submit(&self) {
        if self.submit_state.get_untracked().is_submitting() {
            return;
        }
        let form = self.form.get_untracked();
        if !form.is_valid() {
            self.submit_state
                .set(FormState::Error(REQUIRED_FIELDS_MESSAGE.to_string()));
            return;
        }

        self.submit_state.set(FormState::Submitting);
        let repository = self.repository.get_value();
        match repository.create_employee(&form.to_request()).await {
            Ok(created) => {
                log::debug!("employees: created {}", created.employee_id);
                self.submit_state.set(FormState::Idle);
                self.form.update(|form| form.reset());
                self.modal_open.set(false);
                self.load().await;
            }
            Err(err) => {
                self.submit_state
                    .set(FormState::Error(err.user_message(CREATE_ERROR_FALLBACK)));
            }
        }
    }

    pub fn submit_in_background(&self) {
        let vm = *self;
        spawn_local(async move { vm.submit().await });
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub async fn confirm_delete(&self) {
        let Some(employee) = self.pending_delete.get_untracked() else {
            return;
        };
        if self.deleting.get_untracked() {
            return;
        }
        let Some(repository) = self.repository.try_get_value() else {
            return;
        };
        self.deleting.set(true);
        let result = repository.delete_employee(employee.id).await;
        // The page may have unmounted while the request was in flight.
        let Some(selected) = self.selected.try_get_untracked() else {
            return;
        };
        self.deleting.set(false);
        self.pending_delete.set(None);
        match result {
            Ok(()) => {
                log::debug!("employees: deleted {}", employee.id);
                if selected == Some(employee.id) {
                    self.close_detail();
                }
                self.load().await;
            }
            Err(err) => {
                self.delete_error
                    .set(Some(err.user_message(DELETE_ERROR_FALLBACK)));
            }
        }
    }

    pub fn confirm_delete_in_background(&self) {
        let vm = *self;
        spawn_local(async move { vm.confirm_delete().await });
    }

    pub fn dismiss_delete_error(&self) {
        self.delete_error.set(None);
    }

    /// Fetches the employee and their history together. A response for an
    /// employee that is no longer selected is dropped.
    pub async fn open_detail(&self, id: i64) {
        let Some(repository) = self.repository.try_get_value() else {
            return;
        };
        if self.selected.try_set(Some(id)).is_some() {
            return;
        }
        self.detail.set(LoadState::Loading);
        let result = repository.fetch_detail(id).await;
        if self.selected.try_get_untracked() != Some(Some(id)) {
            return;
        }
        self.detail
            .set(LoadState::from_result(result, |err| err.user_message(DETAIL_ERROR_FALLBACK)));
    }

    pub fn open_detail_in_background(&self, id: i64) {
        let vm = *self;
        spawn_local(async move { vm.open_detail(id).await });
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
        self.detail.set(LoadState::Idle);
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    EmployeesViewModel::new(api)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::{attendance_json, employee, employee_json};
    use serde_json::json;

    fn view_model(server: &MockServer) -> EmployeesViewModel {
        EmployeesViewModel::new(ApiClient::new_with_base_url(server.base_url()))
    }

    fn fill_form(vm: &EmployeesViewModel) {
        vm.form.set(EmployeeFormState {
            employee_id: "EMP002".into(),
            full_name: "Grace Hopper".into(),
            email: "grace@company.com".into(),
            department: "Research".into(),
        });
    }

    #[tokio::test]
    async fn load_handles_empty_and_failed_lists() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([]));
        });
        let vm = view_model(&server);
        vm.load().await;
        assert_eq!(vm.employees.get_untracked(), LoadState::Ready(Vec::new()));

        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(500).json_body(json!({}));
        });
        vm.load().await;
        assert_eq!(
            vm.employees.get_untracked(),
            LoadState::Failed(LOAD_ERROR_FALLBACK.into())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_submit_closes_modal_clears_form_and_refetches_once() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(201).json_body(employee_json(2, "EMP002", "Grace Hopper"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200)
                .json_body(json!([employee_json(2, "EMP002", "Grace Hopper")]));
        });
        let vm = view_model(&server);
        vm.open_modal();
        fill_form(&vm);

        vm.submit().await;

        assert!(!vm.modal_open.get_untracked());
        assert_eq!(vm.form.get_untracked(), EmployeeFormState::default());
        assert_eq!(vm.submit_state.get_untracked(), FormState::Idle);
        assert_eq!(server.hits(POST, "/api/employees"), 1);
        assert_eq!(server.hits(GET, "/api/employees"), 1);
        assert_eq!(
            vm.employees.get_untracked().ready().map(Vec::len),
            Some(1)
        );
        let body = server.last_request(POST, "/api/employees").and_then(|r| r.body);
        assert_eq!(body.unwrap()["department"], json!("Research"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_submit_keeps_modal_open_without_refetch() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(400)
                .json_body(json!({ "detail": "Employee ID already exists" }));
        });
        let vm = view_model(&server);
        vm.open_modal();
        fill_form(&vm);

        vm.submit().await;

        assert!(vm.modal_open.get_untracked());
        assert_eq!(
            vm.submit_state.get_untracked(),
            FormState::Error("Employee ID already exists".into())
        );
        assert_eq!(vm.form.get_untracked().full_name, "Grace Hopper");
        assert_eq!(server.hits(GET, "/api/employees"), 0);

        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(422).json_body(json!({ "detail": [{ "msg": "invalid email" }] }));
        });
        vm.submit().await;
        assert_eq!(
            vm.submit_state.get_untracked(),
            FormState::Error(CREATE_ERROR_FALLBACK.into())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_any_request() {
        let runtime = create_runtime();
        let server = MockServer::start();
        let vm = view_model(&server);
        vm.open_modal();

        vm.submit().await;

        assert_eq!(
            vm.submit_state.get_untracked(),
            FormState::Error(REQUIRED_FIELDS_MESSAGE.into())
        );
        assert!(server.received().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancelled_delete_sends_nothing() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200)
                .json_body(json!([employee_json(1, "EMP001", "Ada Lovelace")]));
        });
        let vm = view_model(&server);
        vm.load().await;
        let before = vm.employees.get_untracked();

        vm.request_delete(employee(1, "EMP001", "Ada Lovelace"));
        vm.cancel_delete();
        vm.confirm_delete().await;

        assert_eq!(server.hits(DELETE, "/api/employees/1"), 0);
        assert_eq!(vm.employees.get_untracked(), before);
        assert_eq!(server.hits(GET, "/api/employees"), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn confirmed_delete_refetches_and_failure_raises_alert() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/1");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([]));
        });
        let vm = view_model(&server);

        vm.request_delete(employee(1, "EMP001", "Ada Lovelace"));
        vm.confirm_delete().await;
        assert_eq!(server.hits(DELETE, "/api/employees/1"), 1);
        assert_eq!(server.hits(GET, "/api/employees"), 1);
        assert_eq!(vm.pending_delete.get_untracked(), None);
        assert_eq!(vm.delete_error.get_untracked(), None);

        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/7");
            then.status(404).json_body(json!({ "detail": "Employee not found" }));
        });
        vm.request_delete(employee(7, "EMP007", "Missing"));
        vm.confirm_delete().await;
        assert_eq!(
            vm.delete_error.get_untracked().as_deref(),
            Some("Employee not found")
        );
        assert_eq!(server.hits(GET, "/api/employees"), 1);

        vm.dismiss_delete_error();
        assert_eq!(vm.delete_error.get_untracked(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn detail_loads_employee_and_history_together() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/1");
            then.status(200).json_body(employee_json(1, "EMP001", "Ada Lovelace"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/1/attendance");
            then.status(200).json_body(json!([
                attendance_json(1, 1, "2025-01-01", "present"),
                attendance_json(2, 1, "2025-01-02", "absent")
            ]));
        });
        let vm = view_model(&server);

        vm.open_detail(1).await;
        let detail = vm.detail.get_untracked();
        let detail = detail.ready().unwrap();
        assert_eq!(detail.employee.full_name, "Ada Lovelace");
        assert_eq!(detail.history.len(), 2);

        vm.close_detail();
        assert_eq!(vm.selected.get_untracked(), None);
        assert_eq!(vm.detail.get_untracked(), LoadState::Idle);
        runtime.dispose();
    }

    #[tokio::test]
    async fn requests_finishing_after_unmount_are_ignored() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/1");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([]));
        });
        let vm = view_model(&server);
        vm.request_delete(employee(1, "EMP001", "Ada Lovelace"));
        vm.selected.dispose();

        vm.confirm_delete().await;
        assert_eq!(server.hits(DELETE, "/api/employees/1"), 1);
        assert_eq!(server.hits(GET, "/api/employees"), 0);

        vm.open_detail(1).await;
        assert_eq!(server.hits(GET, "/api/employees/1"), 0);
        assert_eq!(vm.detail.get_untracked(), LoadState::Idle);
        runtime.dispose();
    }

    #[tokio::test]
    async fn toggling_modal_mid_submit_keeps_the_submission_guard() {
        let runtime = create_runtime();
        let server = MockServer::start();
        let vm = view_model(&server);
        vm.open_modal();
        fill_form(&vm);
        vm.submit_state.set(FormState::Submitting);

        vm.close_modal();
        vm.open_modal();
        assert_eq!(vm.submit_state.get_untracked(), FormState::Submitting);

        vm.submit().await;
        assert_eq!(server.hits(POST, "/api/employees"), 0);

        vm.submit_state.set(FormState::Error("Employee ID already exists".into()));
        vm.close_modal();
        assert_eq!(vm.submit_state.get_untracked(), FormState::Idle);
        runtime.dispose();
    }

    #[tokio::test]
    async fn detail_failure_in_either_fetch_uses_fallback() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/3");
            then.status(200).json_body(employee_json(3, "EMP003", "Alan Turing"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/3/attendance");
            then.status(500).json_body(json!({}));
        });
        let vm = view_model(&server);

        vm.open_detail(3).await;
        assert_eq!(
            vm.detail.get_untracked(),
            LoadState::Failed(DETAIL_ERROR_FALLBACK.into())
        );
        runtime.dispose();
    }
}
