use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, NewEmployee};
use futures::future::try_join;
use std::rc::Rc;

/// An employee together with their full attendance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub history: Vec<AttendanceRecord>,
}

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }

    pub async fn fetch_detail(&self, id: i64) -> Result<EmployeeDetail, ApiError> {
        let (employee, history) = try_join(
            self.client.get_employee(id),
            self.client.list_employee_attendance(id),
        )
        .await?;
        Ok(EmployeeDetail { employee, history })
    }
}
