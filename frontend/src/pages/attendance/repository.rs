use super::utils::EmployeeDirectory;
use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, NewAttendanceRecord};
use chrono::NaiveDate;
use futures::future::try_join;
use std::rc::Rc;

/// Everything the attendance page renders from one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceData {
    pub records: Vec<AttendanceRecord>,
    pub employees: Vec<Employee>,
    pub directory: EmployeeDirectory,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Records (filtered by `date` when set) and the employee list, fetched
    /// concurrently. Either failure fails the whole load.
    pub async fn fetch_page(&self, date: Option<NaiveDate>) -> Result<AttendanceData, ApiError> {
        let (records, employees) =
            try_join(self.client.list_attendance(date), self.client.list_employees()).await?;
        let directory = EmployeeDirectory::from_employees(&employees);
        Ok(AttendanceData {
            records,
            employees,
            directory,
        })
    }

    pub async fn mark_attendance(
        &self,
        payload: &NewAttendanceRecord,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.create_attendance(payload).await
    }
}
