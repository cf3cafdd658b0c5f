use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/api/employees").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response)
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        let url = self.endpoint(&format!("/api/employees/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response)
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/api/employees").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        Self::parse_json(response)
    }

    /// The response body, if any, is ignored.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/api/employees/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::expect_success(response)
    }

    pub async fn list_employee_attendance(
        &self,
        id: i64,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/api/employees/{}/attendance", id))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response)
    }
}
