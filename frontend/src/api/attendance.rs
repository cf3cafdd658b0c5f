use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, NewAttendanceRecord},
};

impl ApiClient {
    /// Lists attendance, optionally restricted to one exact `date`.
    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/api/attendance").await;
        let mut request = self.http_client().get(url);
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        let response = self.send(request).await?;
        Self::parse_json(response)
    }

    pub async fn create_attendance(
        &self,
        payload: &NewAttendanceRecord,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/api/attendance").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        Self::parse_json(response)
    }
}
