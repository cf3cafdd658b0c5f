use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = self.endpoint("/api/dashboard/stats").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response)
    }
}
