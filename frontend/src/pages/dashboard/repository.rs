use crate::api::{ApiClient, ApiError, DashboardStats};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get_dashboard_stats().await
    }
}
