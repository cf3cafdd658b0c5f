use crate::api::{ApiClient, DashboardStats};
use crate::pages::dashboard::repository::DashboardRepository;
use crate::state::LoadState;
use leptos::*;
use std::rc::Rc;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load dashboard data";

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    repository: StoredValue<DashboardRepository>,
    pub stats: RwSignal<LoadState<DashboardStats>>,
}

impl DashboardViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            repository: store_value(DashboardRepository::new_with_client(Rc::new(api))),
            stats: create_rw_signal(LoadState::Idle),
        }
    }

    /// One stats fetch; also the retry path.
    pub async fn load(&self) {
        let Some(repository) = self.repository.try_get_value() else {
            return;
        };
        log::debug!("dashboard: loading stats");
        self.stats.set(LoadState::Loading);
        let result = repository.fetch_stats().await;
        if let Err(err) = &result {
            log::warn!("dashboard stats failed: {}", err);
        }
        self.stats
            .set(LoadState::from_result(result, |err| err.user_message(LOAD_ERROR_FALLBACK)));
    }

    pub fn reload(&self) {
        let vm = *self;
        spawn_local(async move { vm.load().await });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    DashboardViewModel::new(api)
}
