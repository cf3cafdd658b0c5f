use super::{
    repository::{AttendanceData, AttendanceRepository},
    utils::AttendanceFormState,
};
use crate::{
    api::ApiClient,
    state::{FormState, LoadState},
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load attendance data";
pub const CREATE_ERROR_FALLBACK: &str = "Failed to mark attendance";

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    repository: StoredValue<AttendanceRepository>,
    pub data: RwSignal<LoadState<AttendanceData>>,
    pub filter: RwSignal<Option<NaiveDate>>,
    pub form: RwSignal<AttendanceFormState>,
    pub submit_state: RwSignal<FormState>,
    pub modal_open: RwSignal<bool>,
}

impl AttendanceViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            repository: store_value(AttendanceRepository::new_with_client(Rc::new(api))),
            data: create_rw_signal(LoadState::Idle),
            filter: create_rw_signal(None),
            form: create_rw_signal(AttendanceFormState::default()),
            submit_state: create_rw_signal(FormState::Idle),
            modal_open: create_rw_signal(false),
        }
    }

    /// Loads records for the current filter plus the employee list.
    // TODO: tag each load with a generation counter so a response for a
    // superseded filter cannot overwrite a newer one.
    pub async fn load(&self) {
        let Some(repository) = self.repository.try_get_value() else {
            return;
        };
        let filter = self.filter.get_untracked();
        log::debug!("attendance: loading (date={:?})", filter);
        self.data.set(LoadState::Loading);
        let result = repository.fetch_page(filter).await;
        if let Err(err) = &result {
            log::warn!("attendance: load failed: {}", err);
        }
        self.data
            .set(LoadState::from_result(result, |err| err.user_message(LOAD_ERROR_FALLBACK)));
    }

    pub fn reload(&self) {
        let vm = *self;
        spawn_local(async move { vm.load().await });
    }

    /// Changes the date filter. The page re-fetches whenever it changes.
    pub fn set_filter(&self, date: Option<NaiveDate>) {
        if self.filter.get_untracked() != date {
            self.filter.set(date);
        }
    }

    pub fn clear_filter(&self) {
        self.set_filter(None);
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

    pub async fn submit(&self) {
        if self.submit_state.get_untracked().is_submitting() {
            return;
        }
        let payload = match self.form.with_untracked(AttendanceFormState::to_request) {
            Ok(payload) => payload,
            Err(message) => {
                self.submit_state.set(FormState::Error(message.to_string()));
                return;
            }
        };

        self.submit_state.set(FormState::Submitting);
        let repository = self.repository.get_value();
        match repository.mark_attendance(&payload).await {
            Ok(record) => {
                log::debug!(
                    "attendance: marked employee {} {} on {}",
                    record.employee_id,
                    record.status.as_str(),
                    record.date
                );
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
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    AttendanceViewModel::new(api)
}
