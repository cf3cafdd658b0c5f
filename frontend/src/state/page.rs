/// Lifecycle of one page's fetched data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result<E>(result: Result<T, E>, on_error: impl FnOnce(E) -> String) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(on_error(err)),
        }
    }
}

/// Lifecycle of a create form's submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }
}
