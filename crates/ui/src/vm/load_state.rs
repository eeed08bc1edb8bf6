/// Banner text shown when the progress list cannot be fetched.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load progress data. Please try again later.";

/// Lifecycle of a one-shot load.
///
/// A single tagged value, so "loading with an error" cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Error(&'static str),
}

impl<T> LoadState<T> {
    /// Fold a pending (`None`) or settled fetch outcome into a state.
    ///
    /// Every failure collapses to the same user-facing message.
    #[must_use]
    pub fn from_outcome<E>(outcome: Option<Result<T, E>>) -> Self {
        match outcome {
            None => Self::Loading,
            Some(Ok(data)) => Self::Ready(data),
            Some(Err(_)) => Self::Error(LOAD_FAILURE_MESSAGE),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Error(message) => Some(*message),
            _ => None,
        }
    }
}

/// The error banner to show, if any.
///
/// Dismissing hides the banner without touching the load state, so nothing is
/// refetched.
#[must_use]
pub fn banner_message<T>(state: &LoadState<T>, dismissed: bool) -> Option<&'static str> {
    if dismissed {
        return None;
    }
    state.error_message()
}
