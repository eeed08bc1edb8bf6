use dioxus::prelude::*;

use crate::vm::{LOAD_FAILURE_MESSAGE, LoadState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ProgressLoad,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ProgressLoad => LOAD_FAILURE_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::ProgressLoad),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Collapse a resource into the three-way load lifecycle.
#[must_use]
pub fn load_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> LoadState<T> {
    match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => LoadState::Loading,
        ViewState::Ready(data) => LoadState::Ready(data),
        ViewState::Error(err) => LoadState::Error(err.message()),
    }
}
