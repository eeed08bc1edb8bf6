#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_api;
pub mod progress_service;

pub use progress_core::Clock;

pub use app_services::{AppServices, ProgressBackend};
pub use error::{AppServicesError, ProgressApiError, ProgressServiceError};
pub use progress_api::{ProgressApiClient, ProgressApiConfig};
pub use progress_service::ProgressService;
