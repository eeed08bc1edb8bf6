use std::sync::Arc;

use storage::repository::{ProgressRepository, Storage};

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_api::{ProgressApiClient, ProgressApiConfig};
use crate::progress_service::ProgressService;

/// Where progress records come from.
#[derive(Clone, Debug)]
pub enum ProgressBackend {
    Sqlite { db_url: String },
    Api(ProgressApiConfig),
}

/// Assembles app-facing services for a chosen backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services for the given backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new(backend: ProgressBackend, clock: Clock) -> Result<Self, AppServicesError> {
        let repo: Arc<dyn ProgressRepository> = match backend {
            ProgressBackend::Sqlite { db_url } => Storage::sqlite(&db_url).await?.progress,
            ProgressBackend::Api(config) => {
                tracing::info!(base_url = %config.base_url, "using progress api backend");
                Arc::new(ProgressApiClient::new(config))
            }
        };
        Ok(Self::from_repository(clock, repo))
    }

    #[must_use]
    pub fn from_repository(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            progress: Arc::new(ProgressService::new(clock, repo)),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
