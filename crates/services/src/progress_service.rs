use std::sync::Arc;

use progress_core::model::{ProgressDraft, ProgressId, ProgressRecord};
use storage::repository::{ProgressRepository, Storage};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Presentation-facing facade over the progress repository.
///
/// Owns the time source and id assignment; it does **not** own UI formatting
/// or any derived statistics.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(clock, Storage::in_memory().progress)
    }

    /// Load every progress record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on repository failures.
    pub async fn fetch_all_progress(&self) -> Result<Vec<ProgressRecord>, ProgressServiceError> {
        match self.progress.list_progress().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "fetched progress records");
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch progress records");
                Err(err.into())
            }
        }
    }

    /// Fetch a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` when the record is missing or
    /// repository access fails.
    pub async fn get_progress(
        &self,
        id: &ProgressId,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        Ok(self.progress.get_progress(id).await?)
    }

    /// Validate a draft, assign it a fresh id, and persist it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Validation` for invalid drafts.
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub async fn add_progress(
        &self,
        draft: ProgressDraft,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let record = draft.validate(ProgressId::generate(), self.clock.now())?;
        self.progress.insert_progress(&record).await?;
        tracing::info!(id = %record.id(), topic = record.topic(), "added progress entry");
        Ok(record)
    }
}
