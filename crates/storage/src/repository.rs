use async_trait::async_trait;
use progress_core::model::{ProgressId, ProgressRecord};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for progress records.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// List every stored record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the records cannot be read.
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError>;

    /// Fetch a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_progress(&self, id: &ProgressId) -> Result<ProgressRecord, StorageError>;

    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a record with the same ID exists.
    async fn insert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with `records`, kept in the given order.
    #[must_use]
    pub fn with_records(records: Vec<ProgressRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_progress(&self, id: &ProgressId) -> Result<ProgressRecord, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.iter().any(|existing| existing.id() == record.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(record.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}
