use std::env;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use progress_core::model::{ProgressId, ProgressRecord};
use storage::repository::{ProgressRepository, StorageError};

use crate::error::ProgressApiError;

#[derive(Clone, Debug)]
pub struct ProgressApiConfig {
    pub base_url: Url,
}

impl ProgressApiConfig {
    /// Parse a backend base URL such as `http://localhost:8080`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressApiError::InvalidBaseUrl` for malformed URLs and
    /// `ProgressApiError::NotABase` for URLs like `mailto:`.
    pub fn new(raw: &str) -> Result<Self, ProgressApiError> {
        let mut base_url = Url::parse(raw.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ProgressApiError::NotABase(raw.to_string()));
        }
        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read `PROGRESS_API_URL`; unset or blank means "no remote backend".
    ///
    /// # Errors
    ///
    /// Returns `ProgressApiError` when the variable is set but invalid.
    pub fn from_env() -> Result<Option<Self>, ProgressApiError> {
        match env::var("PROGRESS_API_URL") {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw).map(Some),
            _ => Ok(None),
        }
    }

    fn collection_url(&self) -> Result<Url, StorageError> {
        self.base_url
            .join("api/progress")
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn item_url(&self, id: &ProgressId) -> Result<Url, StorageError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| StorageError::Serialization("api url cannot be a base".into()))?
            .push(id.as_str());
        Ok(url)
    }
}

/// `ProgressRepository` backed by the progress REST backend.
#[derive(Clone)]
pub struct ProgressApiClient {
    client: Client,
    config: ProgressApiConfig,
}

impl ProgressApiClient {
    #[must_use]
    pub fn new(config: ProgressApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

fn status_error(status: StatusCode) -> StorageError {
    match status {
        StatusCode::NOT_FOUND => StorageError::NotFound,
        StatusCode::CONFLICT => StorageError::Conflict,
        other => StorageError::Connection(format!("progress api returned {other}")),
    }
}

fn transport_error(err: &reqwest::Error) -> StorageError {
    if err.is_decode() {
        StorageError::Serialization(err.to_string())
    } else {
        StorageError::Connection(err.to_string())
    }
}

#[async_trait]
impl ProgressRepository for ProgressApiClient {
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let url = self.config.collection_url()?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        response.json().await.map_err(|e| transport_error(&e))
    }

    async fn get_progress(&self, id: &ProgressId) -> Result<ProgressRecord, StorageError> {
        let url = self.config.item_url(id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        response.json().await.map_err(|e| transport_error(&e))
    }

    async fn insert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let url = self.config.collection_url()?;
        let response = self
            .client
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}
