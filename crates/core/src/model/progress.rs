use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::model::ids::ProgressId;
use crate::model::labels::{ProgressStatus, ProgressTemplate};
use crate::time::{parse_timestamp, timestamp_from_millis};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("topic cannot be empty")]
    EmptyTopic,
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// One unit of tracked learning activity.
///
/// Records are read-only once loaded; status and template are not validated.
/// A timestamp that cannot be read is kept as `None` rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(alias = "_id")]
    id: ProgressId,
    topic: String,
    #[serde(default)]
    description: String,
    status: ProgressStatus,
    template: ProgressTemplate,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    timestamp: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Rebuild a record from storage without validation.
    #[must_use]
    pub fn from_persisted(
        id: ProgressId,
        topic: impl Into<String>,
        description: impl Into<String>,
        status: ProgressStatus,
        template: ProgressTemplate,
        timestamp: impl Into<Option<DateTime<Utc>>>,
    ) -> Self {
        Self {
            id,
            topic: topic.into(),
            description: description.into(),
            status,
            template,
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProgressId {
        &self.id
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn status(&self) -> &ProgressStatus {
        &self.status
    }

    #[must_use]
    pub fn template(&self) -> &ProgressTemplate {
        &self.template
    }

    /// When the activity happened, if the stored value was readable.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Fractional(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawTimestamp::Millis(millis)) => timestamp_from_millis(millis),
        #[allow(clippy::cast_possible_truncation)]
        Some(RawTimestamp::Fractional(millis)) if millis.is_finite() => {
            timestamp_from_millis(millis.trunc() as i64)
        }
        Some(RawTimestamp::Text(text)) => parse_timestamp(&text),
        Some(RawTimestamp::Fractional(_) | RawTimestamp::Other(_)) | None => None,
    })
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// User input for a new progress entry, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDraft {
    pub topic: String,
    pub description: String,
    pub status: ProgressStatus,
    pub template: ProgressTemplate,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ProgressDraft {
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        status: ProgressStatus,
        template: ProgressTemplate,
    ) -> Self {
        Self {
            topic: topic.into(),
            description: String::new(),
            status,
            template,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate the draft and assign it an identity.
    ///
    /// Topic and description are trimmed; the timestamp defaults to `now`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyTopic` when the topic is blank.
    pub fn validate(
        self,
        id: ProgressId,
        now: DateTime<Utc>,
    ) -> Result<ProgressRecord, ProgressError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ProgressError::EmptyTopic);
        }
        Ok(ProgressRecord {
            id,
            topic: topic.to_owned(),
            description: self.description.trim().to_owned(),
            status: self.status,
            template: self.template,
            timestamp: Some(self.timestamp.unwrap_or(now)),
        })
    }
}
