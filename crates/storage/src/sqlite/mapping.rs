use chrono::{DateTime, Utc};
use progress_core::model::{ProgressId, ProgressRecord, ProgressStatus, ProgressTemplate};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_progress_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<ProgressRecord, StorageError> {
    let id: String = row.try_get("id").map_err(ser)?;
    let topic: String = row.try_get("topic").map_err(ser)?;
    let description: String = row.try_get("description").map_err(ser)?;
    let status: String = row.try_get("status").map_err(ser)?;
    let template: String = row.try_get("template").map_err(ser)?;
    let timestamp: Option<DateTime<Utc>> = row.try_get("timestamp").map_err(ser)?;

    Ok(ProgressRecord::from_persisted(
        ProgressId::new(id),
        topic,
        description,
        ProgressStatus::from(status),
        ProgressTemplate::from(template),
        timestamp,
    ))
}

pub(crate) fn map_insert_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(err.to_string()),
    }
}
