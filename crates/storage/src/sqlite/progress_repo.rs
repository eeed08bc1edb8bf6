use progress_core::model::{ProgressId, ProgressRecord};

use super::SqliteRepository;
use super::mapping::{map_insert_error, map_progress_row};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, topic, description, status, template, timestamp
                FROM progress_records
                ORDER BY seq ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_progress_row).collect()
    }

    async fn get_progress(&self, id: &ProgressId) -> Result<ProgressRecord, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, topic, description, status, template, timestamp
                FROM progress_records
                WHERE id = ?1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_progress_row(&row)
    }

    async fn insert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO progress_records (
                    id, topic, description, status, template, timestamp
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(record.id().as_str())
        .bind(record.topic())
        .bind(record.description())
        .bind(record.status().as_str())
        .bind(record.template().as_str())
        .bind(record.timestamp())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }
}
