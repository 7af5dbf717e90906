//! Upload metadata repository implementation.

use sqlx::PgPool;

use casefile_core::error::{AppError, ErrorKind};
use casefile_core::result::AppResult;
use casefile_core::types::id::RecordId;
use casefile_entity::upload::{CreateUpload, Upload};

/// Repository for upload metadata records.
#[derive(Debug, Clone)]
pub struct UploadRepository {
    pool: PgPool,
}

impl UploadRepository {
    /// Create a new upload repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store metadata for an uploaded file. The parent reference is not
    /// integrity-checked.
    pub async fn create(&self, data: &CreateUpload) -> AppResult<Upload> {
        let id = RecordId::new();
        sqlx::query_as::<_, Upload>(
            "INSERT INTO uploads \
                 (id, file_name, file_url, mime_type, associated_model, associated_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&id)
        .bind(&data.file_name)
        .bind(&data.file_url)
        .bind(&data.mime_type)
        .bind(data.associated_model)
        .bind(&data.associated_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create upload", e))
    }

    /// Find an upload by document key.
    pub async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Upload>> {
        sqlx::query_as::<_, Upload>("SELECT * FROM uploads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find upload by id", e)
            })
    }

    /// All uploads attached to the given parent record, newest first.
    pub async fn find_by_parent(&self, parent_id: &RecordId) -> AppResult<Vec<Upload>> {
        sqlx::query_as::<_, Upload>(
            "SELECT * FROM uploads WHERE associated_id = $1 \
             ORDER BY upload_date DESC, id DESC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list uploads by parent", e)
        })
    }

    /// Delete an upload by document key. Returns `true` if deleted.
    pub async fn delete(&self, id: &RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM uploads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete upload", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
