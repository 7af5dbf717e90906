//! Option set repository implementation.
//!
//! Option lists are assumed small, so listing is unpaginated.

use sqlx::PgPool;
use sqlx::types::Json;

use casefile_core::error::{AppError, ErrorKind};
use casefile_core::result::AppResult;
use casefile_core::types::id::RecordId;
use casefile_entity::option_set::{CreateOptionSet, OptionSet, UpdateOptionSet};

/// Repository for option set CRUD and lookup-by-key.
#[derive(Debug, Clone)]
pub struct OptionSetRepository {
    pool: PgPool,
}

impl OptionSetRepository {
    /// Create a new option set repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new option set.
    pub async fn create(&self, data: &CreateOptionSet) -> AppResult<OptionSet> {
        let id = RecordId::new();
        sqlx::query_as::<_, OptionSet>(
            "INSERT INTO option_sets (id, key, label, options) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&id)
        .bind(&data.key)
        .bind(&data.label)
        .bind(Json(&data.options))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("option_sets_key_key") =>
            {
                AppError::conflict(format!("An option set with key '{}' already exists", data.key))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create option set", e),
        })
    }

    /// Find an option set by document key.
    pub async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<OptionSet>> {
        sqlx::query_as::<_, OptionSet>("SELECT * FROM option_sets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find option set by id", e)
            })
    }

    /// Single lookup by the unique list key.
    pub async fn find_by_key(&self, key: &str) -> AppResult<Option<OptionSet>> {
        sqlx::query_as::<_, OptionSet>("SELECT * FROM option_sets WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find option set by key", e)
            })
    }

    /// List all option sets, ordered by key.
    pub async fn find_all(&self) -> AppResult<Vec<OptionSet>> {
        sqlx::query_as::<_, OptionSet>("SELECT * FROM option_sets ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list option sets", e)
            })
    }

    /// Apply a partial update and return the post-update record. A
    /// present options list replaces the stored list wholesale.
    pub async fn update(&self, id: &RecordId, patch: &UpdateOptionSet) -> AppResult<OptionSet> {
        sqlx::query_as::<_, OptionSet>(
            "UPDATE option_sets SET \
                 key = COALESCE($2, key), \
                 label = COALESCE($3, label), \
                 options = COALESCE($4, options), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.key.as_ref())
        .bind(patch.label.as_ref())
        .bind(patch.options.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("option_sets_key_key") =>
            {
                AppError::conflict("Another option set already holds that key")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update option set", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Option set {id} not found")))
    }

    /// Delete an option set by document key. Returns `true` if deleted.
    pub async fn delete(&self, id: &RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM option_sets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete option set", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
