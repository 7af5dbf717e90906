//! Case repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use casefile_core::error::{AppError, ErrorKind};
use casefile_core::result::AppResult;
use casefile_core::traits::Repository;
use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::{Page, PageRequest};
use casefile_entity::case::{Case, CreateCase, UpdateCase};

/// Repository for case CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CaseRepository {
    pool: PgPool,
}

impl CaseRepository {
    /// Create a new case repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new case record. The person reference is stored as-is;
    /// its existence is not checked.
    pub async fn create(&self, data: &CreateCase) -> AppResult<Case> {
        let id = RecordId::new();
        sqlx::query_as::<_, Case>(
            "INSERT INTO cases \
                 (id, case_number, case_info, arrest_info, seized_items, associated_person) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&id)
        .bind(&data.case_info.case_number)
        .bind(Json(&data.case_info))
        .bind(Json(&data.arrest_info))
        .bind(Json(&data.seized_items))
        .bind(&data.associated_person)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("cases_case_number_key") =>
            {
                AppError::conflict(format!(
                    "A case with caseNumber '{}' already exists",
                    data.case_info.case_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create case", e),
        })
    }

    /// Apply a partial update and return the post-update record.
    pub async fn update(&self, id: &RecordId, patch: &UpdateCase) -> AppResult<Case> {
        sqlx::query_as::<_, Case>(
            "UPDATE cases SET \
                 case_info = COALESCE($2, case_info), \
                 case_number = COALESCE($2->>'caseNumber', case_number), \
                 arrest_info = COALESCE($3, arrest_info), \
                 seized_items = COALESCE($4, seized_items), \
                 associated_person = COALESCE($5, associated_person), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.case_info.as_ref().map(Json))
        .bind(patch.arrest_info.as_ref().map(Json))
        .bind(patch.seized_items.as_ref().map(Json))
        .bind(patch.associated_person.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("cases_case_number_key") =>
            {
                AppError::conflict("Another case already holds that caseNumber")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update case", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))
    }

    /// All cases referencing the given person, newest first.
    pub async fn find_by_person(&self, person_id: &RecordId) -> AppResult<Vec<Case>> {
        sqlx::query_as::<_, Case>(
            "SELECT * FROM cases WHERE associated_person = $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list cases by person", e)
        })
    }
}

#[async_trait]
impl Repository<Case> for CaseRepository {
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Case>> {
        sqlx::query_as::<_, Case>("SELECT * FROM cases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find case by id", e)
            })
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Page<Case>> {
        let total = self.count().await?;

        let cases = sqlx::query_as::<_, Case>(
            "SELECT * FROM cases ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cases", e))?;

        Ok(Page::new(cases, page, total))
    }

    async fn delete(&self, id: &RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete case", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cases")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count cases", e))?;
        Ok(count as u64)
    }
}
