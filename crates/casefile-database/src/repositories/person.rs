//! Person repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use casefile_core::error::{AppError, ErrorKind};
use casefile_core::result::AppResult;
use casefile_core::traits::Repository;
use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::{Page, PageRequest};
use casefile_entity::person::{CreatePerson, Person, UpdatePerson};

/// Repository for person CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Create a new person repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new person record.
    pub async fn create(&self, data: &CreatePerson) -> AppResult<Person> {
        let id = RecordId::new();
        sqlx::query_as::<_, Person>(
            "INSERT INTO persons \
                 (id, national_id, personal_info, contact_info, professional_info, \
                  identification_documents, uploads) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&id)
        .bind(&data.personal_info.national_id)
        .bind(Json(&data.personal_info))
        .bind(Json(&data.contact_info))
        .bind(Json(&data.professional_info))
        .bind(Json(&data.identification_documents))
        .bind(Json(&data.uploads))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("persons_national_id_key") =>
            {
                AppError::conflict(format!(
                    "A person with nationalId '{}' already exists",
                    data.personal_info.national_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create person", e),
        })
    }

    /// Apply a partial update and return the post-update record.
    ///
    /// Present groups replace the stored groups wholesale; the extracted
    /// `national_id` column is kept in sync with the personal info group.
    pub async fn update(&self, id: &RecordId, patch: &UpdatePerson) -> AppResult<Person> {
        sqlx::query_as::<_, Person>(
            "UPDATE persons SET \
                 personal_info = COALESCE($2, personal_info), \
                 national_id = COALESCE($2->>'nationalId', national_id), \
                 contact_info = COALESCE($3, contact_info), \
                 professional_info = COALESCE($4, professional_info), \
                 identification_documents = COALESCE($5, identification_documents), \
                 uploads = COALESCE($6, uploads), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.personal_info.as_ref().map(Json))
        .bind(patch.contact_info.as_ref().map(Json))
        .bind(patch.professional_info.as_ref().map(Json))
        .bind(patch.identification_documents.as_ref().map(Json))
        .bind(patch.uploads.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("persons_national_id_key") =>
            {
                AppError::conflict("Another person already holds that nationalId")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update person", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Person {id} not found")))
    }

    /// Exact lookup by the unique national identity number.
    pub async fn find_by_national_id(&self, national_id: &str) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE national_id = $1")
            .bind(national_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find person by national id",
                    e,
                )
            })
    }

    /// Case-insensitive substring search over first, father, and family
    /// name (union semantics, newest first).
    ///
    /// The search text is matched literally: `%` and `_` in the input do
    /// not act as wildcards.
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Person>> {
        let pattern = format!("%{}%", escape_like(name));
        sqlx::query_as::<_, Person>(
            "SELECT * FROM persons \
             WHERE personal_info->>'firstName' ILIKE $1 \
                OR personal_info->>'fatherName' ILIKE $1 \
                OR personal_info->>'familyName' ILIKE $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search persons by name", e)
        })
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl Repository<Person> for PersonRepository {
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find person by id", e)
            })
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Page<Person>> {
        let total = self.count().await?;

        let persons = sqlx::query_as::<_, Person>(
            "SELECT * FROM persons ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list persons", e))?;

        Ok(Page::new(persons, page, total))
    }

    async fn delete(&self, id: &RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete person", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count persons", e))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("%"), "\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
    }
}
