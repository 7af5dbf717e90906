//! Option set operations.

use std::sync::Arc;

use tracing::info;

use casefile_core::error::AppError;
use casefile_core::result::AppResult;
use casefile_core::types::id::RecordId;
use casefile_database::repositories::OptionSetRepository;
use casefile_entity::option_set::{CreateOptionSet, OptionSet, UpdateOptionSet};

/// Handles CRUD over the named lookup tables that back select fields.
#[derive(Debug, Clone)]
pub struct OptionSetService {
    option_sets: Arc<OptionSetRepository>,
}

impl OptionSetService {
    /// Creates a new option set service.
    pub fn new(option_sets: Arc<OptionSetRepository>) -> Self {
        Self { option_sets }
    }

    /// Create an option set.
    pub async fn create(&self, data: &CreateOptionSet) -> AppResult<OptionSet> {
        let set = self.option_sets.create(data).await?;
        info!(option_set_id = %set.id, key = %set.key, "Option set created");
        Ok(set)
    }

    /// Fetch an option set by document key.
    pub async fn get(&self, id: &RecordId) -> AppResult<OptionSet> {
        self.option_sets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Option set {id} not found")))
    }

    /// Fetch an option set by its unique list key.
    pub async fn get_by_key(&self, key: &str) -> AppResult<OptionSet> {
        self.option_sets
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Option set '{key}' not found")))
    }

    /// List all option sets, ordered by key.
    pub async fn list(&self) -> AppResult<Vec<OptionSet>> {
        self.option_sets.find_all().await
    }

    /// Apply a partial update and return the post-update record.
    pub async fn update(&self, id: &RecordId, patch: &UpdateOptionSet) -> AppResult<OptionSet> {
        let set = self.option_sets.update(id, patch).await?;
        info!(option_set_id = %set.id, key = %set.key, "Option set updated");
        Ok(set)
    }

    /// Delete an option set. Person records holding values from it keep
    /// their stored values; label resolution for them degrades to null.
    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.option_sets.delete(id).await? {
            return Err(AppError::not_found(format!("Option set {id} not found")));
        }
        info!(option_set_id = %id, "Option set deleted");
        Ok(())
    }
}
