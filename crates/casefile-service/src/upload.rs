//! Upload metadata operations.
//!
//! Only metadata is managed here. The files themselves live wherever
//! `fileURL` points; nothing is fetched or deleted at that location.

use std::sync::Arc;

use tracing::info;

use casefile_core::error::AppError;
use casefile_core::result::AppResult;
use casefile_core::types::id::RecordId;
use casefile_database::repositories::UploadRepository;
use casefile_entity::upload::{CreateUpload, Upload};

/// Handles upload metadata records attached to persons and cases.
#[derive(Debug, Clone)]
pub struct UploadService {
    uploads: Arc<UploadRepository>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(uploads: Arc<UploadRepository>) -> Self {
        Self { uploads }
    }

    /// Record metadata for an uploaded file.
    pub async fn create(&self, data: &CreateUpload) -> AppResult<Upload> {
        let upload = self.uploads.create(data).await?;
        info!(
            upload_id = %upload.id,
            parent = %upload.associated_id,
            "Upload recorded"
        );
        Ok(upload)
    }

    /// Fetch an upload by document key.
    pub async fn get(&self, id: &RecordId) -> AppResult<Upload> {
        self.uploads
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Upload {id} not found")))
    }

    /// All uploads attached to the given parent record, newest first.
    pub async fn find_by_parent(&self, parent_id: &RecordId) -> AppResult<Vec<Upload>> {
        self.uploads.find_by_parent(parent_id).await
    }

    /// Delete an upload record. The file at `fileURL` is untouched.
    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.uploads.delete(id).await? {
            return Err(AppError::not_found(format!("Upload {id} not found")));
        }
        info!(upload_id = %id, "Upload deleted");
        Ok(())
    }
}
