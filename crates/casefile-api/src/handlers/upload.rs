//! Upload metadata endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use casefile_core::error::AppError;
use casefile_core::types::id::RecordId;
use casefile_entity::upload::{CreateUpload, Upload};

use crate::error::ApiResult;
use crate::extractors::ValidJson;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// POST /api/uploads
pub async fn create_upload(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUpload>,
) -> ApiResult<(StatusCode, Json<Upload>)> {
    let upload = state.upload_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(upload)))
}

/// Query parameters for listing uploads.
#[derive(Debug, Deserialize)]
pub struct UploadListParams {
    /// Document key of the parent person or case.
    pub parent: Option<String>,
}

/// GET /api/uploads?parent={id}
pub async fn list_uploads(
    State(state): State<AppState>,
    Query(params): Query<UploadListParams>,
) -> ApiResult<Json<Vec<Upload>>> {
    let parent = params
        .parent
        .ok_or_else(|| AppError::validation("parent query parameter is required"))?;
    let parent: RecordId = parent.parse()?;
    Ok(Json(state.upload_service.find_by_parent(&parent).await?))
}

/// GET /api/uploads/{id}
pub async fn get_upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Upload>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.upload_service.get(&id).await?))
}

/// DELETE /api/uploads/{id}
pub async fn delete_upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: RecordId = id.parse()?;
    state.upload_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Upload deleted successfully")))
}
