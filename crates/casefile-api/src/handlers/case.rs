//! Case endpoints. Every read returns the case with its person embedded.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::Page;
use casefile_entity::case::{CreateCase, UpdateCase};
use casefile_service::ResolvedCase;

use crate::error::ApiResult;
use crate::extractors::{ListParams, ValidJson};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// GET /api/cases
pub async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<ResolvedCase>>> {
    let page = state.case_service.list(&params.into_page_request()).await?;
    Ok(Json(page))
}

/// POST /api/cases
pub async fn create_case(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateCase>,
) -> ApiResult<(StatusCode, Json<ResolvedCase>)> {
    let case = state.case_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

/// GET /api/cases/{id}
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ResolvedCase>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.case_service.get(&id).await?))
}

/// PUT /api/cases/{id}
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(patch): ValidJson<UpdateCase>,
) -> ApiResult<Json<ResolvedCase>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.case_service.update(&id, &patch).await?))
}

/// DELETE /api/cases/{id}
pub async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: RecordId = id.parse()?;
    state.case_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Case deleted successfully")))
}
