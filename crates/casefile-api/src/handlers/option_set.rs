//! Option set endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use casefile_core::types::id::RecordId;
use casefile_entity::option_set::{CreateOptionSet, OptionSet, UpdateOptionSet};

use crate::error::ApiResult;
use crate::extractors::ValidJson;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// GET /api/options
pub async fn list_option_sets(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OptionSet>>> {
    Ok(Json(state.option_set_service.list().await?))
}

/// POST /api/options
pub async fn create_option_set(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateOptionSet>,
) -> ApiResult<(StatusCode, Json<OptionSet>)> {
    let set = state.option_set_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(set)))
}

/// GET /api/options/key/{key}
pub async fn get_option_set_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<OptionSet>> {
    Ok(Json(state.option_set_service.get_by_key(&key).await?))
}

/// GET /api/options/{id}
pub async fn get_option_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OptionSet>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.option_set_service.get(&id).await?))
}

/// PUT /api/options/{id}
pub async fn update_option_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(patch): ValidJson<UpdateOptionSet>,
) -> ApiResult<Json<OptionSet>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.option_set_service.update(&id, &patch).await?))
}

/// DELETE /api/options/{id}
pub async fn delete_option_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: RecordId = id.parse()?;
    state.option_set_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Option set deleted successfully")))
}
