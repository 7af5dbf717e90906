//! Person endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use casefile_core::error::AppError;
use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::Page;
use casefile_entity::person::{CreatePerson, Person, UpdatePerson};
use casefile_service::{ResolvedCase, ResolvedPerson};

use crate::error::ApiResult;
use crate::extractors::{ListParams, ValidJson};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// GET /api/persons
pub async fn list_persons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<Person>>> {
    let page = state
        .person_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(page))
}

/// POST /api/persons
pub async fn create_person(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreatePerson>,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let person = state.person_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Person>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.person_service.get(&id).await?))
}

/// PUT /api/persons/{id}
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(patch): ValidJson<UpdatePerson>,
) -> ApiResult<Json<Person>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.person_service.update(&id, &patch).await?))
}

/// DELETE /api/persons/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: RecordId = id.parse()?;
    state.person_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Person deleted successfully")))
}

/// Query parameters for the name search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to match against the name parts.
    pub name: Option<String>,
}

/// GET /api/persons/search?name=...
pub async fn search_persons(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Person>>> {
    let name = params
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("name query parameter is required"))?;
    Ok(Json(state.person_service.search_by_name(name).await?))
}

/// GET /api/persons/national-id/{nationalId}
pub async fn get_person_by_national_id(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> ApiResult<Json<Person>> {
    let person = state
        .person_service
        .find_by_national_id(&national_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No person with nationalId '{national_id}'"))
        })?;
    Ok(Json(person))
}

/// GET /api/persons/{id}/cases
pub async fn list_person_cases(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ResolvedCase>>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.case_service.find_by_person(&id).await?))
}

/// GET /api/persons/{id}/resolved
pub async fn get_person_resolved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ResolvedPerson>> {
    let id: RecordId = id.parse()?;
    Ok(Json(state.person_service.get_resolved(&id).await?))
}
