//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "ok" or "degraded".
    pub status: String,
    /// Database reachability: "connected" or "unreachable".
    pub database: String,
    /// Server version.
    pub version: String,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();

    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        database: if database_up {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
