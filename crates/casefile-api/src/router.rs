//! Route definitions for the Casefile HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(person_routes())
        .merge(case_routes())
        .merge(option_set_routes())
        .merge(upload_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Person CRUD, search, natural-key lookup, and resolution
fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/persons", get(handlers::person::list_persons))
        .route("/persons", post(handlers::person::create_person))
        .route("/persons/search", get(handlers::person::search_persons))
        .route(
            "/persons/national-id/{nationalId}",
            get(handlers::person::get_person_by_national_id),
        )
        .route("/persons/{id}", get(handlers::person::get_person))
        .route("/persons/{id}", put(handlers::person::update_person))
        .route("/persons/{id}", delete(handlers::person::delete_person))
        .route(
            "/persons/{id}/cases",
            get(handlers::person::list_person_cases),
        )
        .route(
            "/persons/{id}/resolved",
            get(handlers::person::get_person_resolved),
        )
}

/// Case CRUD
fn case_routes() -> Router<AppState> {
    Router::new()
        .route("/cases", get(handlers::case::list_cases))
        .route("/cases", post(handlers::case::create_case))
        .route("/cases/{id}", get(handlers::case::get_case))
        .route("/cases/{id}", put(handlers::case::update_case))
        .route("/cases/{id}", delete(handlers::case::delete_case))
}

/// Option set CRUD and lookup-by-key
fn option_set_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::option_set::list_option_sets))
        .route("/options", post(handlers::option_set::create_option_set))
        .route(
            "/options/key/{key}",
            get(handlers::option_set::get_option_set_by_key),
        )
        .route("/options/{id}", get(handlers::option_set::get_option_set))
        .route(
            "/options/{id}",
            put(handlers::option_set::update_option_set),
        )
        .route(
            "/options/{id}",
            delete(handlers::option_set::delete_option_set),
        )
}

/// Upload metadata endpoints
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads", get(handlers::upload::list_uploads))
        .route("/uploads", post(handlers::upload::create_upload))
        .route("/uploads/{id}", get(handlers::upload::get_upload))
        .route("/uploads/{id}", delete(handlers::upload::delete_upload))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
