//! # casefile-api
//!
//! HTTP API layer for Casefile built on Axum.
//!
//! Provides the REST endpoints, extractors, error mapping, and router
//! assembly. All routes are mounted under `/api`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
