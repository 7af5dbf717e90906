//! Custom Axum extractors.

pub mod json;
pub mod pagination;

pub use json::ValidJson;
pub use pagination::ListParams;
