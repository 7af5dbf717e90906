//! # casefile-core
//!
//! Shared building blocks for the Casefile record-management backend:
//! configuration schemas, the unified [`AppError`](error::AppError) type,
//! document identifiers, pagination, and the generic repository contract.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
