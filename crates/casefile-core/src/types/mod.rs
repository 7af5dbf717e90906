//! Shared value types used across the Casefile crates.

pub mod id;
pub mod pagination;

pub use id::RecordId;
pub use pagination::{Page, PageRequest};
