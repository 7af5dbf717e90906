//! Trait contracts shared across crates.

pub mod repository;

pub use repository::Repository;
