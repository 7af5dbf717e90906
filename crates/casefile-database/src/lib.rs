//! # casefile-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Casefile entities. Records are stored as
//! JSONB column groups with their unique natural keys (`nationalId`,
//! `caseNumber`, option-set `key`) extracted into dedicated `UNIQUE`
//! columns, so duplicate races are resolved by the store rejecting the
//! second writer.

pub mod connection;
pub mod repositories;

pub use connection::{DatabasePool, run_migrations};
