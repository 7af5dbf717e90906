//! # casefile-entity
//!
//! Domain entity models for the Casefile backend: persons, legal cases,
//! option sets (form lookup tables), and upload metadata. Each entity
//! module also defines its create and update payload structs; update
//! payloads carry one optional field per top-level group, and setting a
//! group replaces it wholesale — nested fields are never merged.

pub mod case;
pub mod option_set;
pub mod person;
pub mod upload;
