//! Legal case entity.

pub mod model;

pub use model::{
    ArrestInfo, ArrestingAuthority, Case, CaseInfo, CreateCase, SeizedItems, UpdateCase,
};
