//! Option set (form lookup table) entity.

pub mod model;

pub use model::{CreateOptionSet, OptionItem, OptionSet, UpdateOptionSet};
