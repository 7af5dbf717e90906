//! Upload metadata entity.

pub mod model;

pub use model::{AssociatedModel, CreateUpload, Upload};
