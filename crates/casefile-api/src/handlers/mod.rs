//! HTTP request handlers, organized by domain.

pub mod case;
pub mod health;
pub mod option_set;
pub mod person;
pub mod upload;

use serde::{Deserialize, Serialize};

/// Simple confirmation body for delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Build a confirmation message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
