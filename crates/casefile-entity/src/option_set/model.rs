//! Option set entity model.
//!
//! An option set is a named list of `{value, label}` pairs backing a
//! dropdown in the intake forms (cities, professions, marital statuses).
//! Person fields store option *values*; resolution to display labels
//! happens on read and degrades to null for unknown values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use casefile_core::types::id::RecordId;

/// A named lookup table of selectable options.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    /// Unique document key.
    pub id: RecordId,
    /// List identifier, e.g. `"cities"`. Unique.
    pub key: String,
    /// Human-readable list label.
    pub label: String,
    /// The selectable options.
    #[sqlx(json)]
    pub options: Vec<OptionItem>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl OptionSet {
    /// Look up the display label for a stored option value.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    /// Stored value.
    #[validate(length(min = 1, message = "value is required"))]
    pub value: String,
    /// Display label.
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
}

/// Payload for creating an option set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionSet {
    /// List identifier. Must be unique.
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,
    /// Human-readable list label.
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
    /// Initial options (defaults to empty).
    #[serde(default)]
    #[validate(nested)]
    pub options: Vec<OptionItem>,
}

/// Payload for updating an option set. Present fields replace the stored
/// values; the options list is replaced wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionSet {
    /// New list identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// New list label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Replacement options list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub options: Option<Vec<OptionItem>>,
}
