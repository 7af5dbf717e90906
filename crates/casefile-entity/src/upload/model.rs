//! Upload metadata model.
//!
//! Stores file metadata only; the files themselves live elsewhere and are
//! never processed here. An upload points at its parent record through a
//! `(associatedModel, associatedId)` pair; the parent's existence is not
//! checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use casefile_core::AppError;
use casefile_core::types::id::RecordId;

/// The entity kind an upload is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "associated_model", rename_all = "lowercase")]
pub enum AssociatedModel {
    /// Attached to a person record.
    Person,
    /// Attached to a case record.
    Case,
}

impl AssociatedModel {
    /// Return the model name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Case => "Case",
        }
    }
}

impl fmt::Display for AssociatedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssociatedModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Person" => Ok(Self::Person),
            "Case" => Ok(Self::Case),
            _ => Err(AppError::validation(format!(
                "Invalid associated model: '{s}'. Expected one of: Person, Case"
            ))),
        }
    }
}

/// Metadata for one uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    /// Unique document key.
    pub id: RecordId,
    /// Original file name.
    pub file_name: String,
    /// Where the file is stored.
    #[serde(rename = "fileURL")]
    pub file_url: String,
    /// MIME type.
    pub mime_type: String,
    /// Kind of the parent record.
    pub associated_model: AssociatedModel,
    /// Document key of the parent record (not integrity-checked).
    pub associated_id: RecordId,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
}

/// Payload for storing upload metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpload {
    /// Original file name.
    #[validate(length(min = 1, message = "fileName is required"))]
    pub file_name: String,
    /// Where the file is stored.
    #[validate(length(min = 1, message = "fileURL is required"))]
    #[serde(rename = "fileURL")]
    pub file_url: String,
    /// MIME type.
    #[validate(length(min = 1, message = "mimeType is required"))]
    pub mime_type: String,
    /// Kind of the parent record.
    pub associated_model: AssociatedModel,
    /// Document key of the parent record.
    pub associated_id: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_associated_model_from_str() {
        assert_eq!("Person".parse::<AssociatedModel>().unwrap(), AssociatedModel::Person);
        assert_eq!("Case".parse::<AssociatedModel>().unwrap(), AssociatedModel::Case);
        assert!("Folder".parse::<AssociatedModel>().is_err());
    }

    #[test]
    fn test_create_payload_wire_format() {
        let payload: CreateUpload = serde_json::from_value(serde_json::json!({
            "fileName": "warrant.pdf",
            "fileURL": "https://files.example/warrant.pdf",
            "mimeType": "application/pdf",
            "associatedModel": "Case",
            "associatedId": "507f1f77bcf86cd799439011"
        }))
        .expect("deserialize");
        assert_eq!(payload.associated_model, AssociatedModel::Case);
        payload.validate().expect("valid payload");
    }
}
