//! Case entity model.
//!
//! A case carries exactly one reference to a person. The reference is a
//! bare document key: it is never integrity-checked at write time, and it
//! may dangle once the person is deleted. Reads resolve it through the
//! service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use casefile_core::types::id::RecordId;

/// A legal case record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Unique document key.
    pub id: RecordId,
    /// Case number, year, accusation, and disposition.
    #[sqlx(json)]
    pub case_info: CaseInfo,
    /// Arrest date, location, and authority.
    #[sqlx(json)]
    pub arrest_info: ArrestInfo,
    /// The single embedded seized item.
    #[sqlx(json)]
    pub seized_items: SeizedItems,
    /// Weak reference to the associated person.
    pub associated_person: RecordId,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The `caseInfo` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CaseInfo {
    /// Case number. Unique across all cases.
    #[validate(length(min = 1, message = "caseNumber is required"))]
    pub case_number: String,
    /// Year the case was opened.
    pub case_year: i32,
    /// Accusation text.
    #[validate(length(min = 1, message = "accusation is required"))]
    pub accusation: String,
    /// Criminal record number.
    #[validate(length(min = 1, message = "criminalRecordNumber is required"))]
    pub criminal_record_number: String,
    /// Judicial disposition.
    #[validate(length(min = 1, message = "judicialDisposition is required"))]
    pub judicial_disposition: String,
}

/// The `arrestInfo` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArrestInfo {
    /// Date of arrest.
    pub arrest_date: DateTime<Utc>,
    /// Location of arrest.
    #[validate(length(min = 1, message = "arrestLocation is required"))]
    pub arrest_location: String,
    /// Arresting authority.
    #[validate(nested)]
    pub arresting_authority: ArrestingAuthority,
}

/// The authority that performed the arrest.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArrestingAuthority {
    /// Main authority name.
    #[validate(length(min = 1, message = "mainAuthority is required"))]
    pub main_authority: String,
    /// Branch name.
    #[validate(length(min = 1, message = "branch is required"))]
    pub branch: String,
}

/// The `seizedItems` sub-document (a single embedded item).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeizedItems {
    /// Item name.
    #[validate(length(min = 1, message = "itemName is required"))]
    pub item_name: String,
    /// Item type.
    #[validate(length(min = 1, message = "itemType is required"))]
    pub item_type: String,
    /// Seized quantity.
    pub quantity: f64,
    /// Unit of the quantity.
    #[validate(length(min = 1, message = "quantityUnit is required"))]
    pub quantity_unit: String,
    /// Seized monetary amount, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seized_amount: Option<f64>,
    /// Reporting office.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_office: Option<String>,
    /// Where the items were deposited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_location: Option<String>,
}

/// Payload for creating a case. The associated person is fixed at
/// creation; its existence is not checked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCase {
    /// Case information group.
    #[validate(nested)]
    pub case_info: CaseInfo,
    /// Arrest information group.
    #[validate(nested)]
    pub arrest_info: ArrestInfo,
    /// Seized items group.
    #[validate(nested)]
    pub seized_items: SeizedItems,
    /// Document key of the associated person.
    pub associated_person: RecordId,
}

/// Payload for updating a case. Each present group replaces the stored
/// group wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCase {
    /// Replacement case information group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub case_info: Option<CaseInfo>,
    /// Replacement arrest information group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub arrest_info: Option<ArrestInfo>,
    /// Replacement seized items group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub seized_items: Option<SeizedItems>,
    /// Re-point the case at a different person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_person: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "caseInfo": {
                "caseNumber": "2024/417",
                "caseYear": 2024,
                "accusation": "تهريب",
                "criminalRecordNumber": "CR-1180",
                "judicialDisposition": "قيد النظر"
            },
            "arrestInfo": {
                "arrestDate": "2024-02-20T08:30:00Z",
                "arrestLocation": "حمص",
                "arrestingAuthority": {
                    "mainAuthority": "الأمن الجنائي",
                    "branch": "فرع حمص"
                }
            },
            "seizedItems": {
                "itemName": "أجهزة إلكترونية",
                "itemType": "إلكترونيات",
                "quantity": 12.0,
                "quantityUnit": "قطعة",
                "seizedAmount": 1500000.0
            },
            "associatedPerson": "507f1f77bcf86cd799439011"
        })
    }

    #[test]
    fn test_create_payload_deserializes() {
        let payload: CreateCase = serde_json::from_value(sample_payload()).expect("deserialize");
        assert_eq!(payload.case_info.case_number, "2024/417");
        assert_eq!(
            payload.associated_person.as_str(),
            "507f1f77bcf86cd799439011"
        );
        payload.validate().expect("valid payload");
    }

    #[test]
    fn test_malformed_person_reference_is_rejected() {
        let mut value = sample_payload();
        value["associatedPerson"] = serde_json::json!("not-a-key");
        assert!(serde_json::from_value::<CreateCase>(value).is_err());
    }

    #[test]
    fn test_missing_person_reference_is_rejected() {
        let mut value = sample_payload();
        value.as_object_mut().unwrap().remove("associatedPerson");
        assert!(serde_json::from_value::<CreateCase>(value).is_err());
    }

    #[test]
    fn test_empty_case_number_fails_validation() {
        let mut value = sample_payload();
        value["caseInfo"]["caseNumber"] = serde_json::json!("");
        let payload: CreateCase = serde_json::from_value(value).expect("deserialize");
        assert!(payload.validate().is_err());
    }
}
