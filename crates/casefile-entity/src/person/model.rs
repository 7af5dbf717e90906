//! Person entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use casefile_core::types::id::RecordId;

/// An identity record, grouped into nested sub-documents exactly as the
/// wire format presents them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique document key.
    pub id: RecordId,
    /// Name parts, national id, birth and marital details.
    #[sqlx(json)]
    pub personal_info: PersonalInfo,
    /// Phone and addresses.
    #[sqlx(json)]
    pub contact_info: ContactInfo,
    /// Profession and qualification details.
    #[sqlx(json)]
    pub professional_info: ProfessionalInfo,
    /// National id issuance and optional passport details.
    #[sqlx(json)]
    pub identification_documents: IdentificationDocuments,
    /// Stored file references (photo, fingerprint, other documents).
    #[sqlx(json)]
    pub uploads: UploadRefs,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Full name assembled from the four name parts.
    pub fn full_name(&self) -> String {
        let p = &self.personal_info;
        format!(
            "{} {} {} {}",
            p.first_name, p.father_name, p.grandfather_name, p.family_name
        )
    }
}

/// Gender enumeration. Wire values are the Arabic strings the form
/// submits ("ذكر" / "أنثى").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "ذكر")]
    Male,
    /// Female.
    #[serde(rename = "أنثى")]
    Female,
}

/// The `personalInfo` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Given name.
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    /// Father's name.
    #[validate(length(min = 1, message = "fatherName is required"))]
    pub father_name: String,
    /// Grandfather's name.
    #[validate(length(min = 1, message = "grandfatherName is required"))]
    pub grandfather_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "familyName is required"))]
    pub family_name: String,
    /// National identity number. Unique across all persons.
    #[validate(length(min = 1, message = "nationalId is required"))]
    pub national_id: String,
    /// Nationality (option reference).
    #[validate(length(min = 1, message = "nationality is required"))]
    pub nationality: String,
    /// Gender.
    pub gender: Gender,
    /// Date of birth.
    pub date_of_birth: DateTime<Utc>,
    /// Place of birth (option reference: city).
    #[validate(length(min = 1, message = "placeOfBirth is required"))]
    pub place_of_birth: String,
    /// Marital status (option reference).
    #[validate(length(min = 1, message = "maritalStatus is required"))]
    pub marital_status: String,
    /// Spouse name, when married.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    /// Number of sons, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_sons: Option<u32>,
}

/// The `contactInfo` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Mobile phone number.
    #[validate(length(min = 1, message = "mobilePhone is required"))]
    pub mobile_phone: String,
    /// Current residential address.
    #[validate(nested)]
    pub current_address: Address,
    /// Work address, if employed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub work_address: Option<WorkAddress>,
}

/// A full residential address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// City (option reference).
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// Street.
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    /// Free-text details.
    #[validate(length(min = 1, message = "details is required"))]
    pub details: String,
}

/// A work address: city plus free-text details.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkAddress {
    /// City (option reference).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Free-text details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The `professionalInfo` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalInfo {
    /// Profession (option reference).
    #[validate(length(min = 1, message = "profession is required"))]
    pub profession: String,
    /// Academic qualification (option reference).
    #[validate(length(min = 1, message = "academicQualification is required"))]
    pub academic_qualification: String,
    /// Father's profession.
    #[validate(length(min = 1, message = "fatherProfession is required"))]
    pub father_profession: String,
    /// Mother's profession.
    #[validate(length(min = 1, message = "motherProfession is required"))]
    pub mother_profession: String,
}

/// The `identificationDocuments` sub-document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationDocuments {
    /// National id issuance details.
    #[validate(nested)]
    pub national_id_details: NationalIdDetails,
    /// Passport details, if a passport exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_details: Option<PassportDetails>,
}

/// Issuance details of the national id card.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NationalIdDetails {
    /// Issuing location.
    #[validate(length(min = 1, message = "issuingLocation is required"))]
    pub issuing_location: String,
    /// Issue date.
    pub issue_date: DateTime<Utc>,
}

/// Passport details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportDetails {
    /// Passport number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    /// Issuing location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_location: Option<String>,
    /// Issue date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<DateTime<Utc>>,
}

/// The `uploads` sub-document: stored file references only, never
/// processed by this backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRefs {
    /// Personal photo reference.
    #[validate(length(min = 1, message = "personalPhoto is required"))]
    pub personal_photo: String,
    /// Fingerprint scan reference.
    #[validate(length(min = 1, message = "fingerprint is required"))]
    pub fingerprint: String,
    /// Other document references.
    #[serde(default)]
    pub other_documents: Vec<String>,
}

/// Payload for creating a person. All groups are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    /// Personal information group.
    #[validate(nested)]
    pub personal_info: PersonalInfo,
    /// Contact information group.
    #[validate(nested)]
    pub contact_info: ContactInfo,
    /// Professional information group.
    #[validate(nested)]
    pub professional_info: ProfessionalInfo,
    /// Identification documents group.
    #[validate(nested)]
    pub identification_documents: IdentificationDocuments,
    /// Upload references group.
    #[validate(nested)]
    pub uploads: UploadRefs,
}

/// Payload for updating a person. Each present group replaces the stored
/// group wholesale; absent groups are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    /// Replacement personal information group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub personal_info: Option<PersonalInfo>,
    /// Replacement contact information group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub contact_info: Option<ContactInfo>,
    /// Replacement professional information group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub professional_info: Option<ProfessionalInfo>,
    /// Replacement identification documents group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub identification_documents: Option<IdentificationDocuments>,
    /// Replacement upload references group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub uploads: Option<UploadRefs>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "personalInfo": {
                "firstName": "علي",
                "fatherName": "محمد",
                "grandfatherName": "أحمد",
                "familyName": "الخطيب",
                "nationalId": "1000000001",
                "nationality": "سوري",
                "gender": "ذكر",
                "dateOfBirth": "1985-03-12T00:00:00Z",
                "placeOfBirth": "دمشق",
                "maritalStatus": "متزوج",
                "spouseName": "فاطمة"
            },
            "contactInfo": {
                "mobilePhone": "0933123456",
                "currentAddress": {
                    "city": "دمشق",
                    "street": "شارع الثورة",
                    "details": "بناء 5، طابق 3"
                }
            },
            "professionalInfo": {
                "profession": "نجار",
                "academicQualification": "ثانوية",
                "fatherProfession": "مزارع",
                "motherProfession": "ربة منزل"
            },
            "identificationDocuments": {
                "nationalIdDetails": {
                    "issuingLocation": "دمشق",
                    "issueDate": "2010-06-01T00:00:00Z"
                }
            },
            "uploads": {
                "personalPhoto": "photos/ali.jpg",
                "fingerprint": "prints/ali.png"
            }
        })
    }

    #[test]
    fn test_create_payload_deserializes_from_wire_format() {
        let payload: CreatePerson =
            serde_json::from_value(sample_payload()).expect("deserialize");
        assert_eq!(payload.personal_info.first_name, "علي");
        assert_eq!(payload.personal_info.gender, Gender::Male);
        assert!(payload.contact_info.work_address.is_none());
        assert!(payload.uploads.other_documents.is_empty());
        payload.validate().expect("valid payload");
    }

    #[test]
    fn test_missing_required_group_is_rejected() {
        let mut value = sample_payload();
        value.as_object_mut().unwrap().remove("contactInfo");
        assert!(serde_json::from_value::<CreatePerson>(value).is_err());
    }

    #[test]
    fn test_empty_required_field_fails_validation() {
        let mut value = sample_payload();
        value["personalInfo"]["nationalId"] = serde_json::json!("");
        let payload: CreatePerson = serde_json::from_value(value).expect("deserialize");
        let err = payload.validate().expect_err("empty nationalId");
        assert!(err.to_string().contains("nationalId"));
    }

    #[test]
    fn test_update_payload_accepts_single_group() {
        let patch: UpdatePerson = serde_json::from_value(serde_json::json!({
            "professionalInfo": {
                "profession": "حداد",
                "academicQualification": "ثانوية",
                "fatherProfession": "مزارع",
                "motherProfession": "ربة منزل"
            }
        }))
        .expect("deserialize");
        assert!(patch.personal_info.is_none());
        assert!(patch.professional_info.is_some());
    }

    #[test]
    fn test_gender_rejects_unknown_value() {
        assert!(serde_json::from_str::<Gender>("\"other\"").is_err());
    }

    #[test]
    fn test_personal_info_roundtrips_camel_case() {
        let payload: CreatePerson =
            serde_json::from_value(sample_payload()).expect("deserialize");
        let json = serde_json::to_value(&payload.personal_info).expect("serialize");
        assert_eq!(json["firstName"], "علي");
        assert_eq!(json["gender"], "ذكر");
        // absent optionals are omitted, not null
        assert!(json.get("numberOfSons").is_none());
    }
}
