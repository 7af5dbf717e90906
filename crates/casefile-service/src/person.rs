//! Person operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use casefile_core::error::AppError;
use casefile_core::result::AppResult;
use casefile_core::traits::Repository;
use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::{Page, PageRequest};
use casefile_database::repositories::{OptionSetRepository, PersonRepository};
use casefile_entity::person::{CreatePerson, Person, UpdatePerson};

use crate::resolver::resolve_label;

/// Option-set keys the extended person read resolves against.
const KEY_NATIONALITIES: &str = "nationalities";
const KEY_MARITAL_STATUSES: &str = "marital-statuses";
const KEY_PROFESSIONS: &str = "professions";
const KEY_QUALIFICATIONS: &str = "qualifications";
const KEY_CITIES: &str = "cities";

/// Handles person CRUD, natural-key lookup, and name search.
#[derive(Debug, Clone)]
pub struct PersonService {
    /// Person repository.
    persons: Arc<PersonRepository>,
    /// Option set repository, for label resolution.
    option_sets: Arc<OptionSetRepository>,
}

/// Display labels resolved from the option-reference fields of a person.
/// Every field degrades to `null` when the value cannot be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLabels {
    /// Label for `personalInfo.nationality`.
    pub nationality: Option<String>,
    /// Label for `personalInfo.maritalStatus`.
    pub marital_status: Option<String>,
    /// Label for `professionalInfo.profession`.
    pub profession: Option<String>,
    /// Label for `professionalInfo.academicQualification`.
    pub academic_qualification: Option<String>,
    /// Label for `personalInfo.placeOfBirth`.
    pub birth_city: Option<String>,
    /// Label for `contactInfo.currentAddress.city`.
    pub current_city: Option<String>,
    /// Label for `contactInfo.workAddress.city`.
    pub work_city: Option<String>,
}

/// A person with its option references resolved to display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPerson {
    /// The stored record, unchanged.
    #[serde(flatten)]
    pub person: Person,
    /// The resolved display labels.
    pub resolved: OptionLabels,
}

impl PersonService {
    /// Creates a new person service.
    pub fn new(persons: Arc<PersonRepository>, option_sets: Arc<OptionSetRepository>) -> Self {
        Self {
            persons,
            option_sets,
        }
    }

    /// Create a person record.
    pub async fn create(&self, data: &CreatePerson) -> AppResult<Person> {
        let person = self.persons.create(data).await?;
        info!(person_id = %person.id, "Person created");
        Ok(person)
    }

    /// Fetch a person by document key.
    pub async fn get(&self, id: &RecordId) -> AppResult<Person> {
        self.persons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Person {id} not found")))
    }

    /// List persons with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Page<Person>> {
        self.persons.find_page(page).await
    }

    /// Apply a partial update. Present groups replace the stored groups
    /// wholesale.
    pub async fn update(&self, id: &RecordId, patch: &UpdatePerson) -> AppResult<Person> {
        let person = self.persons.update(id, patch).await?;
        info!(person_id = %person.id, "Person updated");
        Ok(person)
    }

    /// Delete a person. Never cascades to cases or uploads referencing
    /// it; those references dangle and resolve to null afterwards.
    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.persons.delete(id).await? {
            return Err(AppError::not_found(format!("Person {id} not found")));
        }
        info!(person_id = %id, "Person deleted");
        Ok(())
    }

    /// Exact lookup by the unique national identity number.
    pub async fn find_by_national_id(&self, national_id: &str) -> AppResult<Option<Person>> {
        self.persons.find_by_national_id(national_id).await
    }

    /// Case-insensitive substring search over the name parts.
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Person>> {
        self.persons.search_by_name(name).await
    }

    /// Fetch a person with its option references resolved to display
    /// labels. Unresolvable values degrade to null.
    pub async fn get_resolved(&self, id: &RecordId) -> AppResult<ResolvedPerson> {
        let person = self.get(id).await?;
        let resolved = self.resolve_labels(&person).await?;
        Ok(ResolvedPerson { person, resolved })
    }

    async fn resolve_labels(&self, person: &Person) -> AppResult<OptionLabels> {
        let sets = self.option_sets.as_ref();
        let personal = &person.personal_info;
        let professional = &person.professional_info;
        let contact = &person.contact_info;

        let work_city = match contact.work_address.as_ref().and_then(|w| w.city.as_deref()) {
            Some(city) => resolve_label(sets, KEY_CITIES, city).await?,
            None => None,
        };

        Ok(OptionLabels {
            nationality: resolve_label(sets, KEY_NATIONALITIES, &personal.nationality).await?,
            marital_status: {
                resolve_label(sets, KEY_MARITAL_STATUSES, &personal.marital_status).await?
            },
            profession: resolve_label(sets, KEY_PROFESSIONS, &professional.profession).await?,
            academic_qualification: {
                resolve_label(sets, KEY_QUALIFICATIONS, &professional.academic_qualification)
                    .await?
            },
            birth_city: resolve_label(sets, KEY_CITIES, &personal.place_of_birth).await?,
            current_city: resolve_label(sets, KEY_CITIES, &contact.current_address.city).await?,
            work_city,
        })
    }
}
