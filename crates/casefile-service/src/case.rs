//! Case operations.
//!
//! Every case read embeds the referenced person. A dangling reference
//! serializes as `associatedPerson: null` rather than failing the read.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use casefile_core::error::AppError;
use casefile_core::result::AppResult;
use casefile_core::traits::Repository;
use casefile_core::types::id::RecordId;
use casefile_core::types::pagination::{Page, PageRequest};
use casefile_database::repositories::{CaseRepository, PersonRepository};
use casefile_entity::case::{ArrestInfo, Case, CaseInfo, CreateCase, SeizedItems, UpdateCase};
use casefile_entity::person::Person;

use crate::resolver::resolve;

/// Handles case CRUD with person embedding on every read path.
#[derive(Debug, Clone)]
pub struct CaseService {
    /// Case repository.
    cases: Arc<CaseRepository>,
    /// Person repository, for reference resolution.
    persons: Arc<PersonRepository>,
}

/// A case with its person reference replaced by the full record, or
/// `null` when the reference dangles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCase {
    pub id: RecordId,
    pub case_info: CaseInfo,
    pub arrest_info: ArrestInfo,
    pub seized_items: SeizedItems,
    pub associated_person: Option<Person>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaseService {
    /// Creates a new case service.
    pub fn new(cases: Arc<CaseRepository>, persons: Arc<PersonRepository>) -> Self {
        Self { cases, persons }
    }

    /// Create a case record. The person reference is accepted as-is;
    /// the embedded person in the response reflects whether it resolves.
    pub async fn create(&self, data: &CreateCase) -> AppResult<ResolvedCase> {
        let case = self.cases.create(data).await?;
        info!(case_id = %case.id, "Case created");
        self.embed_person(case).await
    }

    /// Fetch a case by document key, with the person embedded.
    pub async fn get(&self, id: &RecordId) -> AppResult<ResolvedCase> {
        let case = self
            .cases
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))?;
        self.embed_person(case).await
    }

    /// List cases with pagination, each with its person embedded.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Page<ResolvedCase>> {
        let cases = self.cases.find_page(page).await?;
        self.embed_page(cases).await
    }

    /// Apply a partial update and return the resolved post-update record.
    pub async fn update(&self, id: &RecordId, patch: &UpdateCase) -> AppResult<ResolvedCase> {
        let case = self.cases.update(id, patch).await?;
        info!(case_id = %case.id, "Case updated");
        self.embed_person(case).await
    }

    /// Delete a case. Uploads attached to it are left in place.
    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.cases.delete(id).await? {
            return Err(AppError::not_found(format!("Case {id} not found")));
        }
        info!(case_id = %id, "Case deleted");
        Ok(())
    }

    /// All cases referencing the given person, newest first.
    pub async fn find_by_person(&self, person_id: &RecordId) -> AppResult<Vec<ResolvedCase>> {
        let cases = self.cases.find_by_person(person_id).await?;
        let mut resolved = Vec::with_capacity(cases.len());
        for case in cases {
            resolved.push(self.embed_person(case).await?);
        }
        Ok(resolved)
    }

    async fn embed_person(&self, case: Case) -> AppResult<ResolvedCase> {
        let person = resolve(self.persons.as_ref(), &case.associated_person).await?;
        Ok(ResolvedCase {
            id: case.id,
            case_info: case.case_info,
            arrest_info: case.arrest_info,
            seized_items: case.seized_items,
            associated_person: person,
            created_at: case.created_at,
            updated_at: case.updated_at,
        })
    }

    async fn embed_page(&self, page: Page<Case>) -> AppResult<Page<ResolvedCase>> {
        let Page {
            docs,
            total_docs,
            limit,
            total_pages,
            page: page_no,
            has_prev_page,
            has_next_page,
            prev_page,
            next_page,
        } = page;

        let mut resolved = Vec::with_capacity(docs.len());
        for case in docs {
            resolved.push(self.embed_person(case).await?);
        }

        Ok(Page {
            docs: resolved,
            total_docs,
            limit,
            total_pages,
            page: page_no,
            has_prev_page,
            has_next_page,
            prev_page,
            next_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_entity::case::ArrestingAuthority;

    fn dangling_case() -> ResolvedCase {
        ResolvedCase {
            id: RecordId::new(),
            case_info: CaseInfo {
                case_number: "2024/417".to_string(),
                case_year: 2024,
                accusation: "تهريب".to_string(),
                criminal_record_number: "CR-1180".to_string(),
                judicial_disposition: "قيد النظر".to_string(),
            },
            arrest_info: ArrestInfo {
                arrest_date: Utc::now(),
                arrest_location: "حمص".to_string(),
                arresting_authority: ArrestingAuthority {
                    main_authority: "الأمن الجنائي".to_string(),
                    branch: "فرع حمص".to_string(),
                },
            },
            seized_items: SeizedItems {
                item_name: "أجهزة".to_string(),
                item_type: "إلكترونيات".to_string(),
                quantity: 12.0,
                quantity_unit: "قطعة".to_string(),
                seized_amount: None,
                reporting_office: None,
                deposit_location: None,
            },
            associated_person: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_dangling_person_serializes_as_explicit_null() {
        let json = serde_json::to_value(dangling_case()).expect("serialize");
        assert!(json["associatedPerson"].is_null());
        assert_eq!(json["caseInfo"]["caseNumber"], "2024/417");
    }
}
