//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::RecordId;
use crate::types::pagination::{Page, PageRequest};

/// Read-side contract every record collection satisfies.
///
/// Creation and update payloads differ per entity, so those operations
/// live on the concrete repository structs; the shared surface is what
/// generic callers (pagination, reference resolution) need: keyed lookup,
/// windowed listing, deletion, and counting. Every method suspends the
/// calling task for the duration of the store round-trip.
#[async_trait]
pub trait Repository<Entity>: Send + Sync
where
    Entity: Send + Sync + 'static,
{
    /// Find a record by its document key.
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Entity>>;

    /// List records with pagination, newest first.
    async fn find_page(&self, page: &PageRequest) -> AppResult<Page<Entity>>;

    /// Delete a record by its document key. Returns `true` if deleted.
    async fn delete(&self, id: &RecordId) -> AppResult<bool>;

    /// Count all records in the collection.
    async fn count(&self) -> AppResult<u64>;
}
