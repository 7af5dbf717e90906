//! Weak-reference resolution.
//!
//! References between records are bare document keys with no integrity
//! enforcement at write time. Resolution happens on read: a dangling
//! reference degrades to `None` and never fails the surrounding read.
//! Only genuine store failures propagate.

use casefile_core::result::AppResult;
use casefile_core::traits::Repository;
use casefile_core::types::id::RecordId;
use casefile_database::repositories::OptionSetRepository;

/// Resolve a weak reference against its collection.
pub async fn resolve<E, R>(repo: &R, id: &RecordId) -> AppResult<Option<E>>
where
    R: Repository<E> + ?Sized,
    E: Send + Sync + 'static,
{
    repo.find_by_id(id).await
}

/// Resolve an option value to its display label through the named
/// lookup table. Unknown keys and unknown values both degrade to `None`.
pub async fn resolve_label(
    option_sets: &OptionSetRepository,
    key: &str,
    value: &str,
) -> AppResult<Option<String>> {
    Ok(option_sets
        .find_by_key(key)
        .await?
        .and_then(|set| set.label_for(value).map(String::from)))
}
