//! Dictionary collection use-case service.
//!
//! # Responsibility
//! - Load the persisted collection, falling back to the seed dataset.
//! - Persist the collection on request.
//!
//! # Invariants
//! - Load failures are recovered, never propagated.
//! - Save failures are returned to the caller unchanged.

use crate::model::collection::DictionaryCollection;
use crate::model::seed::default_collection;
use crate::repo::collection_repo::{CollectionRepository, RepoError, RepoResult};
use log::{info, warn};
use std::time::Instant;

/// Result of startup loading.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Collection to use for the session.
    pub collection: DictionaryCollection,
    /// Load failure that triggered seeding, if any.
    pub recovered_from: Option<RepoError>,
}

/// Use-case service wrapper for collection persistence.
pub struct DictionaryService<R: CollectionRepository> {
    repo: R,
}

impl<R: CollectionRepository> DictionaryService<R> {
    /// Creates a service over the given repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the persisted collection or builds the seed dataset.
    ///
    /// # Contract
    /// - Never fails; the load error, if any, is kept in `recovered_from`.
    /// - Missing and malformed files are both recovered the same way.
    pub fn load_or_seed(&self) -> LoadOutcome {
        let started_at = Instant::now();
        match self.repo.load() {
            Ok(collection) => {
                info!(
                    "event=collection_load module=service status=ok source=persisted dictionaries={} duration_ms={}",
                    collection.len(),
                    started_at.elapsed().as_millis()
                );
                LoadOutcome {
                    collection,
                    recovered_from: None,
                }
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=service status=recovered source=seed location={} duration_ms={} error_code={}",
                    self.repo.location(),
                    started_at.elapsed().as_millis(),
                    err.code()
                );
                LoadOutcome {
                    collection: default_collection(),
                    recovered_from: Some(err),
                }
            }
        }
    }

    /// Persists the full collection.
    ///
    /// # Errors
    /// - Returns repository errors unchanged; nothing is retried.
    pub fn save(&self, collection: &DictionaryCollection) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = self.repo.save(collection);
        match &result {
            Ok(()) => info!(
                "event=collection_save module=service status=ok dictionaries={} duration_ms={}",
                collection.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=collection_save module=service status=error location={} duration_ms={} error_code={}",
                self.repo.location(),
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::DictionaryService;
    use crate::model::collection::DictionaryCollection;
    use crate::model::dictionary::Dictionary;
    use crate::model::seed::default_collection;
    use crate::repo::collection_repo::{MemoryCollectionRepository, RepoError};

    #[test]
    fn load_or_seed_uses_seed_when_repository_is_empty() {
        let service = DictionaryService::new(MemoryCollectionRepository::new());

        let outcome = service.load_or_seed();
        assert!(matches!(outcome.recovered_from, Some(RepoError::Missing)));
        assert_eq!(outcome.collection, default_collection());
    }

    #[test]
    fn load_or_seed_prefers_persisted_collection() {
        let mut persisted = DictionaryCollection::new();
        persisted.add_dictionary("es-en", Dictionary::new("Spanish", "English"));
        let service =
            DictionaryService::new(MemoryCollectionRepository::with_collection(persisted.clone()));

        let outcome = service.load_or_seed();
        assert!(outcome.recovered_from.is_none());
        assert_eq!(outcome.collection, persisted);
    }

    #[test]
    fn save_surfaces_repository_errors() {
        let repo = MemoryCollectionRepository::new();
        repo.reject_saves(true);
        let service = DictionaryService::new(&repo);

        let err = service.save(&default_collection()).unwrap_err();
        assert!(matches!(err, RepoError::Rejected(_)));

        repo.reject_saves(false);
        service.save(&default_collection()).unwrap();
        assert_eq!(repo.save_count(), 1);
    }
}
