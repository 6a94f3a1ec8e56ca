//! Collection repository contract and implementations.

use crate::model::collection::DictionaryCollection;
use crate::store::{load_collection, save_collection, StoreError};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying file storage failure.
    Store(StoreError),
    /// Nothing has been persisted yet.
    Missing,
    /// The backend refused the operation.
    Rejected(String),
}

impl RepoError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Store(err) => err.code(),
            Self::Missing => "missing",
            Self::Rejected(_) => "rejected",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Missing => write!(f, "no persisted dictionaries"),
            Self::Rejected(message) => write!(f, "{message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Missing | Self::Rejected(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for whole-collection persistence.
pub trait CollectionRepository {
    fn load(&self) -> RepoResult<DictionaryCollection>;
    fn save(&self, collection: &DictionaryCollection) -> RepoResult<()>;
    /// Human-readable location for logs.
    fn location(&self) -> String;
}

impl<R: CollectionRepository + ?Sized> CollectionRepository for &R {
    fn load(&self) -> RepoResult<DictionaryCollection> {
        (**self).load()
    }

    fn save(&self, collection: &DictionaryCollection) -> RepoResult<()> {
        (**self).save(collection)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// JSON-file-backed collection repository.
#[derive(Debug, Clone)]
pub struct JsonFileCollectionRepository {
    path: PathBuf,
}

impl JsonFileCollectionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionRepository for JsonFileCollectionRepository {
    fn load(&self) -> RepoResult<DictionaryCollection> {
        Ok(load_collection(&self.path)?)
    }

    fn save(&self, collection: &DictionaryCollection) -> RepoResult<()> {
        Ok(save_collection(collection, &self.path)?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process repository. Holds the last saved collection.
#[derive(Debug, Default)]
pub struct MemoryCollectionRepository {
    stored: RefCell<Option<DictionaryCollection>>,
    reject_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryCollectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `collection`.
    pub fn with_collection(collection: DictionaryCollection) -> Self {
        Self {
            stored: RefCell::new(Some(collection)),
            ..Self::default()
        }
    }

    /// Makes subsequent saves fail with `RepoError::Rejected`.
    pub fn reject_saves(&self, reject: bool) {
        self.reject_saves.set(reject);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Returns a copy of the last saved collection.
    pub fn snapshot(&self) -> Option<DictionaryCollection> {
        self.stored.borrow().clone()
    }
}

impl CollectionRepository for MemoryCollectionRepository {
    fn load(&self) -> RepoResult<DictionaryCollection> {
        self.stored.borrow().clone().ok_or(RepoError::Missing)
    }

    fn save(&self, collection: &DictionaryCollection) -> RepoResult<()> {
        if self.reject_saves.get() {
            return Err(RepoError::Rejected("memory repository is read-only".to_string()));
        }
        *self.stored.borrow_mut() = Some(collection.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
