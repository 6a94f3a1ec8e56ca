//! Core domain logic for the wordbook translation dictionary tool.
//! The CLI crate only wires process I/O to `app::run`.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use app::{run, ExitOutcome};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::collection::DictionaryCollection;
pub use model::dictionary::Dictionary;
pub use model::seed::default_collection;
pub use repo::collection_repo::{
    CollectionRepository, JsonFileCollectionRepository, MemoryCollectionRepository, RepoError,
    RepoResult,
};
pub use service::dictionary_service::{DictionaryService, LoadOutcome};
pub use session::{Invocation, Mode, SessionEnd, UsageError};
pub use store::{load_collection, save_collection, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
