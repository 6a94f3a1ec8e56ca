//! Persistence contracts for the dictionary collection.
//!
//! # Responsibility
//! - Define the load/save contract used by the service layer.
//! - Provide the JSON-file implementation and an in-memory one.
//!
//! # Invariants
//! - `load` returns either a complete collection or an error.
//! - `save` persists the whole collection; callers keep their in-memory
//!   copy regardless of the outcome.

pub mod collection_repo;
