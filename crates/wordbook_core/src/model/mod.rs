//! Translation dictionary domain model.
//!
//! # Responsibility
//! - Define the word mapping for one language pair.
//! - Define the keyed collection that owns every dictionary.
//! - Provide the built-in seed dataset used on first run.
//!
//! # Invariants
//! - Ownership is tree-shaped: collection -> dictionary -> words.
//! - Absence of a word or a dictionary is an `Option`, never an error.

pub mod collection;
pub mod dictionary;
pub mod seed;
