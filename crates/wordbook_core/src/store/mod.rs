//! JSON file storage for the dictionary collection.
//!
//! # Responsibility
//! - Encode/decode `DictionaryCollection` to a pretty-printed JSON file.
//! - Classify failures as open/create/write (I/O), encode, or decode.
//!
//! # Invariants
//! - Saves overwrite the whole file; there is no partial update.
//! - Load never returns a partially parsed collection.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod json_file;

pub use json_file::{load_collection, save_collection, DEFAULT_DICTIONARIES_FILE};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// File could not be opened for reading.
    Open(io::Error),
    /// File could not be created or truncated.
    Create(io::Error),
    /// File was created but the payload could not be written.
    Write(io::Error),
    /// Collection could not be encoded as JSON.
    Encode(serde_json::Error),
    /// File content is not a valid persisted collection.
    Decode(serde_json::Error),
}

impl StoreError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Open(_) => "open_failed",
            Self::Create(_) => "create_failed",
            Self::Write(_) => "write_failed",
            Self::Encode(_) => "encode_failed",
            Self::Decode(_) => "decode_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "failed to open file: {err}"),
            Self::Create(err) => write!(f, "failed to create file: {err}"),
            Self::Write(err) => write!(f, "failed to write file: {err}"),
            Self::Encode(err) => write!(f, "failed to encode JSON: {err}"),
            Self::Decode(err) => write!(f, "failed to decode JSON: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Create(err) | Self::Write(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}
