//! Whole-file JSON load/save.
//!
//! # Invariants
//! - Output is 2-space indented with a trailing newline.
//! - Field order is `dicts` -> key -> `from`, `to`, `words`.

use super::{StoreError, StoreResult};
use crate::model::collection::DictionaryCollection;
use log::{error, info};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::time::Instant;

/// File name used when no explicit location is configured.
pub const DEFAULT_DICTIONARIES_FILE: &str = "dictionaries.json";

/// Serializes `collection` to `path`, replacing any existing file.
///
/// # Errors
/// - `Encode` when JSON encoding fails (checked before touching the file).
/// - `Create` when the file cannot be created or truncated.
/// - `Write` when writing or flushing the payload fails.
pub fn save_collection(
    collection: &DictionaryCollection,
    path: impl AsRef<Path>,
) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = write_pretty_json(collection, path);
    match &result {
        Ok(()) => info!(
            "event=store_save module=store status=ok dictionaries={} duration_ms={}",
            collection.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_save module=store status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    result
}

/// Reads and decodes the collection stored at `path`.
///
/// # Errors
/// - `Open` when the file cannot be opened (including when it is missing).
/// - `Decode` when the content is not a valid persisted collection.
pub fn load_collection(path: impl AsRef<Path>) -> StoreResult<DictionaryCollection> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result: StoreResult<DictionaryCollection> = File::open(path)
        .map_err(StoreError::Open)
        .and_then(|file| {
            serde_json::from_reader(BufReader::new(file)).map_err(StoreError::Decode)
        });
    match &result {
        Ok(collection) => info!(
            "event=store_load module=store status=ok dictionaries={} duration_ms={}",
            collection.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_load module=store status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    result
}

fn write_pretty_json(collection: &DictionaryCollection, path: &Path) -> StoreResult<()> {
    let mut payload = serde_json::to_string_pretty(collection).map_err(StoreError::Encode)?;
    payload.push('\n');

    let mut file = File::create(path).map_err(StoreError::Create)?;
    file.write_all(payload.as_bytes()).map_err(StoreError::Write)?;
    file.flush().map_err(StoreError::Write)?;
    Ok(())
}
