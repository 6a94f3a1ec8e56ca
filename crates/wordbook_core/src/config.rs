//! Process configuration from environment variables.
//!
//! | Variable                     | Default                    |
//! |------------------------------|----------------------------|
//! | `WORDBOOK_DICTIONARIES_FILE` | `dictionaries.json`        |
//! | `WORDBOOK_LOG_LEVEL`         | `debug` / `info` (release) |
//! | `WORDBOOK_LOG_DIR`           | unset: file logging off    |
//!
//! Empty values are treated as unset.

use crate::logging::default_log_level;
use crate::store::DEFAULT_DICTIONARIES_FILE;
use std::path::PathBuf;

pub const DICTIONARIES_FILE_VAR: &str = "WORDBOOK_DICTIONARIES_FILE";
pub const LOG_LEVEL_VAR: &str = "WORDBOOK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "WORDBOOK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Persisted collection location, relative to the working directory
    /// unless absolute.
    pub dictionaries_path: PathBuf,
    pub log_level: String,
    /// `None` keeps file logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dictionaries_path: PathBuf::from(DEFAULT_DICTIONARIES_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment; missing or blank variables fall back
    /// to defaults, so this never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            dictionaries_path: read(DICTIONARIES_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.dictionaries_path),
            log_level: read(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DICTIONARIES_FILE_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dictionaries_path, PathBuf::from("dictionaries.json"));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn values_override_defaults_and_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DICTIONARIES_FILE_VAR, " /tmp/words.json "),
            (LOG_LEVEL_VAR, "warn"),
            (LOG_DIR_VAR, "   "),
        ]));

        assert_eq!(config.dictionaries_path, PathBuf::from("/tmp/words.json"));
        assert_eq!(config.log_level, "warn");
        assert!(config.log_dir.is_none());
    }
}
