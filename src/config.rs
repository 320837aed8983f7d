//! Startup configuration, resolved once in `main`

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{DocumentStore, JsonFileStore, MemoryStore, StorageError};

pub const DATA_DIR_VAR: &str = "JYOTISH_DATA_DIR";
pub const PERSIST_VAR: &str = "JYOTISH_PERSIST";
pub const LOG_VAR: &str = "RUST_LOG";

/// What the running server can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Profiles and horoscopes survive restarts
    pub persistence: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory for the JSON store; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    pub persistence: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            persistence: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let persistence = lookup(PERSIST_VAR)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.persistence);

        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            data_dir,
            persistence,
            log_filter,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            persistence: self.persistence,
        }
    }

    /// Build the document store this configuration asks for
    pub fn open_store(&self) -> Result<Arc<dyn DocumentStore>, StorageError> {
        if !self.persistence {
            tracing::info!("Persistence disabled, using in-memory store");
            return Ok(Arc::new(MemoryStore::new()));
        }

        let store = match &self.data_dir {
            Some(dir) => JsonFileStore::open(dir)?,
            None => JsonFileStore::open_default()?,
        };
        tracing::info!(path = %store.path().display(), "Using JSON document store");
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.capabilities().persistence);
    }

    #[test]
    fn test_persistence_can_be_disabled() {
        for value in ["0", "false", "NO", " off "] {
            let config = Config::from_lookup(lookup(&[(PERSIST_VAR, value)]));
            assert!(!config.persistence, "{value}");
        }
        let config = Config::from_lookup(lookup(&[(PERSIST_VAR, "1")]));
        assert!(config.persistence);
    }

    #[test]
    fn test_data_dir_and_log_filter() {
        let config = Config::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/var/lib/jyotish"),
            (LOG_VAR, "jyotish=debug"),
        ]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/jyotish")));
        assert_eq!(config.log_filter, "jyotish=debug");
    }

    #[test]
    fn test_open_store_in_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let store = config.open_store().unwrap();
        assert!(store.list_profiles().unwrap().is_empty());
    }
}
