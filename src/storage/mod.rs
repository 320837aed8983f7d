//! Document store for birth profiles and published daily horoscopes

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BirthDetails, DailyHoroscopes};

const STORE_FILE_NAME: &str = "jyotish_store.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize store: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to acquire {0} lock")]
    Lock(&'static str),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value document store used by the server.
///
/// Profiles are keyed by name; daily horoscopes by ISO date.
pub trait DocumentStore: Send + Sync {
    fn save_profile(&self, profile: BirthDetails) -> Result<()>;
    fn get_profile(&self, name: &str) -> Result<Option<BirthDetails>>;
    fn list_profiles(&self) -> Result<Vec<String>>;
    /// Returns whether a profile was removed
    fn delete_profile(&self, name: &str) -> Result<bool>;

    fn save_daily_horoscopes(&self, daily: DailyHoroscopes) -> Result<()>;
    fn get_daily_horoscopes(&self, date: &str) -> Result<Option<DailyHoroscopes>>;
}

/// Everything the store holds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Documents {
    #[serde(default)]
    profiles: BTreeMap<String, BirthDetails>,
    #[serde(default)]
    daily_horoscopes: BTreeMap<String, DailyHoroscopes>,
}

impl Documents {
    fn apply_delete(&mut self, name: &str) -> bool {
        self.profiles.remove(name).is_some()
    }
}

/// In-process store with no persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn save_profile(&self, profile: BirthDetails) -> Result<()> {
        let mut docs = self.documents.write().map_err(|_| StorageError::Lock("write"))?;
        docs.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    fn get_profile(&self, name: &str) -> Result<Option<BirthDetails>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.profiles.get(name).cloned())
    }

    fn list_profiles(&self) -> Result<Vec<String>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.profiles.keys().cloned().collect())
    }

    fn delete_profile(&self, name: &str) -> Result<bool> {
        let mut docs = self.documents.write().map_err(|_| StorageError::Lock("write"))?;
        Ok(docs.apply_delete(name))
    }

    fn save_daily_horoscopes(&self, daily: DailyHoroscopes) -> Result<()> {
        let mut docs = self.documents.write().map_err(|_| StorageError::Lock("write"))?;
        docs.daily_horoscopes.insert(daily.date.clone(), daily);
        Ok(())
    }

    fn get_daily_horoscopes(&self, date: &str) -> Result<Option<DailyHoroscopes>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.daily_horoscopes.get(date).cloned())
    }
}

/// Store backed by a single JSON file, rewritten after every change
pub struct JsonFileStore {
    documents: RwLock<Documents>,
    storage_path: PathBuf,
}

impl JsonFileStore {
    /// Open the store in the platform data directory
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_dir())
    }

    /// Open (or create) the store inside `dir`
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let storage_path = dir.join(STORE_FILE_NAME);

        let documents = if storage_path.exists() {
            let data = fs::read_to_string(&storage_path)?;
            serde_json::from_str(&data)?
        } else {
            Documents::default()
        };

        tracing::debug!(path = %storage_path.display(), "Opened document store");

        Ok(Self {
            documents: RwLock::new(documents),
            storage_path,
        })
    }

    /// Platform data directory, falling back to the current directory
    pub fn default_dir() -> PathBuf {
        ProjectDirs::from("com", "jyotish", "jyotish")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn mutate<T>(&self, change: impl FnOnce(&mut Documents) -> T) -> Result<T> {
        let result = {
            let mut docs = self.documents.write().map_err(|_| StorageError::Lock("write"))?;
            change(&mut docs)
        };
        self.persist()?;
        Ok(result)
    }

    fn persist(&self) -> Result<()> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        let data = serde_json::to_string_pretty(&*docs)?;
        fs::write(&self.storage_path, data)?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn save_profile(&self, profile: BirthDetails) -> Result<()> {
        self.mutate(|docs| {
            docs.profiles.insert(profile.name.clone(), profile);
        })
    }

    fn get_profile(&self, name: &str) -> Result<Option<BirthDetails>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.profiles.get(name).cloned())
    }

    fn list_profiles(&self) -> Result<Vec<String>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.profiles.keys().cloned().collect())
    }

    fn delete_profile(&self, name: &str) -> Result<bool> {
        let exists = self.get_profile(name)?.is_some();
        if !exists {
            return Ok(false);
        }
        self.mutate(|docs| docs.apply_delete(name))
    }

    fn save_daily_horoscopes(&self, daily: DailyHoroscopes) -> Result<()> {
        self.mutate(|docs| {
            docs.daily_horoscopes.insert(daily.date.clone(), daily);
        })
    }

    fn get_daily_horoscopes(&self, date: &str) -> Result<Option<DailyHoroscopes>> {
        let docs = self.documents.read().map_err(|_| StorageError::Lock("read"))?;
        Ok(docs.daily_horoscopes.get(date).cloned())
    }
}
