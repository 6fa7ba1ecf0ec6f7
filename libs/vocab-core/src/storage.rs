//! Persistence backends for the word collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;

use crate::types::Collection;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Loads and saves a whole collection at once.
pub trait Storage: Send + Sync {
    fn load(&self) -> Result<Collection, StorageError>;

    fn save(&self, collection: &Collection) -> Result<(), StorageError>;
}

/// Keeps the collection in memory. Saves can be made to fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: Mutex<Collection>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new(collection: Collection) -> Self {
        Self {
            saved: Mutex::new(collection),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The last successfully saved collection.
    pub fn snapshot(&self) -> Result<Collection, StorageError> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Collection, StorageError> {
        self.snapshot()
    }

    fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("saves disabled".to_string()));
        }
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;
        *saved = collection.clone();
        Ok(())
    }
}

/// Stores the collection as one pretty-printed JSON document.
///
/// A missing file loads as an empty collection. Writes go to a sibling
/// temporary file that is renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Collection, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting empty", self.path.display());
                return Ok(Collection::default());
            }
            Err(e) => return Err(e.into()),
        };

        let collection: Collection = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} words from {}",
            collection.words.len(),
            self.path.display()
        );
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(collection)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!(
            "Saved {} words to {}",
            collection.words.len(),
            self.path.display()
        );
        Ok(())
    }
}
