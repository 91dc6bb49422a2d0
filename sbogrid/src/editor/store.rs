//! Key-value backends for saved layouts.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LayoutError;

/// Backend for layout storage.
///
/// Values are serialized layouts; the editor does the (de)serialization.
pub trait LayoutStore {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), LayoutError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), LayoutError>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LayoutStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), LayoutError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), LayoutError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LayoutStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), LayoutError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(key);
        fs::write(&path, value)?;
        log::debug!("wrote layout {}", path.display());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), LayoutError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
