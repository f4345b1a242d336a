//! Small persisted key-value helpers
//!
//! Values are stored as JSON text. Reads never fail: a missing, corrupt, or
//! unreadable entry yields the caller's default. Write and remove failures are
//! logged as warnings and otherwise ignored.

use crate::core::error::{Result, RoadmapError};
use crate::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw string storage behind [`LocalStore`]
pub trait StorageBackend {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    /// Returns `StorageUnavailable` when the store cannot be read
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw value under `key`
    ///
    /// # Errors
    /// Returns `StorageUnavailable` when the store cannot be written
    fn set_item(&mut self, key: &str, value: String) -> Result<()>;

    /// Delete the value under `key`
    ///
    /// # Errors
    /// Returns `StorageUnavailable` when the store cannot be written
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// In-memory backend, optionally simulating an unavailable store
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryBackend {
    /// Empty, available store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails every operation
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            items: BTreeMap::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            Err(RoadmapError::storage("store is disabled"))
        } else {
            Ok(())
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.check()?;
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.items.remove(key);
        Ok(())
    }
}

/// Backend persisting all entries as one JSON object in a file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend for the given file; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the entries
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let unavailable = |err: &dyn std::fmt::Display| {
            RoadmapError::storage(format!("{}: {err}", self.path.display()))
        };
        let content = fs::read_to_string(&self.path).map_err(|e| unavailable(&e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| unavailable(&e))
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let unavailable = |err: &dyn std::fmt::Display| {
            RoadmapError::storage(format!("{}: {err}", self.path.display()))
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| unavailable(&e))?;
            }
        }
        let json = serde_json::to_string_pretty(items).map_err(|e| unavailable(&e))?;
        fs::write(&self.path, json).map_err(|e| unavailable(&e))
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value);
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

/// JSON-valued helpers over a storage backend
#[derive(Debug, Clone, Default)]
pub struct LocalStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> LocalStore<B> {
    /// Wrap a backend
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Store `value` as JSON under `key`
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let stored = serde_json::to_string(value)
            .map_err(RoadmapError::from)
            .and_then(|json| self.backend.set_item(key, json));
        if let Err(err) = stored {
            warn!("LocalStorage not available: {err}");
        }
    }

    /// Value under `key`, or `default` if absent, corrupt, or unreadable
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => serde_json::from_str(&raw).unwrap_or(default),
            Ok(_) => default,
            Err(err) => {
                warn!("LocalStorage not available: {err}");
                default
            }
        }
    }

    /// Raw JSON text stored under `key`, if readable
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.backend.get_item(key).ok().flatten()
    }

    /// Delete the entry under `key`
    pub fn remove(&mut self, key: &str) {
        if let Err(err) = self.backend.remove_item(key) {
            warn!("LocalStorage not available: {err}");
        }
    }

    /// Underlying backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
