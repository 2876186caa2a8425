//! Core data types for the entry store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A journal entry handle.
///
/// Binds an entry name to its backing file inside the store directory. The
/// handle holds no content and no key material; the file is the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name, also the storage key (filename without extension)
    name: String,

    /// Backing file path
    path: PathBuf,
}

impl Entry {
    pub(crate) fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Entry name (unique within the store).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    ///
    /// File existence is the sole source of truth for "entry exists";
    /// there is no separate index.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Last modification time of the backing file.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if the file is missing or its metadata
    /// cannot be read.
    pub fn modified(&self) -> Result<DateTime<Utc>> {
        let modified = fs::metadata(&self.path)?.modified()?;
        Ok(DateTime::<Utc>::from(modified))
    }
}
