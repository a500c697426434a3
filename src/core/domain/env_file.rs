//! EnvFile type.
//!
//! In-memory form of an encrypted env file: one master key id plus an
//! ordered list of entries.

use crate::core::domain::Entry;
use crate::core::types::KeyId;
use crate::error::{Result, StoreError};
use std::path::Path;

/// A parsed env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    key_id: Option<KeyId>,
    entries: Vec<Entry>,
}

impl EnvFile {
    /// Create a file with no entries
    ///
    /// A blank key id leaves the file uninitialized.
    pub fn new(key_id: impl Into<KeyId>) -> Self {
        Self {
            key_id: normalize_key_id(Some(key_id.into())),
            entries: Vec::new(),
        }
    }

    /// Create from a key id and entries, in order
    ///
    /// A blank key id is treated as absent. Later duplicates replace
    /// earlier ones in place.
    pub fn from_parts(key_id: Option<KeyId>, entries: Vec<Entry>) -> Self {
        let mut file = Self {
            key_id: normalize_key_id(key_id),
            entries: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            file.upsert(entry);
        }
        file
    }

    /// Master key id, if the file was initialized
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Master key id, or `NotInitialized` for the given path
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotInitialized` if there is no key id.
    pub fn require_key_id(&self, path: &Path) -> Result<&str> {
        self.key_id()
            .ok_or_else(|| StoreError::NotInitialized(path.to_path_buf()).into())
    }

    /// Insert an entry, replacing any entry with the same name in place
    ///
    /// New names are appended at the end.
    pub fn upsert(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.name() == entry.name()) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// All entries in stored order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry names in stored order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim surrounding whitespace; blank ids become `None`.
fn normalize_key_id(key_id: Option<KeyId>) -> Option<KeyId> {
    key_id
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
