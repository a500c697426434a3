//! Entry type.
//!
//! A single `NAME=VALUE` line of an env file, either plaintext or ciphertext.

use crate::core::types::{Ciphertext, EntryName};

/// Value half of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    /// Literal value stored as-is.
    Plain(String),
    /// Ciphertext bytes produced by the key-management service.
    Secure(Ciphertext),
}

/// A named value in an env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: EntryName,
    value: EntryValue,
}

impl Entry {
    /// Create an entry with a literal value
    pub fn plain(name: impl Into<EntryName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EntryValue::Plain(value.into()),
        }
    }

    /// Create an entry holding ciphertext
    pub fn secure(name: impl Into<EntryName>, ciphertext: Ciphertext) -> Self {
        Self {
            name: name.into(),
            value: EntryValue::Secure(ciphertext),
        }
    }

    /// Entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry value
    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    /// Whether the value is ciphertext
    pub fn is_encrypted(&self) -> bool {
        matches!(self.value, EntryValue::Secure(_))
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
