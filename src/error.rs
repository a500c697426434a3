//! Error types.
//!
//! One enum per concern, folded into [`Error`] so every layer can use `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all kmsenv operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Kms(#[from] KmsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bad user input, caught before any file or network access.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key id cannot be empty")]
    EmptyKeyId,

    #[error("invalid key id '{0}': must not contain whitespace")]
    InvalidKeyId(String),

    #[error("file path cannot be empty")]
    EmptyPath,

    #[error("no entries given: expected one or more NAME=VALUE")]
    NoEntries,

    #[error("malformed entry '{0}': expected NAME=VALUE")]
    MissingSeparator(String),

    #[error("malformed entry '{0}': name cannot be empty")]
    EmptyName(String),

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid value for {0}: values cannot contain line breaks")]
    MultilineValue(String),
}

/// Failures reading or writing the env file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not initialized: no key id", .0.display())]
    NotInitialized(PathBuf),

    #[error("malformed file at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures from the key-management gateway.
#[derive(Error, Debug)]
pub enum KmsError {
    #[error("encryption failed{}: {reason}", entry_suffix(.name))]
    EncryptionFailed {
        name: Option<String>,
        reason: String,
    },

    #[error("decryption failed{}: {reason}", entry_suffix(.name))]
    DecryptionFailed {
        name: Option<String>,
        reason: String,
    },
}

impl KmsError {
    /// Encryption failure not yet tied to an entry.
    pub fn encrypt(reason: impl Into<String>) -> Self {
        Self::EncryptionFailed {
            name: None,
            reason: reason.into(),
        }
    }

    /// Decryption failure not yet tied to an entry.
    pub fn decrypt(reason: impl Into<String>) -> Self {
        Self::DecryptionFailed {
            name: None,
            reason: reason.into(),
        }
    }

    /// Attach the entry name the failure belongs to.
    pub fn for_entry(self, entry: &str) -> Self {
        match self {
            Self::EncryptionFailed { reason, .. } => Self::EncryptionFailed {
                name: Some(entry.to_string()),
                reason,
            },
            Self::DecryptionFailed { reason, .. } => Self::DecryptionFailed {
                name: Some(entry.to_string()),
                reason,
            },
        }
    }
}

fn entry_suffix(name: &Option<String>) -> String {
    name.as_ref()
        .map(|n| format!(" for {}", n))
        .unwrap_or_default()
}

impl Error {
    /// Tag a gateway error with the entry it was processing.
    ///
    /// Other variants pass through untouched.
    pub fn for_entry(self, entry: &str) -> Self {
        match self {
            Self::Kms(e) => Self::Kms(e.for_entry(entry)),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
