//! Env file storage.
//!
//! [`EnvStore`] binds one path on disk and runs the read/modify/write
//! lifecycle of the [`EnvFile`] stored there. The file is the only
//! persisted state; nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::codec;
use crate::core::domain::{Entry, EnvFile};
use crate::core::kms::KmsGateway;
use crate::core::validation;
use crate::error::{Result, ValidationError};

mod fs;

/// Filesystem-backed store for one env file.
#[derive(Debug, Clone)]
pub struct EnvStore {
    path: PathBuf,
}

impl EnvStore {
    /// Bind a store to `path`. Nothing is read until [`EnvStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a file exists at the path
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the file is absent, or
    /// `StoreError::Format` if it cannot be parsed.
    pub fn load(&self) -> Result<EnvFile> {
        debug!(path = %self.path.display(), "loading env file");
        let contents = fs::read(&self.path)?;
        let file = codec::parse(&contents)?;
        debug!(entries = file.len(), "env file loaded");
        Ok(file)
    }

    /// Serialize and atomically write the file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotInitialized` if `file` has no key id, or
    /// `StoreError::Write` on I/O failure.
    pub fn save(&self, file: &EnvFile) -> Result<()> {
        file.require_key_id(&self.path)?;
        debug!(path = %self.path.display(), entries = file.len(), "saving env file");
        fs::write_atomic(&self.path, &codec::serialize(file))
    }

    /// Create or overwrite the file with `key_id` and no entries.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `key_id` or the path is empty.
    pub fn init(&self, key_id: &str) -> Result<EnvFile> {
        validation::validate_key_id(key_id)?;
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath.into());
        }

        let file = EnvFile::new(key_id.trim());
        self.save(&file)?;
        Ok(file)
    }

    /// Encrypt `plaintext` under the file's key and store it as `name`.
    ///
    /// Replaces an existing entry of the same name in place; new names are
    /// appended. Nothing is written if encryption fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`/`NotInitialized` if the file is missing
    /// or has no key id, `ValidationError` for a bad name or value, or
    /// `KmsError::EncryptionFailed` from the gateway.
    pub fn upsert(
        &self,
        name: &str,
        plaintext: &str,
        gateway: &dyn KmsGateway,
    ) -> Result<EnvFile> {
        validation::validate_name(name)?;
        validation::validate_value(name, plaintext)?;

        let mut file = self.load()?;
        let key_id = file.require_key_id(&self.path)?.to_string();
        let ciphertext = gateway
            .encrypt(&key_id, plaintext)
            .map_err(|e| e.for_entry(name))?;

        file.upsert(Entry::secure(name, ciphertext));
        self.save(&file)?;
        Ok(file)
    }
}
