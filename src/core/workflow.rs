//! User-facing operations.
//!
//! Each function is one self-contained transaction against a single env
//! file (or, for [`decrypt`], the process environment). Nothing is cached
//! between calls and every gateway failure aborts the whole operation.

use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::codec;
use crate::core::domain::{Entry, EntryValue, EnvFile};
use crate::core::kms::KmsGateway;
use crate::core::store::EnvStore;
use crate::core::validation;
use crate::error::{KmsError, Result, ValidationError};

/// A name paired with its plaintext value.
pub type Plaintext = (String, Zeroizing<String>);

/// Create or overwrite `path` as an empty file bound to `key_id`.
///
/// # Errors
///
/// Returns `ValidationError` if either argument is empty.
pub fn init(key_id: &str, path: &Path) -> Result<EnvFile> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath.into());
    }
    validation::validate_key_id(key_id)?;

    info!(path = %path.display(), "initializing env file");
    EnvStore::new(path).init(key_id)
}

/// Encrypt each `NAME=VALUE` token and upsert it into `path`.
///
/// Tokens are validated up front, then applied in order to one loaded
/// copy of the file, which is saved once at the end. If any encryption
/// fails the file on disk is left untouched.
///
/// # Returns
///
/// Names written, in token order.
///
/// # Errors
///
/// Returns `ValidationError` for an empty token list or malformed token,
/// `StoreError::NotFound`/`NotInitialized` for a missing or keyless file,
/// or `KmsError::EncryptionFailed` naming the entry that failed.
pub fn add<S: AsRef<str>>(
    path: &Path,
    tokens: &[S],
    gateway: &dyn KmsGateway,
) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(ValidationError::NoEntries.into());
    }
    let assignments = tokens
        .iter()
        .map(|t| validation::parse_assignment(t.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let store = EnvStore::new(path);
    let mut file = store.load()?;
    let key_id = file.require_key_id(path)?.to_string();

    debug!(
        count = assignments.len(),
        backend = gateway.name(),
        "encrypting entries"
    );
    let mut written = Vec::with_capacity(assignments.len());
    for (name, value) in assignments {
        let ciphertext = gateway
            .encrypt(&key_id, value)
            .map_err(|e| e.for_entry(name))?;
        file.upsert(Entry::secure(name, ciphertext));
        written.push(name.to_string());
    }

    store.save(&file)?;
    info!(count = written.len(), path = %path.display(), "entries added");
    Ok(written)
}

/// Decrypt every `SECURE:` value in an environment snapshot.
///
/// Unmarked values are ignored, as are names a shell could not export.
/// Output keeps the snapshot's iteration order. All values are decrypted
/// before anything is returned, so a failure yields no partial result.
///
/// # Errors
///
/// Returns `KmsError::DecryptionFailed` naming the first variable that
/// could not be decoded or decrypted.
pub fn decrypt<I, K, V>(snapshot: I, gateway: &dyn KmsGateway) -> Result<Vec<Plaintext>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut decrypted = Vec::new();

    for (name, value) in snapshot {
        let name = name.into();
        let Some(ciphertext) = codec::decode_secure(value.as_ref()) else {
            continue;
        };
        if !validation::is_shell_identifier(&name) {
            debug!(name = %name, "skipping variable that is not a shell identifier");
            continue;
        }

        let ciphertext =
            ciphertext.map_err(|reason| KmsError::decrypt(reason).for_entry(&name))?;
        let plaintext = gateway
            .decrypt(&ciphertext)
            .map_err(|e| e.for_entry(&name))?;
        decrypted.push((name, plaintext));
    }

    debug!(count = decrypted.len(), "decrypted environment variables");
    Ok(decrypted)
}

/// Load `path` and decrypt every encrypted entry, in stored order.
///
/// Plain entries are returned as stored. Never writes to disk.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file is absent, or
/// `KmsError::DecryptionFailed` naming the entry that failed.
pub fn show(path: &Path, gateway: &dyn KmsGateway) -> Result<Vec<Plaintext>> {
    let file = EnvStore::new(path).load()?;

    file.entries()
        .iter()
        .map(|entry| -> Result<Plaintext> {
            let value = match entry.value() {
                EntryValue::Plain(value) => Zeroizing::new(value.clone()),
                EntryValue::Secure(ciphertext) => gateway
                    .decrypt(ciphertext)
                    .map_err(|e| e.for_entry(entry.name()))?,
            };
            Ok((entry.name().to_string(), value))
        })
        .collect()
}
