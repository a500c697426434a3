//! Env file text format.
//!
//! ```text
//! <key id>
//! NAME=plain value
//! DB_PASS=SECURE:<base64 ciphertext>
//! ```
//!
//! The first non-blank line is the master key id. Every later line is split
//! on its first `=`; blank lines and lines without `=` are skipped on read
//! and never written. Lines end at `\n` only, so names and plain values are
//! kept verbatim, including a trailing `\r`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::core::constants::SECURE_PREFIX;
use crate::core::domain::{Entry, EntryValue, EnvFile};
use crate::core::types::Ciphertext;
use crate::error::{Result, StoreError};

/// Parse env file text.
///
/// Empty input yields an uninitialized [`EnvFile`]; callers decide whether
/// that is acceptable.
///
/// # Errors
///
/// Returns `StoreError::Format` if a `SECURE:` value is not valid base64.
pub fn parse(text: &str) -> Result<EnvFile> {
    let mut key_id = None;
    let mut entries = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        if key_id.is_none() {
            key_id = Some(line.trim().to_string());
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            trace!(line = idx + 1, "skipping line without '='");
            continue;
        };

        let entry = match decode_secure(value) {
            Some(decoded) => {
                let ciphertext = decoded.map_err(|reason| StoreError::Format {
                    line: idx + 1,
                    reason: format!("{} for {}", reason, name),
                })?;
                Entry::secure(name, ciphertext)
            }
            None => Entry::plain(name, value),
        };
        entries.push(entry);
    }

    Ok(EnvFile::from_parts(key_id, entries))
}

/// Serialize an env file to text.
///
/// Writes the key id line, then one line per entry in stored order.
pub fn serialize(file: &EnvFile) -> String {
    let mut output = String::new();

    if let Some(key_id) = file.key_id() {
        output.push_str(key_id);
        output.push('\n');
    }

    for entry in file.entries() {
        output.push_str(entry.name());
        output.push('=');
        match entry.value() {
            EntryValue::Plain(value) => output.push_str(value),
            EntryValue::Secure(ciphertext) => output.push_str(&encode_secure(ciphertext)),
        }
        output.push('\n');
    }

    output
}

/// Encode ciphertext as a marked value (`SECURE:<base64>`).
pub fn encode_secure(ciphertext: &[u8]) -> String {
    format!("{}{}", SECURE_PREFIX, STANDARD.encode(ciphertext))
}

/// Decode a marked value.
///
/// Returns `None` if the value does not carry the `SECURE:` marker, and
/// `Some(Err(reason))` if it does but the payload is not valid base64.
pub fn decode_secure(value: &str) -> Option<std::result::Result<Ciphertext, String>> {
    let payload = value.strip_prefix(SECURE_PREFIX)?;
    Some(
        STANDARD
            .decode(payload.trim_end())
            .map_err(|e| format!("invalid base64 ciphertext ({})", e)),
    )
}
