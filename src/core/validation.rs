//! Input validation for kmsenv operations.
//!
//! Everything here runs before any file or network access, so a bad
//! argument never costs a KMS round trip or touches the env file.

use crate::error::{Result, ValidationError};

/// Validate a master key id.
///
/// Key ids, ARNs and aliases never contain whitespace; one that did would
/// also break the single-line header of the file.
///
/// # Errors
///
/// Returns `ValidationError` if the key id is blank or contains whitespace.
pub fn validate_key_id(key_id: &str) -> Result<()> {
    let key_id = key_id.trim();
    if key_id.is_empty() {
        return Err(ValidationError::EmptyKeyId.into());
    }

    if key_id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidKeyId(key_id.to_string()).into());
    }

    Ok(())
}

/// Validate an entry name.
///
/// Names must be non-empty and may not contain `=` or whitespace. Shell
/// identifier rules are not enforced here; `decrypt` skips names a shell
/// could not export.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName(name.to_string()).into());
    }

    for (i, ch) in name.chars().enumerate() {
        if ch == '=' || ch.is_whitespace() {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!("invalid character {:?} at position {}", ch, i + 1),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate an entry value.
///
/// The file format is line-oriented, so values cannot span lines.
///
/// # Errors
///
/// Returns `ValidationError::MultilineValue` if the value has a line break.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::MultilineValue(name.to_string()).into());
    }

    Ok(())
}

/// Split a `NAME=VALUE` token on its first `=` and validate both halves.
///
/// # Errors
///
/// Returns `ValidationError` if there is no `=`, the name is empty or
/// invalid, or the value spans lines.
pub fn parse_assignment(token: &str) -> Result<(&str, &str)> {
    let (name, value) = token
        .split_once('=')
        .ok_or_else(|| ValidationError::MissingSeparator(token.to_string()))?;

    if name.is_empty() {
        return Err(ValidationError::EmptyName(token.to_string()).into());
    }
    validate_name(name)?;
    validate_value(name, value)?;

    Ok((name, value))
}

/// Whether a name can be the target of a shell `export`.
///
/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
