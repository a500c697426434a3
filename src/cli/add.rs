//! Add command.
//!
//! Encrypts one or more `NAME=VALUE` pairs into an env file in a single save.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::KmsConfig;
use crate::core::{kms, validation, workflow};
use crate::error::{Result, ValidationError};

/// Encrypt `entries` into `file`.
pub fn execute(file: &Path, entries: &[String], config: &KmsConfig) -> Result<()> {
    info!("Adding {} entries to {}", entries.len(), file.display());

    if entries.is_empty() {
        return Err(ValidationError::NoEntries.into());
    }
    // Reject bad input before paying for a KMS connection.
    for token in entries {
        validation::parse_assignment(token)?;
    }

    let gateway = kms::connect(config)?;
    let written = workflow::add(file, entries, gateway.as_ref())?;

    for name in &written {
        output::success(&format!("encrypted {}", output::key(name)));
    }
    Ok(())
}
