//! Init command.
//!
//! Binds an env file to a KMS master key. Overwrites any existing file.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::store::EnvStore;
use crate::core::{validation, workflow};
use crate::error::Result;

/// Create or overwrite `file` with `key_id` and no entries.
pub fn execute(key_id: &str, file: &Path) -> Result<()> {
    info!("Initializing {}", file.display());
    validation::validate_key_id(key_id)?;

    if EnvStore::new(file).exists() {
        output::warn(&format!(
            "overwriting {}: existing entries will be lost",
            output::path(file)
        ));
    }

    workflow::init(key_id, file)?;

    output::success(&format!("initialized {}", output::path(file)));
    output::hint(&format!("next: kmsenv add {} NAME=VALUE", file.display()));
    Ok(())
}
