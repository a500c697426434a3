//! Decrypt command.
//!
//! Reads the current environment and prints an export statement for every
//! variable holding a `SECURE:` value, for use with `eval "$(kmsenv decrypt)"`.
//! Nothing is printed unless every variable decrypts.

use tracing::info;

use crate::cli::output;
use crate::core::config::KmsConfig;
use crate::core::shell::{render_exports, ExportFormat};
use crate::core::{codec, kms, workflow};
use crate::error::Result;

/// Print exports for encrypted variables in the process environment.
pub fn execute(format: ExportFormat, config: &KmsConfig) -> Result<()> {
    let snapshot: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();

    // Skip connecting when there is nothing to decrypt.
    if !snapshot
        .iter()
        .any(|(_, v)| codec::decode_secure(v).is_some())
    {
        info!("no encrypted variables in environment");
        return Ok(());
    }

    let gateway = kms::connect(config)?;
    let pairs = workflow::decrypt(snapshot, gateway.as_ref())?;
    info!("Decrypted {} variables", pairs.len());

    output::raw(&render_exports(&pairs, format))?;
    Ok(())
}
