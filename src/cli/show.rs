//! Show command.
//!
//! Prints every entry of an env file with its value decrypted. Debug only:
//! the output contains secrets.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::config::KmsConfig;
use crate::core::shell::render_listing;
use crate::core::{kms, workflow};
use crate::error::Result;

/// JSON form of one entry. An array keeps the stored order.
#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    value: &'a str,
}

/// Print `file` with values decrypted, as `NAME=value` lines or JSON.
pub fn execute(file: &Path, json: bool, config: &KmsConfig) -> Result<()> {
    let gateway = kms::connect(config)?;
    let pairs = workflow::show(file, gateway.as_ref())?;

    if json {
        let entries: Vec<JsonEntry> = pairs
            .iter()
            .map(|(name, value)| JsonEntry {
                name,
                value: value.as_str(),
            })
            .collect();
        output::raw(&format!("{}\n", serde_json::to_string_pretty(&entries)?))?;
    } else if pairs.is_empty() {
        output::dimmed("no entries stored");
    } else {
        output::raw(&render_listing(&pairs))?;
    }

    Ok(())
}
