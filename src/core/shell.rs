//! Shell export rendering.
//!
//! Turns decrypted pairs into lines a shell can `eval`. Values are always
//! single-quoted so nothing inside them is expanded.

use std::fmt::Write;

use crate::core::workflow::Plaintext;

/// Target shell syntax for `decrypt` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// `export NAME='value'` (sh, bash, zsh)
    #[default]
    Posix,
    /// `set -gx NAME 'value'`
    Fish,
}

/// Render one export line per pair, in order.
pub fn render_exports(pairs: &[Plaintext], format: ExportFormat) -> String {
    let mut out = String::new();
    for (name, value) in pairs {
        // Writing to a String cannot fail.
        let _ = match format {
            ExportFormat::Posix => writeln!(out, "export {}={}", name, quote_posix(value)),
            ExportFormat::Fish => writeln!(out, "set -gx {} {}", name, quote_fish(value)),
        };
    }
    out
}

/// Render `NAME=value` lines for human inspection.
pub fn render_listing(pairs: &[Plaintext]) -> String {
    let mut out = String::new();
    for (name, value) in pairs {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// POSIX single quoting: `'` becomes `'\''`.
fn quote_posix(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// fish single quoting: only `\` and `'` are escaped.
fn quote_fish(value: &str) -> String {
    format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}
