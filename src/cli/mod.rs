//! Command-line interface.

pub mod add;
pub mod completions;
pub mod decrypt;
pub mod init;
pub mod output;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::KmsConfig;
use crate::core::constants::ENDPOINT_ENV;
use crate::core::shell::ExportFormat;
use crate::error::Result;

/// kmsenv - Encrypt environment variables with a cloud KMS key.
#[derive(Parser)]
#[command(
    name = "kmsenv",
    about = "Encrypt environment variables with a cloud KMS key",
    version,
    after_help = "Commit the encrypted file; decrypt at runtime with: eval \"$(kmsenv decrypt)\""
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Named AWS profile for credentials
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region of the KMS key
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Override the KMS endpoint (e.g. http://localhost:4566)
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    pub endpoint_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Gateway settings from the parsed flags.
    pub fn kms_config(&self) -> KmsConfig {
        KmsConfig::new(
            self.profile.clone(),
            self.region.clone(),
            self.endpoint_url.clone(),
        )
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create (or overwrite) an env file bound to a KMS master key
    Init {
        /// KMS key id, key ARN, alias name or alias ARN
        key_id: String,
        /// Path of the env file
        file: PathBuf,
    },

    /// Encrypt NAME=VALUE pairs into an env file
    Add {
        /// Path of the env file
        file: PathBuf,
        /// One or more NAME=VALUE pairs
        #[arg(required = true, value_name = "NAME=VALUE")]
        entries: Vec<String>,
    },

    /// Print export statements for SECURE: variables in the current environment
    Decrypt {
        /// Shell syntax for the export statements
        #[arg(long, value_enum, default_value_t = ExportShell::Posix)]
        shell: ExportShell,
    },

    /// Print an env file with all values decrypted (debug only: prints secrets)
    Show {
        /// Path of the env file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells `decrypt` can emit for.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportShell {
    /// sh, bash, zsh
    Posix,
    Fish,
}

impl From<ExportShell> for ExportFormat {
    fn from(shell: ExportShell) -> Self {
        match shell {
            ExportShell::Posix => ExportFormat::Posix,
            ExportShell::Fish => ExportFormat::Fish,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &KmsConfig) -> Result<()> {
    use Command::*;

    match command {
        Init { key_id, file } => init::execute(&key_id, &file),
        Add { file, entries } => add::execute(&file, &entries, config),
        Decrypt { shell } => decrypt::execute(shell.into(), config),
        Show { file, json } => show::execute(&file, json, config),
        Completions { shell } => completions::execute(shell),
    }
}
