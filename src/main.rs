//! kmsenv - Encrypt environment variables with a cloud KMS key.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kmsenv::cli::output;
use kmsenv::cli::{execute, Cli};
use kmsenv::core::constants::LOG_ENV;
use kmsenv::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kmsenv=debug")
        } else {
            EnvFilter::new("kmsenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let config = cli.kms_config();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = execute(command, &config) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Store(StoreError::NotInitialized(_)) | Error::Store(StoreError::NotFound(_)) => {
                Some("run: kmsenv init <KEY_ID> <FILE>")
            }
            Error::Store(StoreError::Format { .. }) => {
                Some("the file may have been edited by hand; check the reported line")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
