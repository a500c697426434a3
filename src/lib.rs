//! kmsenv - Encrypt environment variables with a cloud KMS key.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Bind a file to a master key
//! │   ├── add           # Encrypt NAME=VALUE pairs into the file
//! │   ├── decrypt       # Print exports for SECURE: variables
//! │   ├── show          # Print a file with values decrypted
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain        # EnvFile / Entry
//!     ├── codec         # Text format (key id line + NAME=VALUE lines)
//!     ├── store         # Load / atomic save / init / upsert
//!     ├── kms           # KmsGateway trait + AWS backend
//!     ├── workflow      # init, add, decrypt, show
//!     └── shell         # export line rendering
//! ```
//!
//! # File format
//!
//! ```text
//! arn:aws:kms:us-east-1:111122223333:key/1234abcd-...
//! REGION=eu-west-1
//! DB_PASS=SECURE:AQICAHh...
//! ```
//!
//! The encrypted file is safe to commit. At runtime, export its lines and
//! run `eval "$(kmsenv decrypt)"` to replace each `SECURE:` value with its
//! plaintext.

pub mod cli;
pub mod core;
pub mod error;
