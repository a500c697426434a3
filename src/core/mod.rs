//! Core library components.
//!
//! File format, storage, KMS access and the operations built on them.
//! Nothing here prints; the CLI layer owns all terminal output.

pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod kms;
pub mod shell;
pub mod store;
pub mod types;
pub mod validation;
pub mod workflow;
