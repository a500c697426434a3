//! Constants used throughout kmsenv.
//!
//! Centralizes magic strings and configuration values.

/// Marker prefix for encrypted values, followed by base64 ciphertext.
pub const SECURE_PREFIX: &str = "SECURE:";

/// Suffix appended to the target path while a save is in flight.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "KMSENV_LOG";

/// Environment variable overriding the KMS endpoint (e.g. localstack).
pub const ENDPOINT_ENV: &str = "KMSENV_ENDPOINT_URL";
