//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A KMS master key identifier: key id, key ARN, alias name, or alias ARN.
pub type KeyId = String;

/// An entry name (e.g., DB_PASS). Unique within one env file.
pub type EntryName = String;

/// Raw ciphertext bytes as returned by the key-management service.
pub type Ciphertext = Vec<u8>;
