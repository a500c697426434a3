//! Key-management gateway.
//!
//! The rest of the crate talks to KMS only through [`KmsGateway`]. Each value
//! is sent to the service individually; no local data keys are involved.
//!
//! ## Backends
//!
//! - **AWS KMS**: Feature-gated (`aws`, on by default).
//! - **Mock**: Feature-gated (`test-kms`), reversible and NOT secure. Used by
//!   the CLI integration tests.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::KmsConfig;
use crate::error::Result;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(any(test, feature = "test-kms"))]
mod mock;

#[cfg(any(test, feature = "test-kms"))]
pub use mock::{MockKms, MOCK_FAIL};

/// Encrypt/decrypt operations provided by a key-management service.
///
/// Implemented by real providers (AWS) and mocks for testing.
pub trait KmsGateway: std::fmt::Debug {
    /// Encrypt `plaintext` under the master key `key_id`.
    ///
    /// # Errors
    ///
    /// Returns `KmsError::EncryptionFailed` on any service failure.
    fn encrypt(&self, key_id: &str, plaintext: &str) -> Result<Vec<u8>>;

    /// Decrypt ciphertext produced by [`KmsGateway::encrypt`].
    ///
    /// The key is identified by the ciphertext itself.
    ///
    /// # Errors
    ///
    /// Returns `KmsError::DecryptionFailed` on any service failure, including
    /// a wrong key or corrupted ciphertext.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<String>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Create the gateway for this build.
///
/// Test builds with `test-kms` always get the mock.
#[cfg(feature = "test-kms")]
pub fn connect(_config: &KmsConfig) -> Result<Box<dyn KmsGateway>> {
    debug!("using mock KMS gateway");
    Ok(Box::new(MockKms))
}

/// Create the gateway for this build.
#[cfg(all(not(feature = "test-kms"), feature = "aws"))]
pub fn connect(config: &KmsConfig) -> Result<Box<dyn KmsGateway>> {
    debug!(
        profile = ?config.profile,
        region = ?config.region,
        endpoint = ?config.endpoint_url,
        "connecting to AWS KMS"
    );
    Ok(Box::new(aws::AwsKms::connect(config)?))
}

/// Create the gateway for this build.
#[cfg(all(not(feature = "test-kms"), not(feature = "aws")))]
pub fn connect(_config: &KmsConfig) -> Result<Box<dyn KmsGateway>> {
    debug!("no KMS backend compiled in");
    Err(crate::error::KmsError::encrypt(
        "KMS support not compiled. Rebuild with: cargo install kmsenv --features aws",
    )
    .into())
}
