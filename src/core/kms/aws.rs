//! AWS KMS gateway.
//!
//! Encrypts each value directly with a KMS customer master key.
//! Enable with `--features aws` (on by default).
//!
//! Credentials come from the default provider chain (`AWS_ACCESS_KEY_ID`,
//! shared config files, instance roles), narrowed by the optional profile,
//! region and endpoint in [`KmsConfig`].

use aws_sdk_kms::config::Region;
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use tracing::trace;
use zeroize::Zeroizing;

use super::KmsGateway;
use crate::core::config::KmsConfig;
use crate::error::{KmsError, Result};

/// AWS KMS gateway
///
/// Owns a current-thread runtime to drive the async SDK, so callers stay
/// synchronous. KMS embeds the key reference in the ciphertext blob, so
/// decryption does not need the key id.
#[derive(Debug)]
pub struct AwsKms {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_kms::Client,
}

impl AwsKms {
    /// Resolve SDK configuration and build a client.
    ///
    /// No request is sent until the first encrypt/decrypt call.
    ///
    /// # Errors
    ///
    /// Returns `KmsError::EncryptionFailed` if the async runtime cannot be created.
    pub fn connect(config: &KmsConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| KmsError::encrypt(format!("failed to create runtime: {}", e)))?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = runtime.block_on(loader.load());
        let client = aws_sdk_kms::Client::new(&sdk_config);

        Ok(Self { runtime, client })
    }
}

impl KmsGateway for AwsKms {
    fn encrypt(&self, key_id: &str, plaintext: &str) -> Result<Vec<u8>> {
        trace!(
            key_id = %key_id,
            plaintext_len = plaintext.len(),
            "encrypting with AWS KMS"
        );

        let output = self
            .runtime
            .block_on(
                self.client
                    .encrypt()
                    .key_id(key_id)
                    .plaintext(Blob::new(plaintext.as_bytes()))
                    .send(),
            )
            .map_err(|e| KmsError::encrypt(DisplayErrorContext(&e).to_string()))?;

        let blob = output
            .ciphertext_blob()
            .ok_or_else(|| KmsError::encrypt("no ciphertext returned"))?;

        trace!(ciphertext_len = blob.as_ref().len(), "encrypted with AWS KMS");
        Ok(blob.as_ref().to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<String>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with AWS KMS");

        let output = self
            .runtime
            .block_on(
                self.client
                    .decrypt()
                    .ciphertext_blob(Blob::new(ciphertext))
                    .send(),
            )
            .map_err(|e| KmsError::decrypt(DisplayErrorContext(&e).to_string()))?;

        let blob = output
            .plaintext()
            .ok_or_else(|| KmsError::decrypt("no plaintext returned"))?;
        let plaintext = String::from_utf8(blob.as_ref().to_vec())
            .map_err(|e| KmsError::decrypt(format!("UTF-8 error: {}", e)))?;

        trace!(plaintext_len = plaintext.len(), "decrypted with AWS KMS");
        Ok(Zeroizing::new(plaintext))
    }

    fn name(&self) -> &'static str {
        "aws-kms"
    }
}
