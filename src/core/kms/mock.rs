//! Mock KMS gateway.
//!
//! Uses simple hex encoding with a prefix. NOT cryptographically secure,
//! it only validates the plumbing without network access.

use zeroize::Zeroizing;

use super::KmsGateway;
use crate::error::{KmsError, Result};

/// Plaintext the mock refuses to encrypt, for exercising failure paths.
pub const MOCK_FAIL: &str = "mock-kms-fail";

const PREFIX: &str = "mock-kms:";

/// Reversible stand-in for a real key-management service.
///
/// Ciphertext is `mock-kms:<key id>:<hex plaintext>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockKms;

impl KmsGateway for MockKms {
    fn encrypt(&self, key_id: &str, plaintext: &str) -> Result<Vec<u8>> {
        if plaintext == MOCK_FAIL {
            return Err(KmsError::encrypt("mock KMS rejected the request").into());
        }
        let hex: String = plaintext.bytes().map(|b| format!("{:02x}", b)).collect();
        Ok(format!("{}{}:{}", PREFIX, key_id, hex).into_bytes())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<String>> {
        let text = std::str::from_utf8(ciphertext)
            .map_err(|_| KmsError::decrypt("not a mock-kms ciphertext"))?;
        let (_key_id, hex) = text
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.rsplit_once(':'))
            .ok_or_else(|| KmsError::decrypt("not a mock-kms ciphertext"))?;
        if hex.len() % 2 != 0 {
            return Err(KmsError::decrypt("invalid hex: odd length").into());
        }

        let bytes: std::result::Result<Vec<u8>, _> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect();
        let bytes = bytes.map_err(|e| KmsError::decrypt(format!("invalid hex: {}", e)))?;
        let plaintext = String::from_utf8(bytes)
            .map_err(|e| KmsError::decrypt(format!("invalid utf8: {}", e)))?;

        Ok(Zeroizing::new(plaintext))
    }

    fn name(&self) -> &'static str {
        "mock-kms"
    }
}
