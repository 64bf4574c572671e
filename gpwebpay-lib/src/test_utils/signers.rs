//! Mock signer implementations.

use sha2::{Digest, Sha256};

use crate::{Result, Signer, WebpayError};

/// Deterministic stand-in for the merchant's signing key.
///
/// Produces a hex-encoded SHA-256 over the key and the signing string. Not a
/// gateway-valid signature, but it behaves like one where tests care: the
/// same (key, input) pair always yields the same digest, and different keys
/// or inputs yield different digests.
#[derive(Debug, Clone)]
pub struct MockSigner {
    key: String,
}

impl MockSigner {
    /// Create a mock signer with the given key label.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for MockSigner {
    fn default() -> Self {
        Self::new("test-signing-key")
    }
}

impl Signer for MockSigner {
    fn sign(&self, input: &str) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(self.key.as_bytes());
        hasher.update([0u8]);
        hasher.update(input.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Signer that always fails, for exercising error paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSigner;

impl Signer for FailingSigner {
    fn sign(&self, _input: &str) -> Result<String> {
        Err(WebpayError::Signing("mock signer set to fail".to_string()))
    }
}
