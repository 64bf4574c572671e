//! Demo signer backed by SHA-256.

use gpwebpay_lib::Signer;
use sha2::{Digest, Sha256};

/// Hash-based stand-in for the gateway signer.
///
/// Real merchants sign the canonical string with the RSA key registered at
/// the gateway; the demo only needs a deterministic digest to show the flow
/// end to end. Never point output of this signer at a live gateway.
pub struct DemoSigner {
    key: String,
}

impl DemoSigner {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for DemoSigner {
    fn default() -> Self {
        Self::new("gpwebpay-demo-key")
    }
}

impl Signer for DemoSigner {
    fn sign(&self, input: &str) -> gpwebpay_lib::Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(self.key.as_bytes());
        hasher.update([0u8]);
        hasher.update(input.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_digest() {
        let signer = DemoSigner::default();
        assert_eq!(signer.sign("a|b|c").unwrap(), signer.sign("a|b|c").unwrap());
    }

    #[test]
    fn key_changes_digest() {
        let a = DemoSigner::new("first");
        let b = DemoSigner::new("second");
        assert_ne!(a.sign("a|b|c").unwrap(), b.sign("a|b|c").unwrap());
    }
}
