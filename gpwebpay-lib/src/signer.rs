//! External signing seam.

use crate::Result;

/// Produces the `DIGEST` value for a payment request.
///
/// Implementations hold the merchant's signing key; the request model never
/// touches key material. For a given key, `sign` must be deterministic in
/// its input and return the digest in the encoding the gateway expects
/// (typically base64 of an RSA signature).
///
/// Failures surface as [`crate::WebpayError::Signing`]. This crate never
/// retries a failed signing call and never mutates the request on failure;
/// recovery policy belongs to the caller.
pub trait Signer {
    /// Sign the canonical signing string.
    fn sign(&self, input: &str) -> Result<String>;
}
