//! Test utilities for request building and signing.
//!
//! Available with the `test-utils` feature or in test builds. Provides mock
//! signers with deterministic output and ready-made request fixtures, so
//! downstream tests can exercise the full build → sign → redirect flow
//! without a real key.

mod fixtures;
mod signers;

pub use fixtures::{full_request, minimal_request, TEST_MERCHANT_NUMBER, TEST_RETURN_URL};
pub use signers::{FailingSigner, MockSigner};
