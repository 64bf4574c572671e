//! GP webpay payment-initiation requests.
//!
//! This crate builds and signs outbound `CREATE_ORDER` requests for the GP
//! webpay card-payment gateway. The gateway verifies every message by
//! recomputing a signature over a fixed, ordered concatenation of field
//! values, so field order, optional-field inclusion and the signed/unsigned
//! split are all part of the wire contract — the request model treats them
//! as invariants, not conventions.
//!
//! The crate is a pure model: amounts in, ordered parameters and signing
//! strings out. The actual signature is produced behind the [`Signer`]
//! trait by whoever holds the merchant key, and nothing here performs I/O.
//!
//! # Features
//!
//! - **tracing**: instrument the build and signing entry points
//! - **test-utils**: mock signers and request fixtures for downstream tests
//!
//! # Example
//!
//! ```rust
//! use gpwebpay_lib::{digest, redirect, Currency, DepositFlag, PaymentRequestBuilder, Signer};
//! use rust_decimal_macros::dec;
//!
//! struct StubSigner;
//!
//! impl Signer for StubSigner {
//!     fn sign(&self, input: &str) -> gpwebpay_lib::Result<String> {
//!         // A real implementation signs with the merchant's RSA key.
//!         Ok(format!("stub-digest-{}", input.len()))
//!     }
//! }
//!
//! let mut request = PaymentRequestBuilder::new(
//!     1001,
//!     dec!(99.90),
//!     Currency::Czk,
//!     DepositFlag::AuthorizeOnly,
//!     "https://merchant.example/return",
//! )
//! .with_description("Order #1001")
//! .build()?;
//!
//! request.set_merchant_number("123456789")?;
//! digest::sign_request(&mut request, &StubSigner)?;
//!
//! let url = redirect::payment_url(redirect::TEST_GATEWAY_URL, &request)?;
//! assert!(url.contains("DIGEST=stub-digest-"));
//! # Ok::<(), gpwebpay_lib::WebpayError>(())
//! ```

pub mod addinfo;
pub mod amount;
pub mod currency;
pub mod digest;
pub mod error;
pub mod fields;
pub mod params;
pub mod paymethod;
pub mod prelude;
pub mod redirect;
pub mod request;
pub mod signer;

/// Test utilities for request building and signing.
///
/// This module is only available with the `test-utils` feature or in test
/// builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use addinfo::AddInfoBlock;
pub use currency::Currency;
pub use error::{ErrorKind, WebpayError};
pub use params::{ParamSet, ParamValue};
pub use paymethod::PayMethod;
pub use request::{DepositFlag, PaymentRequest, PaymentRequestBuilder};
pub use signer::Signer;

/// Common result alias for request building and signing.
pub type Result<T> = std::result::Result<T, WebpayError>;
