//! Prelude module for convenient imports.
//!
//! Re-exports the types and functions most request flows touch. Import
//! everything with:
//!
//! ```rust,ignore
//! use gpwebpay_lib::prelude::*;
//! ```

// Request model
pub use crate::params::{ParamSet, ParamValue};
pub use crate::{DepositFlag, PaymentRequest, PaymentRequestBuilder};

// Gateway enumerations
pub use crate::{Currency, PayMethod};

// Error handling
pub use crate::{ErrorKind, Result, WebpayError};

// Digest assembly and the signer seam
pub use crate::digest::{sign_request, signing_string, DIGEST_SEPARATOR};
pub use crate::Signer;

// Amount normalization
pub use crate::amount::{from_minor_units, to_minor_units, MAX_AMOUNT_MINOR};

// Additional-info sub-document
pub use crate::AddInfoBlock;

// Redirect serialization
pub use crate::redirect::{payment_url, request_query, PRODUCTION_GATEWAY_URL, TEST_GATEWAY_URL};

// Wire field names
pub use crate::fields;
