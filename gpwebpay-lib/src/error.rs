//! Error types for payment request building and signing.
//!
//! Failures fall into three families the caller handles differently:
//! invalid input (reject, fix the caller), an incomplete or mis-ordered
//! request model (programmer error), and failures reported by the external
//! signing backend (surface to the operator, never retried here).

use thiserror::Error;

/// Broad classification of [`WebpayError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input that can never produce a valid request.
    Validation,
    /// The request model is incomplete or was used out of order.
    Model,
    /// The external signer reported a failure.
    Signing,
}

/// Errors produced while building, mutating or signing a payment request.
#[derive(Debug, Error)]
pub enum WebpayError {
    /// Numeric or alphabetic currency code outside the gateway's table.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Payment method token the gateway does not accept.
    #[error("unknown payment method: {0}")]
    UnknownPayMethod(String),

    /// DEPOSITFLAG accepts only 0 (authorize) or 1 (capture).
    #[error("invalid deposit flag {0}, expected 0 or 1")]
    InvalidDepositFlag(u8),

    /// Order amounts are never negative.
    #[error("amount must not be negative: {0}")]
    NegativeAmount(String),

    /// The amount has digits below the currency's minor unit.
    #[error("amount {amount} has more than {exponent} decimal places")]
    AmountPrecision {
        /// Offending amount, as entered.
        amount: String,
        /// Minor unit exponent of the target currency.
        exponent: u32,
    },

    /// The converted amount exceeds the AMOUNT field's 15-digit maximum.
    #[error("amount {0} exceeds the gateway maximum")]
    AmountOverflow(String),

    /// A reserved field name was passed to a generic setter.
    #[error("parameter {0} cannot be set directly")]
    ReservedParam(&'static str),

    /// Signing or transport serialization was attempted before a required
    /// field was populated.
    #[error("request is missing required field {missing}")]
    IncompleteModel {
        /// Wire name of the missing field.
        missing: &'static str,
    },

    /// Mutation attempted after the digest was attached.
    #[error("request is already signed and can no longer be modified")]
    AlreadySigned,

    /// The external signer failed; the request was left untouched.
    #[error("signing failed: {0}")]
    Signing(String),
}

impl WebpayError {
    /// Classify this error into one of the three failure families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCurrency(_)
            | Self::UnknownPayMethod(_)
            | Self::InvalidDepositFlag(_)
            | Self::NegativeAmount(_)
            | Self::AmountPrecision { .. }
            | Self::AmountOverflow(_)
            | Self::ReservedParam(_) => ErrorKind::Validation,
            Self::IncompleteModel { .. } | Self::AlreadySigned => ErrorKind::Model,
            Self::Signing(_) => ErrorKind::Signing,
        }
    }

    /// Returns true for errors caused by invalid caller input.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Wrap an arbitrary signer backend error.
    pub fn signing<E: std::error::Error>(err: E) -> Self {
        Self::Signing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = WebpayError::UnknownCurrency("999".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.is_validation());

        let err = WebpayError::IncompleteModel {
            missing: "MERCHANTNUMBER",
        };
        assert_eq!(err.kind(), ErrorKind::Model);
        assert!(!err.is_validation());

        let err = WebpayError::Signing("key unavailable".to_string());
        assert_eq!(err.kind(), ErrorKind::Signing);
    }

    #[test]
    fn test_error_display() {
        let err = WebpayError::IncompleteModel { missing: "URL" };
        assert!(err.to_string().contains("URL"));

        let err = WebpayError::AmountPrecision {
            amount: "12.345".to_string(),
            exponent: 2,
        };
        assert!(err.to_string().contains("12.345"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_signing_wrapper() {
        let io = std::io::Error::other("hsm offline");
        let err = WebpayError::signing(io);
        assert_eq!(err.kind(), ErrorKind::Signing);
        assert!(err.to_string().contains("hsm offline"));
    }
}
