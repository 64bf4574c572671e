//! Payment method tokens for the `PAYMETHOD` request field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, WebpayError};

/// Payment method accepted by the gateway.
///
/// Serialized into the `PAYMETHOD` field as the gateway's fixed uppercase
/// token. Card payment is the default when the caller does not choose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayMethod {
    /// Apple Pay.
    #[serde(rename = "APAY")]
    ApplePay,
    /// EPS bank transfer (Austria).
    #[serde(rename = "EPS")]
    Eps,
    /// Google Pay.
    #[serde(rename = "GPAY")]
    GooglePay,
    /// Klarna invoice payment.
    #[serde(rename = "KLARNA")]
    Klarna,
    /// Payment card.
    #[default]
    #[serde(rename = "CRD")]
    Card,
    /// Paysafecard prepaid voucher.
    #[serde(rename = "PAYSAFECARD")]
    Paysafecard,
    /// Platba 24 bank button (Czech Republic).
    #[serde(rename = "BTNCS")]
    Platba24,
    /// SEPA direct debit.
    #[serde(rename = "SEPADIRECTDEBIT")]
    SepaDirectDebit,
    /// Sofort bank transfer.
    #[serde(rename = "SOFORT")]
    Sofort,
}

impl PayMethod {
    /// Every payment method the gateway accepts.
    pub const ALL: &'static [PayMethod] = &[
        PayMethod::ApplePay,
        PayMethod::Eps,
        PayMethod::GooglePay,
        PayMethod::Klarna,
        PayMethod::Card,
        PayMethod::Paysafecard,
        PayMethod::Platba24,
        PayMethod::SepaDirectDebit,
        PayMethod::Sofort,
    ];

    /// Look up a payment method by its wire token.
    ///
    /// Matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`WebpayError::UnknownPayMethod`] for tokens outside the
    /// gateway's table.
    pub fn from_token(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| WebpayError::UnknownPayMethod(token.to_string()))
    }

    /// The fixed uppercase token carried in the `PAYMETHOD` field.
    pub fn token(self) -> &'static str {
        match self {
            PayMethod::ApplePay => "APAY",
            PayMethod::Eps => "EPS",
            PayMethod::GooglePay => "GPAY",
            PayMethod::Klarna => "KLARNA",
            PayMethod::Card => "CRD",
            PayMethod::Paysafecard => "PAYSAFECARD",
            PayMethod::Platba24 => "BTNCS",
            PayMethod::SepaDirectDebit => "SEPADIRECTDEBIT",
            PayMethod::Sofort => "SOFORT",
        }
    }
}

impl fmt::Display for PayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PayMethod {
    type Err = WebpayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}
