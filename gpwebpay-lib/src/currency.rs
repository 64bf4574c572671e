//! Currencies accepted by the GP webpay gateway.
//!
//! The gateway identifies currencies by their ISO 4217 numeric code and only
//! accepts the codes listed here. [`Currency`] keeps the numeric and
//! alphabetic forms together so callers never pass raw integers around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, WebpayError};

/// ISO 4217 currency supported by the gateway.
///
/// The discriminant is the ISO 4217 numeric code, which is also the exact
/// value serialized into the `CURRENCY` request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Currency {
    /// Czech koruna.
    #[serde(rename = "CZK")]
    Czk = 203,
    /// Hungarian forint.
    #[serde(rename = "HUF")]
    Huf = 348,
    /// Russian ruble.
    #[serde(rename = "RUB")]
    Rub = 643,
    /// Pound sterling.
    #[serde(rename = "GBP")]
    Gbp = 826,
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd = 840,
    /// Euro.
    #[serde(rename = "EUR")]
    Eur = 978,
    /// Polish zloty.
    #[serde(rename = "PLN")]
    Pln = 985,
}

impl Currency {
    /// Every currency the gateway accepts, in numeric-code order.
    pub const ALL: &'static [Currency] = &[
        Currency::Czk,
        Currency::Huf,
        Currency::Rub,
        Currency::Gbp,
        Currency::Usd,
        Currency::Eur,
        Currency::Pln,
    ];

    /// Look up a currency by its ISO 4217 numeric code.
    ///
    /// # Errors
    ///
    /// Returns [`WebpayError::UnknownCurrency`] for codes outside the
    /// gateway's table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gpwebpay_lib::Currency;
    /// assert_eq!(Currency::from_numeric(203).unwrap(), Currency::Czk);
    /// assert!(Currency::from_numeric(999).is_err());
    /// ```
    pub fn from_numeric(code: u16) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.numeric_code() == code)
            .ok_or_else(|| WebpayError::UnknownCurrency(code.to_string()))
    }

    /// Look up a currency by its ISO 4217 alphabetic code.
    ///
    /// Matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`WebpayError::UnknownCurrency`] for codes outside the
    /// gateway's table.
    pub fn from_alpha(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.alpha_code().eq_ignore_ascii_case(code))
            .ok_or_else(|| WebpayError::UnknownCurrency(code.to_string()))
    }

    /// ISO 4217 numeric code, the value the `CURRENCY` field carries.
    pub fn numeric_code(self) -> u16 {
        self as u16
    }

    /// ISO 4217 alphabetic code.
    pub fn alpha_code(self) -> &'static str {
        match self {
            Currency::Czk => "CZK",
            Currency::Huf => "HUF",
            Currency::Rub => "RUB",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Pln => "PLN",
        }
    }

    /// Number of decimal places in the currency's minor unit.
    ///
    /// Every currency in the gateway's table uses two decimal places, so this
    /// currently always returns 2. Adding a zero- or three-decimal currency
    /// requires revisiting the conversion logic in [`crate::amount`].
    pub fn minor_unit_exponent(self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha_code())
    }
}

impl FromStr for Currency {
    type Err = WebpayError;

    /// Parses either the alphabetic ("CZK") or numeric ("203") code.
    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<u16>() {
            Ok(code) => Self::from_numeric(code),
            Err(_) => Self::from_alpha(s),
        }
    }
}
