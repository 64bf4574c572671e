//! Amount normalization for the `AMOUNT` request field.
//!
//! The gateway expects amounts as an integer count of the currency's minor
//! unit (12.34 CZK is sent as `1234`). Amounts enter the API as [`Decimal`]
//! and leave as exact `u64` minor units. **NEVER use f64 for amounts:**
//! `12.34 * 100.0` is not 1234, and the gateway rejects or, worse, charges
//! whatever lands on the wire.

use rust_decimal::Decimal;

use crate::{Currency, Result, WebpayError};

/// Upper bound for the `AMOUNT` field, which allows at most 15 digits.
pub const MAX_AMOUNT_MINOR: u64 = 999_999_999_999_999;

/// Convert a decimal amount into integer minor units for the wire.
///
/// The conversion is exact: amounts with digits below the currency's minor
/// unit are rejected rather than rounded, so what the merchant displays is
/// always what the gateway charges.
///
/// # Errors
///
/// - [`WebpayError::NegativeAmount`] for amounts below zero
/// - [`WebpayError::AmountPrecision`] for amounts with sub-minor-unit digits
/// - [`WebpayError::AmountOverflow`] for amounts beyond [`MAX_AMOUNT_MINOR`]
///
/// # Examples
///
/// ```rust
/// use gpwebpay_lib::{amount::to_minor_units, Currency};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("12.34").unwrap();
/// assert_eq!(to_minor_units(amount, Currency::Czk).unwrap(), 1234);
/// ```
pub fn to_minor_units(amount: Decimal, currency: Currency) -> Result<u64> {
    if amount < Decimal::ZERO {
        return Err(WebpayError::NegativeAmount(amount.to_string()));
    }

    let exponent = currency.minor_unit_exponent();
    let factor = Decimal::from(10u64.pow(exponent));
    let scaled = amount
        .checked_mul(factor)
        .ok_or_else(|| WebpayError::AmountOverflow(amount.to_string()))?;

    if !scaled.fract().is_zero() {
        return Err(WebpayError::AmountPrecision {
            amount: amount.to_string(),
            exponent,
        });
    }

    let minor: u64 = scaled
        .trunc()
        .try_into()
        .map_err(|_| WebpayError::AmountOverflow(amount.to_string()))?;

    if minor > MAX_AMOUNT_MINOR {
        return Err(WebpayError::AmountOverflow(amount.to_string()));
    }

    Ok(minor)
}

/// Convert integer minor units back into a decimal amount, for display.
///
/// # Examples
///
/// ```rust
/// use gpwebpay_lib::{amount::from_minor_units, Currency};
///
/// assert_eq!(from_minor_units(1234, Currency::Czk).to_string(), "12.34");
/// ```
pub fn from_minor_units(minor: u64, currency: Currency) -> Decimal {
    let factor = Decimal::from(10u64.pow(currency.minor_unit_exponent()));
    Decimal::from(minor)
        .checked_div(factor)
        .unwrap_or(Decimal::ZERO)
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(to_minor_units(dec!(12.34), Currency::Czk).unwrap(), 1234);
        assert_eq!(to_minor_units(dec!(99.90), Currency::Czk).unwrap(), 9990);
        assert_eq!(to_minor_units(dec!(0), Currency::Eur).unwrap(), 0);
        assert_eq!(to_minor_units(dec!(100), Currency::Usd).unwrap(), 10000);
    }

    #[test]
    fn test_trailing_zeros_are_not_precision() {
        // Scale 3, but the value is still exactly representable in cents.
        assert_eq!(to_minor_units(dec!(12.340), Currency::Czk).unwrap(), 1234);
        assert_eq!(to_minor_units(dec!(5.00), Currency::Eur).unwrap(), 500);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = to_minor_units(dec!(-0.01), Currency::Czk).unwrap_err();
        assert!(matches!(err, WebpayError::NegativeAmount(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_sub_minor_unit_precision_rejected() {
        let err = to_minor_units(dec!(12.345), Currency::Czk).unwrap_err();
        assert!(matches!(err, WebpayError::AmountPrecision { .. }));
        assert!(err.to_string().contains("12.345"));
    }

    #[test]
    fn test_overflow_rejected() {
        // One minor unit above the 15-digit field maximum.
        let too_big = dec!(10_000_000_000_000.00);
        let err = to_minor_units(too_big, Currency::Czk).unwrap_err();
        assert!(matches!(err, WebpayError::AmountOverflow(_)));

        let at_limit = dec!(9_999_999_999_999.99);
        assert_eq!(
            to_minor_units(at_limit, Currency::Czk).unwrap(),
            MAX_AMOUNT_MINOR
        );
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(from_minor_units(1234, Currency::Czk), dec!(12.34));
        assert_eq!(from_minor_units(0, Currency::Eur), dec!(0));
        assert_eq!(from_minor_units(500, Currency::Eur), dec!(5));
    }

    #[test]
    fn test_round_trip() {
        for minor in [0u64, 1, 99, 100, 9990, 123_456_789] {
            let decimal = from_minor_units(minor, Currency::Czk);
            assert_eq!(to_minor_units(decimal, Currency::Czk).unwrap(), minor);
        }
    }
}
