//! Canonical signing string assembly.
//!
//! The gateway verifies a request by recomputing the signature over the
//! values of the signable fields, concatenated in wire order with a fixed
//! separator. Assembly is pure: the same request always yields the same
//! string, byte for byte, and nothing here talks to a signer backend except
//! [`sign_request`], which only feeds the result through the [`Signer`]
//! seam.

use crate::params::ParamValue;
use crate::{fields, PaymentRequest, Result, Signer, WebpayError};

/// Separator between field values in the signing string.
pub const DIGEST_SEPARATOR: &str = "|";

/// Assemble the canonical signing string for a request.
///
/// The string is the wire rendering of every signable parameter (all fields
/// except `LANG` and `DIGEST`), in insertion order, joined by
/// [`DIGEST_SEPARATOR`].
///
/// # Errors
///
/// Returns [`WebpayError::IncompleteModel`] when a required field is absent
/// or `MERCHANTNUMBER` is still the empty placeholder — signing an
/// incomplete request would produce a digest the gateway can never accept.
///
/// # Examples
///
/// ```rust
/// use gpwebpay_lib::{digest, Currency, DepositFlag, PaymentRequestBuilder};
/// use rust_decimal_macros::dec;
///
/// let mut request = PaymentRequestBuilder::new(
///     1001,
///     dec!(99.90),
///     Currency::Czk,
///     DepositFlag::AuthorizeOnly,
///     "https://merchant/return",
/// )
/// .build()
/// .unwrap();
/// request.set_merchant_number("123456789").unwrap();
///
/// assert_eq!(
///     digest::signing_string(&request).unwrap(),
///     "123456789|CREATE_ORDER|1001|9990|203|0|https://merchant/return|CRD"
/// );
/// ```
pub fn signing_string(request: &PaymentRequest) -> Result<String> {
    for &name in fields::REQUIRED {
        if request.get(name).is_none() {
            return Err(WebpayError::IncompleteModel { missing: name });
        }
    }
    if let Some(ParamValue::Text(number)) = request.get(fields::MERCHANTNUMBER) {
        if number.is_empty() {
            return Err(WebpayError::IncompleteModel {
                missing: fields::MERCHANTNUMBER,
            });
        }
    }

    let values: Vec<String> = request
        .signable_parameters()
        .into_iter()
        .map(|(_, value)| value.to_string())
        .collect();
    Ok(values.join(DIGEST_SEPARATOR))
}

/// Sign a request and attach the resulting digest.
///
/// Assembles the signing string, hands it to the signer, and stores the
/// returned digest, sealing the request. On any failure — incomplete model,
/// signer error — the request is left exactly as it was; this function
/// never retries.
///
/// # Errors
///
/// - [`WebpayError::AlreadySigned`] when the request already has a digest;
///   the signer is not invoked in that case
/// - [`WebpayError::IncompleteModel`] from [`signing_string`]
/// - [`WebpayError::Signing`] as surfaced by the signer
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(request, signer), fields(params = request.all_parameters().len()))
)]
pub fn sign_request(request: &mut PaymentRequest, signer: &dyn Signer) -> Result<()> {
    if request.is_signed() {
        return Err(WebpayError::AlreadySigned);
    }
    let input = signing_string(request)?;
    let digest = signer.sign(&input)?;
    request.set_digest(digest)
}
