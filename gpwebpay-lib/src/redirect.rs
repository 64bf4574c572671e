//! Redirect-URL serialization.
//!
//! The customer reaches the gateway through a browser redirect carrying the
//! full parameter set, digest included, as a query string. This module only
//! builds strings; nothing here performs I/O.

use urlencoding::encode;

use crate::{fields, PaymentRequest, Result, WebpayError};

/// Production payment gateway endpoint.
pub const PRODUCTION_GATEWAY_URL: &str = "https://3dsecure.gpwebpay.com/pgw/order.do";

/// Test environment payment gateway endpoint.
pub const TEST_GATEWAY_URL: &str = "https://test.3dsecure.gpwebpay.com/pgw/order.do";

/// Serialize the full parameter set as a percent-encoded query string.
///
/// Pairs appear in wire order; names are fixed uppercase tokens and pass
/// through unencoded, values are percent-encoded.
pub fn request_query(request: &PaymentRequest) -> String {
    request
        .all_parameters()
        .iter()
        .map(|(name, value)| format!("{}={}", name, encode(&value.to_string())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the gateway redirect URL for a signed request.
///
/// # Errors
///
/// Returns [`WebpayError::IncompleteModel`] naming `DIGEST` when the request
/// has not been signed yet — redirecting an unsigned request is the same
/// programmer error as signing an incomplete one.
pub fn payment_url(gateway_url: &str, request: &PaymentRequest) -> Result<String> {
    if !request.is_signed() {
        return Err(WebpayError::IncompleteModel {
            missing: fields::DIGEST,
        });
    }

    let separator = if gateway_url.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}",
        gateway_url,
        separator,
        request_query(request)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Currency, DepositFlag, PaymentRequestBuilder};
    use rust_decimal_macros::dec;

    fn signed_request() -> PaymentRequest {
        let mut request = PaymentRequestBuilder::new(
            1001,
            dec!(99.90),
            Currency::Czk,
            DepositFlag::AuthorizeOnly,
            "https://merchant/return",
        )
        .build()
        .unwrap();
        request.set_merchant_number("123456789").unwrap();
        request.set_digest("abc").unwrap();
        request
    }

    #[test]
    fn query_preserves_wire_order() {
        let query = request_query(&signed_request());
        assert_eq!(
            query,
            "MERCHANTNUMBER=123456789&OPERATION=CREATE_ORDER&ORDERNUMBER=1001\
             &AMOUNT=9990&CURRENCY=203&DEPOSITFLAG=0\
             &URL=https%3A%2F%2Fmerchant%2Freturn&PAYMETHOD=CRD&DIGEST=abc"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut request = PaymentRequestBuilder::new(
            1,
            dec!(1),
            Currency::Eur,
            DepositFlag::Capture,
            "https://merchant/return?session=42",
        )
        .with_description("Objednávka č. 1")
        .build()
        .unwrap();
        request.set_merchant_number("1").unwrap();
        request.set_digest("d").unwrap();

        let query = request_query(&request);
        assert!(query.contains("URL=https%3A%2F%2Fmerchant%2Freturn%3Fsession%3D42"));
        assert!(query.contains("DESCRIPTION=Objedn%C3%A1vka%20%C4%8D.%201"));
        assert!(!query.contains(' '));
    }

    #[test]
    fn payment_url_requires_a_digest() {
        let request = PaymentRequestBuilder::new(
            1,
            dec!(1),
            Currency::Eur,
            DepositFlag::Capture,
            "https://merchant/return",
        )
        .build()
        .unwrap();

        let err = payment_url(TEST_GATEWAY_URL, &request).unwrap_err();
        assert!(matches!(
            err,
            WebpayError::IncompleteModel { missing: "DIGEST" }
        ));
    }

    #[test]
    fn payment_url_joins_with_question_mark() {
        let url = payment_url(TEST_GATEWAY_URL, &signed_request()).unwrap();
        assert!(url.starts_with("https://test.3dsecure.gpwebpay.com/pgw/order.do?MERCHANTNUMBER="));
        assert!(url.ends_with("&DIGEST=abc"));
    }

    #[test]
    fn payment_url_extends_an_existing_query() {
        let url = payment_url("https://gw.example/pay?instance=test", &signed_request()).unwrap();
        assert!(url.starts_with("https://gw.example/pay?instance=test&MERCHANTNUMBER="));
    }
}
