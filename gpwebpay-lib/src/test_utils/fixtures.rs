//! Ready-made request fixtures.

use rust_decimal::Decimal;

use crate::{AddInfoBlock, Currency, DepositFlag, PayMethod, PaymentRequest, PaymentRequestBuilder};

/// Merchant number used by all fixtures.
pub const TEST_MERCHANT_NUMBER: &str = "123456789";

/// Return URL used by all fixtures.
pub const TEST_RETURN_URL: &str = "https://merchant.example/return";

/// A request with only the required fields, merchant number already set.
///
/// Order 1001 over 99.90 CZK, authorize-only.
pub fn minimal_request() -> PaymentRequest {
    let mut request = PaymentRequestBuilder::new(
        1001,
        Decimal::new(9990, 2),
        Currency::Czk,
        DepositFlag::AuthorizeOnly,
        TEST_RETURN_URL,
    )
    .build()
    .expect("fixture inputs are valid");
    request
        .set_merchant_number(TEST_MERCHANT_NUMBER)
        .expect("fixture request is unsigned");
    request
}

/// A request exercising every optional field, merchant number already set.
pub fn full_request() -> PaymentRequest {
    let mut request = PaymentRequestBuilder::new(
        2002,
        Decimal::new(125000, 2),
        Currency::Eur,
        DepositFlag::Capture,
        TEST_RETURN_URL,
    )
    .with_mer_order_number("INV-2024-0042")
    .with_description("Order #2002")
    .with_merchant_data("session=42")
    .with_user_param1("affiliate-7")
    .with_add_info(
        AddInfoBlock::default()
            .with_item("cardholderName", "Jan Novak")
            .with_item("email", "jan.novak@example.com"),
    )
    .with_lang("CS")
    .with_pay_method(PayMethod::Card)
    .build()
    .expect("fixture inputs are valid");
    request
        .set_merchant_number(TEST_MERCHANT_NUMBER)
        .expect("fixture request is unsigned");
    request
}
