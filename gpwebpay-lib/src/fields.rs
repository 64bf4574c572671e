//! Wire field names for the `CREATE_ORDER` request.
//!
//! The gateway matches field names byte-for-byte, so every name lives here
//! as a constant and the rest of the crate never spells one inline. The
//! digest covers field **values** in insertion order; [`is_signed`] is the
//! single place that knows which fields stay out of the signature.

/// Merchant identifier assigned by the gateway.
pub const MERCHANTNUMBER: &str = "MERCHANTNUMBER";

/// Requested operation; always [`OPERATION_CREATE_ORDER`] for this crate.
pub const OPERATION: &str = "OPERATION";

/// Merchant-unique numeric order identifier.
pub const ORDERNUMBER: &str = "ORDERNUMBER";

/// Order amount in minor units of [`CURRENCY`].
pub const AMOUNT: &str = "AMOUNT";

/// ISO 4217 numeric currency code.
pub const CURRENCY: &str = "CURRENCY";

/// 0 = authorize only, 1 = capture immediately.
pub const DEPOSITFLAG: &str = "DEPOSITFLAG";

/// Merchant-side order number shown on the bank statement.
pub const MERORDERNUM: &str = "MERORDERNUM";

/// Merchant return URL; the gateway redirects the customer here.
pub const URL: &str = "URL";

/// Free-text order description.
pub const DESCRIPTION: &str = "DESCRIPTION";

/// Opaque merchant data echoed back in the gateway response.
pub const MD: &str = "MD";

/// Free-form merchant parameter.
pub const USERPARAM1: &str = "USERPARAM1";

/// Payment method token, see [`crate::PayMethod`].
pub const PAYMETHOD: &str = "PAYMETHOD";

/// Additional-info XML sub-document.
pub const ADDINFO: &str = "ADDINFO";

/// Signature over the signable field values.
pub const DIGEST: &str = "DIGEST";

/// Gateway UI language; never part of the signature.
pub const LANG: &str = "LANG";

/// The only operation this crate issues.
pub const OPERATION_CREATE_ORDER: &str = "CREATE_ORDER";

/// Fields every request must carry, in their fixed wire order.
///
/// Optional fields interleave at documented positions (`MERORDERNUM` before
/// `URL`; `DESCRIPTION`, `MD`, `USERPARAM1` between `URL` and `PAYMETHOD`;
/// `ADDINFO` and `LANG` after `PAYMETHOD`).
pub const REQUIRED: &[&str] = &[
    MERCHANTNUMBER,
    OPERATION,
    ORDERNUMBER,
    AMOUNT,
    CURRENCY,
    DEPOSITFLAG,
    URL,
    PAYMETHOD,
];

/// Returns true when the named field's value is covered by the digest.
pub fn is_signed(name: &str) -> bool {
    name != LANG && name != DIGEST
}
