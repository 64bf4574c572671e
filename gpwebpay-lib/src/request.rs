//! The `CREATE_ORDER` payment request model.
//!
//! A [`PaymentRequest`] is an ordered parameter set whose field order,
//! optional-field inclusion and signed/unsigned split all follow the gateway
//! contract. Construction runs through [`PaymentRequestBuilder`], which is
//! what pins every optional field to its documented wire position no matter
//! in which order the caller supplies them.
//!
//! Once a digest is attached the request is sealed: every further mutation
//! fails with [`WebpayError::AlreadySigned`]. A field added after signing
//! could never verify, so the model refuses to represent that state.

use rust_decimal::Decimal;
use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

use crate::params::{ParamSet, ParamValue};
use crate::{amount, fields, AddInfoBlock, Currency, PayMethod, Result, WebpayError};

/// Whether the gateway should capture the payment immediately.
///
/// Carried in the `DEPOSITFLAG` field as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositFlag {
    /// Authorize only; the merchant captures later.
    AuthorizeOnly,
    /// Capture immediately.
    Capture,
}

impl DepositFlag {
    /// Parse the wire flag.
    ///
    /// # Errors
    ///
    /// Returns [`WebpayError::InvalidDepositFlag`] for anything but 0 or 1.
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(DepositFlag::AuthorizeOnly),
            1 => Ok(DepositFlag::Capture),
            other => Err(WebpayError::InvalidDepositFlag(other)),
        }
    }

    /// The wire value carried in `DEPOSITFLAG`.
    pub fn flag(self) -> u8 {
        match self {
            DepositFlag::AuthorizeOnly => 0,
            DepositFlag::Capture => 1,
        }
    }
}

impl fmt::Display for DepositFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Builder collecting the inputs of a `CREATE_ORDER` request.
///
/// Required inputs go into [`PaymentRequestBuilder::new`]; optional fields
/// are added with `with_*` methods and appear on the wire exactly when the
/// corresponding method was called. [`build`](PaymentRequestBuilder::build)
/// materializes the ordered parameter set.
///
/// # Examples
///
/// ```rust
/// use gpwebpay_lib::{Currency, DepositFlag, PaymentRequestBuilder};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = PaymentRequestBuilder::new(
///     1001,
///     Decimal::from_str("99.90").unwrap(),
///     Currency::Czk,
///     DepositFlag::AuthorizeOnly,
///     "https://merchant/return",
/// )
/// .with_description("Order #1001")
/// .build()
/// .unwrap();
///
/// assert_eq!(request.get("AMOUNT").unwrap().as_number(), Some(9990));
/// ```
#[derive(Debug, Clone)]
pub struct PaymentRequestBuilder {
    order_number: u64,
    amount: Decimal,
    currency: Currency,
    deposit_flag: DepositFlag,
    url: String,
    mer_order_number: Option<String>,
    description: Option<String>,
    merchant_data: Option<String>,
    user_param1: Option<String>,
    add_info: Option<AddInfoBlock>,
    lang: Option<String>,
    pay_method: PayMethod,
}

impl PaymentRequestBuilder {
    /// Start a request from the five required inputs.
    ///
    /// `order_number` must be unique per merchant; `amount` is the decimal
    /// order total, converted to minor units at build time.
    pub fn new(
        order_number: u64,
        amount: Decimal,
        currency: Currency,
        deposit_flag: DepositFlag,
        url: impl Into<String>,
    ) -> Self {
        Self {
            order_number,
            amount,
            currency,
            deposit_flag,
            url: url.into(),
            mer_order_number: None,
            description: None,
            merchant_data: None,
            user_param1: None,
            add_info: None,
            lang: None,
            pay_method: PayMethod::default(),
        }
    }

    /// Merchant order number shown on the bank statement (`MERORDERNUM`).
    pub fn with_mer_order_number(mut self, value: impl Into<String>) -> Self {
        self.mer_order_number = Some(value.into());
        self
    }

    /// Free-text order description (`DESCRIPTION`).
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Opaque merchant data echoed back by the gateway (`MD`).
    pub fn with_merchant_data(mut self, value: impl Into<String>) -> Self {
        self.merchant_data = Some(value.into());
        self
    }

    /// Free-form merchant parameter (`USERPARAM1`).
    pub fn with_user_param1(mut self, value: impl Into<String>) -> Self {
        self.user_param1 = Some(value.into());
        self
    }

    /// Additional-info sub-document, serialized into `ADDINFO` at build.
    pub fn with_add_info(mut self, add_info: AddInfoBlock) -> Self {
        self.add_info = Some(add_info);
        self
    }

    /// Gateway UI language (`LANG`); not covered by the digest.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Payment method (`PAYMETHOD`); defaults to card.
    pub fn with_pay_method(mut self, method: PayMethod) -> Self {
        self.pay_method = method;
        self
    }

    /// Validate the inputs and materialize the ordered parameter set.
    ///
    /// Field order is fixed here and nowhere else:
    /// `MERCHANTNUMBER`, `OPERATION`, `ORDERNUMBER`, `AMOUNT`, `CURRENCY`,
    /// `DEPOSITFLAG`, [`MERORDERNUM`], `URL`, [`DESCRIPTION`], [`MD`],
    /// [`USERPARAM1`], `PAYMETHOD`, [`ADDINFO`], [`LANG`] — bracketed fields
    /// appear only when supplied. `MERCHANTNUMBER` starts empty and is set
    /// with [`PaymentRequest::set_merchant_number`] before signing.
    ///
    /// # Errors
    ///
    /// Amount conversion errors, see [`amount::to_minor_units`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(order_number = self.order_number, currency = %self.currency))
    )]
    pub fn build(self) -> Result<PaymentRequest> {
        let amount_minor = amount::to_minor_units(self.amount, self.currency)?;

        let mut params = ParamSet::new();
        params.set(fields::MERCHANTNUMBER, "");
        params.set(fields::OPERATION, fields::OPERATION_CREATE_ORDER);
        params.set(fields::ORDERNUMBER, self.order_number);
        params.set(fields::AMOUNT, amount_minor);
        params.set(fields::CURRENCY, self.currency.numeric_code());
        params.set(fields::DEPOSITFLAG, self.deposit_flag.flag());
        if let Some(mer_order_number) = self.mer_order_number {
            params.set(fields::MERORDERNUM, mer_order_number);
        }
        params.set(fields::URL, self.url);
        if let Some(description) = self.description {
            params.set(fields::DESCRIPTION, description);
        }
        if let Some(merchant_data) = self.merchant_data {
            params.set(fields::MD, merchant_data);
        }
        if let Some(user_param1) = self.user_param1 {
            params.set(fields::USERPARAM1, user_param1);
        }
        params.set(fields::PAYMETHOD, self.pay_method.token());
        if let Some(add_info) = self.add_info {
            params.set(fields::ADDINFO, add_info.to_xml());
        }
        if let Some(lang) = self.lang {
            params.set(fields::LANG, lang);
        }

        Ok(PaymentRequest { params })
    }
}

/// A materialized `CREATE_ORDER` request.
///
/// Serializes (serde) as an ordered map in wire order, which is also what
/// [`all_parameters`](PaymentRequest::all_parameters) iterates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    params: ParamSet,
}

impl PaymentRequest {
    /// Start building a request; see [`PaymentRequestBuilder::new`].
    pub fn builder(
        order_number: u64,
        amount: Decimal,
        currency: Currency,
        deposit_flag: DepositFlag,
        url: impl Into<String>,
    ) -> PaymentRequestBuilder {
        PaymentRequestBuilder::new(order_number, amount, currency, deposit_flag, url)
    }

    /// All parameters in wire order, the transport view.
    pub fn all_parameters(&self) -> &ParamSet {
        &self.params
    }

    /// Parameters covered by the digest, in the same relative order.
    ///
    /// This is [`all_parameters`](Self::all_parameters) minus `LANG` and,
    /// once present, `DIGEST`.
    pub fn signable_parameters(&self) -> Vec<(&str, &ParamValue)> {
        self.params
            .iter()
            .filter(|(name, _)| fields::is_signed(name))
            .collect()
    }

    /// Look up a parameter by wire name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// The attached digest, if the request has been signed.
    pub fn digest(&self) -> Option<&str> {
        self.params.get(fields::DIGEST).and_then(ParamValue::as_text)
    }

    /// Returns true once a digest is attached and the request is sealed.
    pub fn is_signed(&self) -> bool {
        self.params.contains(fields::DIGEST)
    }

    /// The merchant-unique order number carried in `ORDERNUMBER`.
    ///
    /// `None` only when the field was replaced through
    /// [`set_param`](Self::set_param) with a non-numeric value.
    pub fn order_number(&self) -> Option<u64> {
        self.params
            .get(fields::ORDERNUMBER)
            .and_then(ParamValue::as_number)
    }

    /// The amount in minor units carried in `AMOUNT`.
    pub fn amount_minor(&self) -> Option<u64> {
        self.params
            .get(fields::AMOUNT)
            .and_then(ParamValue::as_number)
    }

    /// The currency carried in `CURRENCY`, when it is a supported code.
    pub fn currency(&self) -> Option<Currency> {
        let code = self
            .params
            .get(fields::CURRENCY)
            .and_then(ParamValue::as_number)?;
        let code = u16::try_from(code).ok()?;
        Currency::from_numeric(code).ok()
    }

    /// The payment method carried in `PAYMETHOD`, when it is a known token.
    pub fn payment_method(&self) -> Option<PayMethod> {
        self.params
            .get(fields::PAYMETHOD)
            .and_then(ParamValue::as_text)
            .and_then(|token| PayMethod::from_token(token).ok())
    }

    /// Set the merchant number assigned by the gateway.
    ///
    /// The field exists from construction (first position, empty), so this
    /// overwrites in place and never changes the order.
    pub fn set_merchant_number(&mut self, number: impl Into<String>) -> Result<()> {
        self.ensure_mutable()?;
        self.params.set(fields::MERCHANTNUMBER, number.into());
        Ok(())
    }

    /// Set or replace the order description.
    ///
    /// Overwrites in place when `DESCRIPTION` was supplied at build time;
    /// otherwise the field appends at the current end of the set.
    pub fn set_description(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_mutable()?;
        self.params.set(fields::DESCRIPTION, value.into());
        Ok(())
    }

    /// Set or replace the gateway UI language.
    pub fn set_lang(&mut self, lang: impl Into<String>) -> Result<()> {
        self.ensure_mutable()?;
        self.params.set(fields::LANG, lang.into());
        Ok(())
    }

    /// Set a gateway field this model does not know about.
    ///
    /// Known names overwrite in place, unknown names append at the end and
    /// are covered by the digest like any other signed field.
    ///
    /// # Errors
    ///
    /// Refuses [`fields::DIGEST`], which only [`set_digest`](Self::set_digest)
    /// may write, and fails once the request is signed.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Result<()> {
        let name = name.into();
        if name == fields::DIGEST {
            return Err(WebpayError::ReservedParam(fields::DIGEST));
        }
        self.ensure_mutable()?;
        self.params.set(name, value.into());
        Ok(())
    }

    /// Attach the digest produced by the signer and seal the request.
    ///
    /// The digest value is opaque to this crate; no format validation
    /// happens here.
    ///
    /// # Errors
    ///
    /// Fails with [`WebpayError::AlreadySigned`] when a digest is already
    /// attached.
    pub fn set_digest(&mut self, digest: impl Into<String>) -> Result<()> {
        self.ensure_mutable()?;
        self.params.set(fields::DIGEST, digest.into());
        Ok(())
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.is_signed() {
            return Err(WebpayError::AlreadySigned);
        }
        Ok(())
    }
}

impl Serialize for PaymentRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.params.serialize(serializer)
    }
}
