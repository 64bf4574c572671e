//! Create-order command - build, sign and print a CREATE_ORDER request

use anyhow::{anyhow, Context, Result};
use gpwebpay_lib::prelude::*;
use rust_decimal::Decimal;

use crate::signer::DemoSigner;
use crate::ui;

pub struct CreateOrderArgs {
    pub amount: String,
    pub currency: String,
    pub order_number: Option<u64>,
    pub merchant_number: String,
    pub url: String,
    pub deposit_flag: u8,
    pub mer_order_number: Option<String>,
    pub description: Option<String>,
    pub md: Option<String>,
    pub user_param: Option<String>,
    pub method: Option<String>,
    pub lang: Option<String>,
    pub add_info: Vec<String>,
    pub json: bool,
}

pub fn run(args: CreateOrderArgs, _verbose: bool) -> Result<()> {
    let amount: Decimal = args
        .amount
        .parse()
        .with_context(|| format!("invalid amount '{}'", args.amount))?;
    let currency: Currency = args.currency.parse()?;
    let deposit_flag = DepositFlag::from_flag(args.deposit_flag)?;
    let order_number = args.order_number.unwrap_or_else(generated_order_number);
    tracing::debug!(order_number, %currency, "building demo request");

    let mut builder =
        PaymentRequest::builder(order_number, amount, currency, deposit_flag, args.url);
    if let Some(value) = args.mer_order_number {
        builder = builder.with_mer_order_number(value);
    }
    if let Some(value) = args.description {
        builder = builder.with_description(value);
    }
    if let Some(value) = args.md {
        builder = builder.with_merchant_data(value);
    }
    if let Some(value) = args.user_param {
        builder = builder.with_user_param1(value);
    }
    if let Some(token) = &args.method {
        builder = builder.with_pay_method(token.parse()?);
    }
    if !args.add_info.is_empty() {
        let mut block = AddInfoBlock::default();
        for item in &args.add_info {
            let (name, value) = split_item(item)?;
            block.add_item(name, value);
        }
        builder = builder.with_add_info(block);
    }
    if let Some(lang) = args.lang {
        builder = builder.with_lang(lang);
    }

    let mut request = builder.build()?;
    request.set_merchant_number(args.merchant_number)?;

    // Captured before signing; afterwards the request is sealed.
    let signing_input = signing_string(&request)?;
    sign_request(&mut request, &DemoSigner::default())?;

    if args.json {
        ui::json(&serde_json::to_value(&request)?);
        return Ok(());
    }

    ui::header("CREATE_ORDER request");
    for (name, value) in request.all_parameters().iter() {
        ui::key_value(name, &value.to_string());
    }

    ui::separator();
    ui::key_value("Signing input", &signing_input);
    ui::key_value("Digest", request.digest().unwrap_or_default());
    ui::info("The digest is a SHA-256 stand-in for the gateway's RSA signature");

    ui::separator();
    ui::key_value("Redirect URL", &payment_url(TEST_GATEWAY_URL, &request)?);
    ui::success("Request built and signed");

    Ok(())
}

/// Millisecond timestamp, unique enough for a demo and well within the
/// gateway's 15-digit ORDERNUMBER limit.
fn generated_order_number() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

fn split_item(item: &str) -> Result<(&str, &str)> {
    item.split_once('=')
        .ok_or_else(|| anyhow!("add-info item '{}' is not NAME=VALUE", item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_item_accepts_name_value() {
        assert_eq!(split_item("email=a@b.cz").unwrap(), ("email", "a@b.cz"));
        // Only the first '=' splits.
        assert_eq!(split_item("query=a=b").unwrap(), ("query", "a=b"));
    }

    #[test]
    fn split_item_rejects_bare_names() {
        assert!(split_item("email").is_err());
    }

    #[test]
    fn generated_order_numbers_fit_the_gateway() {
        let n = generated_order_number();
        assert!(n > 0);
        assert!(n < 1_000_000_000_000_000);
    }
}
