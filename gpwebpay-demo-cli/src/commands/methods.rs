//! Methods command - list supported payment method tokens

use anyhow::Result;
use gpwebpay_lib::PayMethod;

use crate::ui;

pub fn run(_verbose: bool) -> Result<()> {
    ui::header("Supported payment methods");
    for method in PayMethod::ALL {
        ui::key_value(method.token(), label(*method));
    }
    ui::info("create-order defaults to CRD when --method is omitted");

    Ok(())
}

fn label(method: PayMethod) -> &'static str {
    match method {
        PayMethod::ApplePay => "Apple Pay",
        PayMethod::Eps => "EPS bank transfer",
        PayMethod::GooglePay => "Google Pay",
        PayMethod::Klarna => "Klarna",
        PayMethod::Card => "Card payment (default)",
        PayMethod::Paysafecard => "Paysafecard",
        PayMethod::Platba24 => "Platba 24 bank button",
        PayMethod::SepaDirectDebit => "SEPA direct debit",
        PayMethod::Sofort => "Sofort bank transfer",
    }
}
