//! Currencies command - list supported currency codes

use anyhow::Result;
use gpwebpay_lib::Currency;

use crate::ui;

pub fn run(_verbose: bool) -> Result<()> {
    ui::header("Supported currencies");
    for currency in Currency::ALL {
        ui::key_value(
            currency.alpha_code(),
            &format!("numeric {}", currency.numeric_code()),
        );
    }
    ui::info("Pass either form to create-order, e.g. --currency EUR or --currency 978");

    Ok(())
}
