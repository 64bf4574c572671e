//! GP webpay Demo CLI
//!
//! Command-line interface for building and signing `CREATE_ORDER` requests
//! without touching a real merchant account.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod signer;
mod ui;

#[derive(Parser)]
#[command(name = "gpwebpay-demo")]
#[command(about = "GP webpay Demo CLI - Build and sign CREATE_ORDER requests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, sign and print a CREATE_ORDER request
    CreateOrder {
        /// Decimal order amount, e.g. 99.90
        amount: String,

        /// Currency, alphabetic or numeric (CZK, EUR, 203, ...)
        #[arg(short, long, default_value = "CZK")]
        currency: String,

        /// Order number; derived from the current time when omitted
        #[arg(short, long)]
        order_number: Option<u64>,

        /// Merchant number assigned by the gateway
        #[arg(short, long, default_value = "123456789")]
        merchant_number: String,

        /// Return URL the gateway redirects back to
        #[arg(short, long, default_value = "https://merchant.example/return")]
        url: String,

        /// Deposit flag: 0 authorize-only, 1 capture immediately
        #[arg(long, default_value = "0")]
        deposit_flag: u8,

        /// Merchant order number shown on the bank statement
        #[arg(long)]
        mer_order_number: Option<String>,

        /// Order description
        #[arg(short, long)]
        description: Option<String>,

        /// Opaque merchant data echoed back by the gateway
        #[arg(long)]
        md: Option<String>,

        /// Free-form merchant parameter
        #[arg(long)]
        user_param: Option<String>,

        /// Payment method token (CRD, GPAY, APAY, ...)
        #[arg(long)]
        method: Option<String>,

        /// Gateway UI language, e.g. CS or EN
        #[arg(short, long)]
        lang: Option<String>,

        /// Additional-info item as name=value (repeatable)
        #[arg(long = "add-info", value_name = "NAME=VALUE")]
        add_info: Vec<String>,

        /// Print the request as JSON instead of the readable report
        #[arg(long)]
        json: bool,
    },

    /// List supported currencies
    Currencies,

    /// List supported payment method tokens
    Methods,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gpwebpay_demo_cli=debug,gpwebpay_lib=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("gpwebpay_demo_cli=info,gpwebpay_lib=warn")
            .init();
    }

    // Dispatch commands
    match cli.command {
        Commands::CreateOrder {
            amount,
            currency,
            order_number,
            merchant_number,
            url,
            deposit_flag,
            mer_order_number,
            description,
            md,
            user_param,
            method,
            lang,
            add_info,
            json,
        } => {
            commands::create_order::run(
                commands::create_order::CreateOrderArgs {
                    amount,
                    currency,
                    order_number,
                    merchant_number,
                    url,
                    deposit_flag,
                    mer_order_number,
                    description,
                    md,
                    user_param,
                    method,
                    lang,
                    add_info,
                    json,
                },
                cli.verbose,
            )?;
        }
        Commands::Currencies => {
            commands::currencies::run(cli.verbose)?;
        }
        Commands::Methods => {
            commands::methods::run(cli.verbose)?;
        }
    }

    Ok(())
}
