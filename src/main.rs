//! Ledger Engine - Main Entry Point
//!
//! Demo driver: opens an account from configuration, runs a short
//! deposit/withdraw session with discount pricing, and reports the
//! final statement through the console sinks.

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ledger_engine::{
    config, ConsoleNotificationSink, ConsoleStatementSink, DiscountKind, Ledger,
    NotificationService, StatementReporter, StrategyRegistry,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Override the configured account identifier
    #[arg(long)]
    account: Option<String>,

    /// Override the configured opening balance
    #[arg(long)]
    opening_balance: Option<Decimal>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("starting ledger engine");
    info!("configuration file: {}", args.config);

    let mut config = config::load_config(Some(&args.config))?;
    if let Some(account_id) = args.account {
        config.account.account_id = account_id;
    }
    if let Some(opening_balance) = args.opening_balance {
        config.account.opening_balance = opening_balance;
    }
    if config.discounts.is_empty() {
        config.discounts = vec![DiscountKind::Seasonal, DiscountKind::Loyalty];
    }

    let mut ledger = Ledger::open(
        config.account.account_id.as_str(),
        config.account.opening_balance,
    )?;
    info!(
        account_id = %ledger.account_id(),
        balance = %ledger.balance(),
        "account opened"
    );

    let mut notifications = NotificationService::new(Box::new(ConsoleNotificationSink));
    let mut reporter = StatementReporter::new(Box::new(ConsoleStatementSink));

    // Short demo session: two valid mutations, one recoverable failure.
    for (label, result) in [
        ("deposit 100", ledger.deposit(dec!(100.0))),
        ("withdraw 500", ledger.withdraw(dec!(500.0))),
        ("withdraw 3000", ledger.withdraw(dec!(3000.0))),
    ] {
        match result {
            Ok(notice) => notifications.notify(&notice)?,
            Err(err) if err.is_recoverable() => {
                warn!(operation = label, error = %err, "operation rejected");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let keys: Vec<String> = config
        .discounts
        .iter()
        .map(|kind| kind.key().to_string())
        .collect();
    let registry = StrategyRegistry::from_kinds(config.discounts);
    let calculator = registry.composite_for(&keys)?;

    let amount = dec!(100.0);
    for (key, discount) in calculator.breakdown(amount) {
        info!(strategy = %key, %amount, %discount, "discount applied");
    }
    info!(%amount, total = %calculator.total(amount), "total discount");

    reporter.report(&ledger)?;

    info!("session complete");
    Ok(())
}
