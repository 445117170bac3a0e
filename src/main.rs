use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal_macros::dec;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checking_account::{Account, Bank, BankConfig};

/// Name the bank-name scenario switches to
const RENAMED_BANK: &str = "Banco Internacional";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Overdraft,
    BankName,
    Transfer,
    All,
}

/// Walk a few checking accounts through deposits, withdrawals and transfers
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Initial shared bank name (overrides BANK_NAME)
    #[arg(long)]
    bank_name: Option<String>,

    /// How account reports are rendered
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Which demonstration to run
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = BankConfig::from_env().context("loading bank configuration")?;
    if let Some(name) = args.bank_name {
        config.bank_name = name;
    }
    tracing::info!(
        bank = config.bank_name.as_str(),
        amount_policy = config.amount_policy.as_str(),
        "configuration loaded"
    );

    // One bank for every scenario: a rename in one is visible in the next.
    let bank = Bank::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let run_all = args.scenario == Scenario::All;
    if run_all || args.scenario == Scenario::Overdraft {
        overdraft_limit(&mut out, &bank, args.format)?;
    }
    if run_all || args.scenario == Scenario::BankName {
        bank_name(&mut out, &bank, args.format)?;
    }
    if run_all || args.scenario == Scenario::Transfer {
        transfer_between_accounts(&mut out, &bank, args.format)?;
    }

    Ok(())
}

fn show<W: Write>(out: &mut W, account: &Account, format: Format) -> Result<()> {
    match format {
        Format::Text => account.display(out)?,
        Format::Json => writeln!(out, "{}", account.report().to_json()?)?,
    }
    Ok(())
}

fn overdraft_limit<W: Write>(out: &mut W, bank: &Bank, format: Format) -> Result<()> {
    writeln!(out, "== Overdraft limit ==")?;

    let mut account = bank.open_for_holder("Ana", "García", "98765432B")?;
    account.deposit(dec!(100))?;

    let first = account.withdraw(dec!(120))?;
    writeln!(out, "Withdrawal of 120 succeeded: {}", first.is_completed())?;

    let second = account.withdraw(dec!(50))?;
    writeln!(out, "Withdrawal of 50 succeeded: {}", second.is_completed())?;
    writeln!(out, "{}", second)?;

    show(out, &account, format)?;
    writeln!(out, "== End: Overdraft limit ==\n")?;
    Ok(())
}

fn bank_name<W: Write>(out: &mut W, bank: &Bank, format: Format) -> Result<()> {
    writeln!(out, "== Constructors and bank name ==")?;

    let funded = bank.open_with_balance(dec!(200))?;
    let holder = bank.open_for_holder("Carlos", "López", "65432109C")?;

    writeln!(out, "Accounts as opened:")?;
    show(out, &funded, format)?;
    show(out, &holder, format)?;

    bank.set_name(RENAMED_BANK);

    writeln!(out, "\nAfter renaming the bank:")?;
    show(out, &funded, format)?;
    show(out, &holder, format)?;

    writeln!(out, "== End: Constructors and bank name ==\n")?;
    Ok(())
}

fn transfer_between_accounts<W: Write>(out: &mut W, bank: &Bank, format: Format) -> Result<()> {
    writeln!(out, "== Transfer between accounts ==")?;

    let mut source = bank.open_for_holder("Luis", "Martínez", "11111111D")?;
    let mut destination = bank.open_for_holder("Sofía", "Hernández", "22222222E")?;
    source.deposit(dec!(500))?;

    writeln!(out, "Accounts before the transfer:")?;
    show(out, &source, format)?;
    show(out, &destination, format)?;

    let transfer = source.transfer(&mut destination, dec!(200))?;
    writeln!(out, "{}", transfer)?;

    writeln!(out, "\nAccounts after the transfer:")?;
    show(out, &source, format)?;
    show(out, &destination, format)?;

    writeln!(out, "== End: Transfer between accounts ==\n")?;
    Ok(())
}
