//! Subcommands over the legacy list-based format.

use std::path::Path;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use olf_core::{convert, LedgerValidator, LegacyValidator};
use olf_domain::LegacyLedger;
use tracing::info;

use crate::commands::{display_amount, CliError};

pub fn validate(file: &Path) -> Result<(), CliError> {
    let ledger = olf_storage::read_legacy_ledger(file)?;
    println!("Loaded legacy ledger with {} year(s)", ledger.years.len());

    LegacyValidator::validate(&ledger)?;

    println!("{}", "Legacy ledger is valid".green());
    println!("Total income: {:.2}", display_amount(ledger.total_income()));
    println!(
        "Total expenses: {:.2}",
        display_amount(ledger.total_expenses())
    );
    Ok(())
}

pub fn report(file: &Path, short: bool) -> Result<(), CliError> {
    let ledger = olf_storage::read_legacy_ledger(file)?;
    LegacyValidator::validate(&ledger)?;

    if short {
        print_short(&ledger);
    } else {
        print_table(&ledger);
    }
    Ok(())
}

/// Reads and validates a legacy file, converts it, re-validates the result
/// under the current rules, and only then writes the output. A failure at
/// any step leaves no output file behind.
pub fn migrate(input: &Path, output: &Path) -> Result<(), CliError> {
    let legacy = olf_storage::read_legacy_ledger(input)?;
    LegacyValidator::validate(&legacy)?;

    let ledger = convert(&legacy)?;
    LedgerValidator::validate(&ledger)?;

    olf_storage::write_ledger(&ledger, output)?;
    info!(input = %input.display(), output = %output.display(), "migrated ledger");
    println!("Migrated {} -> {}", input.display(), output.display());
    Ok(())
}

fn print_table(ledger: &LegacyLedger) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Year", "Month", "Opening", "Income", "Expenses", "Closing"]);

    for year in &ledger.years {
        for month in &year.months {
            table.add_row([
                year.number.to_string(),
                month.number.to_string(),
                format!("{:.1}", display_amount(month.starting_balance)),
                format!("{:.1}", display_amount(month.income())),
                format!("{:.1}", display_amount(month.expenses())),
                format!("{:.1}", display_amount(month.ending_balance)),
            ]);
        }
    }

    println!("{table}");
}

fn print_short(ledger: &LegacyLedger) {
    for year in &ledger.years {
        for month in &year.months {
            println!("{:.1}", display_amount(month.expenses()));
        }
    }
}
