use std::path::Path;

use colored::Colorize;
use olf_core::LedgerValidator;

use crate::commands::{display_amount, CliError};

pub fn run(file: &Path) -> Result<(), CliError> {
    let ledger = olf_storage::read_ledger(file)?;
    println!("Loaded ledger with {} year(s)", ledger.years.len());

    LedgerValidator::validate(&ledger)?;

    println!("{}", "Ledger is valid".green());
    println!("Total income: {:.2}", display_amount(ledger.total_income()));
    println!(
        "Total expenses: {:.2}",
        display_amount(ledger.total_expenses())
    );
    Ok(())
}
