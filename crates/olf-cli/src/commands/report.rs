use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Table};
use olf_core::LedgerValidator;
use olf_domain::Ledger;

use crate::commands::{display_amount, CliError};

pub fn run(file: &Path, short: bool) -> Result<(), CliError> {
    let ledger = olf_storage::read_ledger(file)?;
    LedgerValidator::validate(&ledger)?;

    if short {
        print_short(&ledger);
    } else {
        print_table(&ledger);
    }
    Ok(())
}

fn print_table(ledger: &Ledger) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Year", "Month", "Opening", "Income", "Expenses", "Closing"]);

    for (year_number, year) in &ledger.years {
        for (month_number, month) in &year.months {
            table.add_row([
                year_number.to_string(),
                month_number.to_string(),
                format!("{:.1}", display_amount(month.opening_balance)),
                format!("{:.1}", display_amount(month.income())),
                format!("{:.1}", display_amount(month.expenses())),
                format!("{:.1}", display_amount(month.closing_balance)),
            ]);
        }
    }

    println!("{table}");
}

fn print_short(ledger: &Ledger) {
    for year in ledger.years.values() {
        for month in year.months.values() {
            println!("{:.1}", display_amount(month.expenses()));
        }
    }
}
