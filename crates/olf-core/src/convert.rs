//! One-way migration from the legacy list-based schema to the keyed tree.

use std::collections::BTreeMap;

use olf_domain::{Account, Entry, Ledger, LegacyLedger, Month, Year};
use tracing::debug;

use crate::error::{Location, ValidationError, ValidationErrorKind};

/// Maps a legacy ledger onto the current schema without touching any
/// monetary value: wallets become accounts keyed by name, transactions
/// become entries with fields renamed one-to-one.
///
/// The converter validates neither its input nor its output — callers
/// validate the legacy tree first and re-validate the converted tree
/// before accepting it. The one failure the converter itself reports is a
/// wallet name collision within a month, which naive map insertion would
/// silently resolve by dropping the earlier wallet.
pub fn convert(legacy: &LegacyLedger) -> Result<Ledger, ValidationError> {
    let mut years = BTreeMap::new();

    for year in &legacy.years {
        let mut months = BTreeMap::new();

        for month in &year.months {
            let mut accounts = BTreeMap::new();

            for wallet in &month.wallets {
                let entries = wallet
                    .transactions
                    .iter()
                    .map(|txn| Entry {
                        amount: txn.amount,
                        internal: txn.is_internal,
                        note: txn.comment.clone(),
                        date: txn.date.clone(),
                        tag: txn.category.clone(),
                    })
                    .collect();
                let account = Account {
                    opening_balance: wallet.starting_balance,
                    closing_balance: wallet.ending_balance,
                    entries,
                };

                if accounts.insert(wallet.name.clone(), account).is_some() {
                    return Err(ValidationError::new(
                        ValidationErrorKind::DuplicateAccountName {
                            name: wallet.name.clone(),
                        },
                    )
                    .at(Location::Month(month.number))
                    .at(Location::Year(year.number)));
                }
            }

            months.insert(
                month.number,
                Month {
                    opening_balance: month.starting_balance,
                    closing_balance: month.ending_balance,
                    accounts,
                },
            );
        }

        years.insert(
            year.number,
            Year {
                opening_balance: year.starting_balance,
                closing_balance: year.ending_balance,
                months,
            },
        );
    }

    debug!(years = years.len(), "converted legacy ledger");
    Ok(Ledger { years })
}
