//! Validation for the legacy (v1) list-based format.
//!
//! The old schema carries explicit `number` fields instead of map keys and
//! has no account continuity or omission rules; everything else (chaining,
//! aggregates, the internal zero-sum, wallet balance equations) mirrors
//! the current format.

use olf_domain::{LegacyLedger, LegacyMonth, LegacyYear, Wallet};
use tracing::debug;

use crate::error::{BalanceSide, Location, ValidationError, ValidationErrorKind};

pub struct LegacyValidator;

impl LegacyValidator {
    pub fn validate(ledger: &LegacyLedger) -> Result<(), ValidationError> {
        debug!(years = ledger.years.len(), "validating legacy ledger");

        for pair in ledger.years.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.number != before.number + 1 {
                return Err(ValidationErrorKind::NonContiguousKeys {
                    what: "year",
                    before: i64::from(before.number),
                    after: i64::from(after.number),
                }
                .into());
            }
            if after.starting_balance != before.ending_balance {
                return Err(ValidationError::new(ValidationErrorKind::ContinuityViolated {
                    expected: before.ending_balance,
                    found: after.starting_balance,
                })
                .at(Location::Year(after.number)));
            }
        }

        for year in &ledger.years {
            Self::validate_year(year).map_err(|err| err.at(Location::Year(year.number)))?;
        }

        Ok(())
    }

    fn validate_year(year: &LegacyYear) -> Result<(), ValidationError> {
        if year.number < 1 {
            return Err(ValidationErrorKind::RangeViolated {
                what: "year number",
                bounds: "at least 1",
                value: i64::from(year.number),
            }
            .into());
        }

        for pair in year.months.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.number != before.number + 1 {
                return Err(ValidationErrorKind::NonContiguousKeys {
                    what: "month",
                    before: i64::from(before.number),
                    after: i64::from(after.number),
                }
                .into());
            }
            if after.starting_balance != before.ending_balance {
                return Err(ValidationError::new(ValidationErrorKind::ContinuityViolated {
                    expected: before.ending_balance,
                    found: after.starting_balance,
                })
                .at(Location::Month(after.number)));
            }
        }

        if let Some(first) = year.months.first() {
            if year.starting_balance != first.starting_balance {
                return Err(ValidationErrorKind::AggregateMismatch {
                    side: BalanceSide::Opening,
                    stated: year.starting_balance,
                    derived: first.starting_balance,
                }
                .into());
            }
        }
        if let Some(last) = year.months.last() {
            if year.ending_balance != last.ending_balance {
                return Err(ValidationErrorKind::AggregateMismatch {
                    side: BalanceSide::Closing,
                    stated: year.ending_balance,
                    derived: last.ending_balance,
                }
                .into());
            }
        }

        for month in &year.months {
            Self::validate_month(month).map_err(|err| err.at(Location::Month(month.number)))?;
        }

        Ok(())
    }

    fn validate_month(month: &LegacyMonth) -> Result<(), ValidationError> {
        if !(1..=12).contains(&month.number) {
            return Err(ValidationErrorKind::RangeViolated {
                what: "month number",
                bounds: "between 1 and 12",
                value: i64::from(month.number),
            }
            .into());
        }

        for wallet in &month.wallets {
            Self::validate_wallet(wallet)
                .map_err(|err| err.at(Location::Account(wallet.name.clone())))?;
        }

        let starting_sum = month.wallets_starting_sum();
        if month.starting_balance != starting_sum {
            return Err(ValidationErrorKind::AggregateMismatch {
                side: BalanceSide::Opening,
                stated: month.starting_balance,
                derived: starting_sum,
            }
            .into());
        }

        let ending_sum = month.wallets_ending_sum();
        if month.ending_balance != ending_sum {
            return Err(ValidationErrorKind::AggregateMismatch {
                side: BalanceSide::Closing,
                stated: month.ending_balance,
                derived: ending_sum,
            }
            .into());
        }

        let internal = month.internal_transactions_sum();
        if internal != 0 {
            return Err(ValidationErrorKind::InternalImbalance { sum: internal }.into());
        }

        Ok(())
    }

    fn validate_wallet(wallet: &Wallet) -> Result<(), ValidationError> {
        for (index, txn) in wallet.transactions.iter().enumerate() {
            if txn.amount == 0 {
                return Err(ValidationError::new(ValidationErrorKind::FieldRequired {
                    field: "amount",
                })
                .at(Location::Entry(index)));
            }
            if txn.comment.is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::FieldRequired {
                    field: "comment",
                })
                .at(Location::Entry(index)));
            }
        }

        let transactions = wallet.transactions_sum();
        if wallet.starting_balance + transactions != wallet.ending_balance {
            return Err(ValidationErrorKind::BalanceEquationViolated {
                opening: wallet.starting_balance,
                entries: transactions,
                closing: wallet.ending_balance,
            }
            .into());
        }

        Ok(())
    }
}
