//! Account validation: entries in order, the balance equation, continuity.

use olf_domain::Account;

use crate::error::{Location, ValidationError, ValidationErrorKind};
use crate::validate::EntryValidator;

/// Resolution of an account name against the immediately preceding month.
///
/// Continuity rules only bind once a preceding month exists: accounts in
/// the very first month of the ledger may open at any balance.
#[derive(Debug, Clone, Copy)]
pub enum Predecessor<'a> {
    /// No month precedes this one anywhere in the ledger.
    FirstMonth,
    /// A preceding month exists but does not carry this account.
    NewAccount,
    /// The account as it stood in the preceding month.
    Prior(&'a Account),
}

pub struct AccountValidator;

impl AccountValidator {
    pub fn validate(
        account: &Account,
        year: i32,
        month: u32,
        predecessor: Predecessor<'_>,
    ) -> Result<(), ValidationError> {
        for (index, entry) in account.entries.iter().enumerate() {
            EntryValidator::validate(entry, year, month)
                .map_err(|err| err.at(Location::Entry(index)))?;
        }

        let entries = account.entries_sum();
        if account.opening_balance + entries != account.closing_balance {
            return Err(ValidationErrorKind::BalanceEquationViolated {
                opening: account.opening_balance,
                entries,
                closing: account.closing_balance,
            }
            .into());
        }

        match predecessor {
            Predecessor::FirstMonth => {}
            Predecessor::NewAccount => {
                if account.opening_balance != 0 {
                    return Err(ValidationErrorKind::NewAccountNonZeroOpening {
                        opening: account.opening_balance,
                    }
                    .into());
                }
            }
            Predecessor::Prior(previous) => {
                if account.opening_balance != previous.closing_balance {
                    return Err(ValidationErrorKind::ContinuityViolated {
                        expected: previous.closing_balance,
                        found: account.opening_balance,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}
