//! Month validation: per-account checks plus the cross-account equations.

use olf_domain::Month;

use crate::error::{BalanceSide, Location, ValidationError, ValidationErrorKind};
use crate::validate::{AccountValidator, Predecessor};

pub struct MonthValidator;

impl MonthValidator {
    pub fn validate(
        month: &Month,
        year: i32,
        number: u32,
        previous: Option<&Month>,
    ) -> Result<(), ValidationError> {
        if !(1..=12).contains(&number) {
            return Err(ValidationErrorKind::RangeViolated {
                what: "month number",
                bounds: "between 1 and 12",
                value: i64::from(number),
            }
            .into());
        }
        if month.accounts.is_empty() {
            return Err(ValidationErrorKind::EmptyCollection {
                what: "month",
                unit: "account",
            }
            .into());
        }

        // Map iteration is ascending by account name, so the first failing
        // account is the same on every run.
        for (name, account) in &month.accounts {
            let predecessor = match previous {
                None => Predecessor::FirstMonth,
                Some(prior) => match prior.accounts.get(name) {
                    Some(prior_account) => Predecessor::Prior(prior_account),
                    None => Predecessor::NewAccount,
                },
            };
            AccountValidator::validate(account, year, number, predecessor)
                .map_err(|err| err.at(Location::Account(name.clone())))?;
        }

        let opening_sum = month.accounts_opening_sum();
        if month.opening_balance != opening_sum {
            return Err(ValidationErrorKind::AggregateMismatch {
                side: BalanceSide::Opening,
                stated: month.opening_balance,
                derived: opening_sum,
            }
            .into());
        }

        let closing_sum = month.accounts_closing_sum();
        if month.closing_balance != closing_sum {
            return Err(ValidationErrorKind::AggregateMismatch {
                side: BalanceSide::Closing,
                stated: month.closing_balance,
                derived: closing_sum,
            }
            .into());
        }

        // The double-entry constraint holds across the whole month, not
        // per account.
        let internal = month.internal_entries_sum();
        if internal != 0 {
            return Err(ValidationErrorKind::InternalImbalance { sum: internal }.into());
        }

        if let Some(prior) = previous {
            if month.opening_balance != prior.closing_balance {
                return Err(ValidationErrorKind::ContinuityViolated {
                    expected: prior.closing_balance,
                    found: month.opening_balance,
                }
                .into());
            }

            // Accounts may only disappear after closing at zero. This needs
            // both months' account sets, so it lives here rather than in
            // the account validator.
            for (name, prior_account) in &prior.accounts {
                if !month.accounts.contains_key(name) && prior_account.closing_balance != 0 {
                    return Err(ValidationErrorKind::IllegalOmission {
                        account: name.clone(),
                        closing: prior_account.closing_balance,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}
