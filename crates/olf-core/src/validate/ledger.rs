//! Top-level driver: year contiguity and year-to-year chaining.

use olf_domain::{Ledger, Year};
use tracing::debug;

use crate::error::{Location, ValidationError, ValidationErrorKind};
use crate::validate::YearValidator;

pub struct LedgerValidator;

impl LedgerValidator {
    /// Validates the whole tree, years ascending, threading each year into
    /// the next as its predecessor. Fails fast on the first violation.
    pub fn validate(ledger: &Ledger) -> Result<(), ValidationError> {
        debug!(years = ledger.years.len(), "validating ledger");

        for (before, after) in ledger.years.keys().zip(ledger.years.keys().skip(1)) {
            if *after != before + 1 {
                return Err(ValidationErrorKind::NonContiguousKeys {
                    what: "year",
                    before: i64::from(*before),
                    after: i64::from(*after),
                }
                .into());
            }
        }

        let mut previous: Option<&Year> = None;
        for (number, year) in &ledger.years {
            YearValidator::validate(year, *number, previous)
                .map_err(|err| err.at(Location::Year(*number)))?;
            previous = Some(year);
        }

        Ok(())
    }
}
