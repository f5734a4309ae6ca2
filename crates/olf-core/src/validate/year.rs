//! Year validation: month chaining across the year boundary and the
//! year-level aggregate equations.

use olf_domain::{Month, Year};

use crate::error::{BalanceSide, Location, ValidationError, ValidationErrorKind};
use crate::validate::MonthValidator;

pub struct YearValidator;

impl YearValidator {
    pub fn validate(
        year: &Year,
        number: i32,
        previous: Option<&Year>,
    ) -> Result<(), ValidationError> {
        if number < 1 {
            return Err(ValidationErrorKind::RangeViolated {
                what: "year number",
                bounds: "at least 1",
                value: i64::from(number),
            }
            .into());
        }
        if year.months.is_empty() {
            return Err(ValidationErrorKind::EmptyCollection {
                what: "year",
                unit: "month",
            }
            .into());
        }

        for (before, after) in year.months.keys().zip(year.months.keys().skip(1)) {
            if *after != before + 1 {
                return Err(ValidationErrorKind::NonContiguousKeys {
                    what: "month",
                    before: i64::from(*before),
                    after: i64::from(*after),
                }
                .into());
            }
        }

        // The first month of this year chains to the last month of the
        // previous year.
        let mut prior: Option<&Month> = previous.and_then(|prev| prev.last_month());
        for (month_number, month) in &year.months {
            MonthValidator::validate(month, number, *month_number, prior)
                .map_err(|err| err.at(Location::Month(*month_number)))?;
            prior = Some(month);
        }

        if let Some(first) = year.first_month() {
            if year.opening_balance != first.opening_balance {
                return Err(ValidationErrorKind::AggregateMismatch {
                    side: BalanceSide::Opening,
                    stated: year.opening_balance,
                    derived: first.opening_balance,
                }
                .into());
            }
        }
        if let Some(last) = year.last_month() {
            if year.closing_balance != last.closing_balance {
                return Err(ValidationErrorKind::AggregateMismatch {
                    side: BalanceSide::Closing,
                    stated: year.closing_balance,
                    derived: last.closing_balance,
                }
                .into());
            }
        }

        if let Some(prev) = previous {
            if year.opening_balance != prev.closing_balance {
                return Err(ValidationErrorKind::ContinuityViolated {
                    expected: prev.closing_balance,
                    found: year.opening_balance,
                }
                .into());
            }
        }

        Ok(())
    }
}
