//! Leaf validation: required fields and date agreement.

use chrono::{Datelike, NaiveDate};
use olf_domain::Entry;

use crate::error::{ValidationError, ValidationErrorKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a single entry against the year and month that own it.
pub struct EntryValidator;

impl EntryValidator {
    /// A zero `year` or `month` skips the corresponding date-agreement
    /// check; the engine itself always passes both.
    pub fn validate(entry: &Entry, year: i32, month: u32) -> Result<(), ValidationError> {
        if entry.amount == 0 {
            return Err(ValidationErrorKind::FieldRequired { field: "amount" }.into());
        }
        if entry.note.is_empty() {
            return Err(ValidationErrorKind::FieldRequired { field: "note" }.into());
        }

        let Some(raw) = entry.date_str() else {
            return Ok(());
        };
        let Some(date) = parse_strict_date(raw) else {
            return Err(ValidationErrorKind::MalformedDate {
                value: raw.to_string(),
            }
            .into());
        };

        let year_mismatch = year != 0 && date.year() != year;
        let month_mismatch = month != 0 && date.month() != month;
        if year_mismatch || month_mismatch {
            return Err(ValidationErrorKind::DateMismatch {
                date: raw.to_string(),
                year,
                month,
            }
            .into());
        }

        Ok(())
    }
}

/// Accepts exactly `YYYY-MM-DD`; chrono alone would also take unpadded
/// fields.
fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
