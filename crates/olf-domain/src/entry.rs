//! Leaf entry records.

use serde::{Deserialize, Serialize};

/// A single transaction-like record inside an account.
///
/// Amounts are integers in the smallest currency unit (thousandths of the
/// display unit); the sign carries direction. `internal` marks a transfer
/// between accounts of the same month rather than external income or
/// expense. `date`, when present, is a `YYYY-MM-DD` string; whether it is
/// well-formed is a validation question, not a deserialization one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub amount: i64,
    #[serde(default)]
    pub internal: bool,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub tag: String,
}

impl Entry {
    /// Returns the raw date string, treating an empty string as absent.
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_deref().filter(|raw| !raw.is_empty())
    }

    /// True for non-internal entries with a positive amount.
    pub fn is_income(&self) -> bool {
        !self.internal && self.amount > 0
    }

    /// True for non-internal entries with a negative amount.
    pub fn is_expense(&self) -> bool {
        !self.internal && self.amount < 0
    }
}
