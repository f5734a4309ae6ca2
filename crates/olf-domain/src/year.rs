//! A year holding months keyed by month number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// One year of the ledger. Month numbers are unique keys in ascending
/// order; contiguity is a validation concern, not a structural one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    pub opening_balance: i64,
    pub closing_balance: i64,
    #[serde(default)]
    pub months: BTreeMap<u32, Month>,
}

impl Year {
    /// The lowest-numbered month, if any.
    pub fn first_month(&self) -> Option<&Month> {
        self.months.values().next()
    }

    /// The highest-numbered month, if any.
    pub fn last_month(&self) -> Option<&Month> {
        self.months.values().next_back()
    }

    /// Income across all months.
    pub fn income(&self) -> i64 {
        self.months.values().map(|month| month.income()).sum()
    }

    /// Expenses across all months.
    pub fn expenses(&self) -> i64 {
        self.months.values().map(|month| month.expenses()).sum()
    }
}
