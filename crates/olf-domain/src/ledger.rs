//! The ledger root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::year::Year;

/// Root of an Open Ledger Format tree. Built whole from deserialized input
/// and read-only thereafter; validation and reporting are independent
/// passes over the same immutable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub years: BTreeMap<i32, Year>,
}

impl Ledger {
    /// Total income across all years. Computable without validating first.
    pub fn total_income(&self) -> i64 {
        self.years.values().map(|year| year.income()).sum()
    }

    /// Total expenses across all years. Computable without validating first.
    pub fn total_expenses(&self) -> i64 {
        self.years.values().map(|year| year.expenses()).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Account, Entry, Ledger, Month, Year};

    fn sample_ledger() -> Ledger {
        let account = Account {
            opening_balance: 0,
            closing_balance: 250,
            entries: vec![
                Entry {
                    amount: 300,
                    internal: false,
                    note: "Salary".into(),
                    date: Some("2025-01-10".into()),
                    tag: "income".into(),
                },
                Entry {
                    amount: -50,
                    internal: false,
                    note: "Groceries".into(),
                    date: None,
                    tag: String::new(),
                },
            ],
        };
        let month = Month {
            opening_balance: 0,
            closing_balance: 250,
            accounts: [("Checking".to_string(), account)].into(),
        };
        let year = Year {
            opening_balance: 0,
            closing_balance: 250,
            months: [(1u32, month)].into(),
        };
        Ledger {
            years: [(2025, year)].into(),
        }
    }

    #[test]
    fn totals_aggregate_over_the_whole_tree() {
        let ledger = sample_ledger();
        assert_eq!(ledger.total_income(), 300);
        assert_eq!(ledger.total_expenses(), -50);
    }

    #[test]
    fn json_round_trip_preserves_the_tree() {
        let ledger = sample_ledger();
        let json = serde_json::to_string(&ledger).expect("serialize");
        let parsed: Ledger = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, ledger);
    }

    #[test]
    fn absent_date_is_not_serialized() {
        let ledger = sample_ledger();
        let json = serde_json::to_string(&ledger).expect("serialize");
        assert!(!json.contains("\"date\":null"));
    }
}
