//! Accounts: an ordered entry sequence between two stated balances.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// A financial account within one month, keyed by name in the owning month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub opening_balance: i64,
    pub closing_balance: i64,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Account {
    /// Sum of all entry amounts.
    pub fn entries_sum(&self) -> i64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Sum of the internal (transfer) entry amounts.
    pub fn internal_entries_sum(&self) -> i64 {
        self.entries
            .iter()
            .filter(|entry| entry.internal)
            .map(|entry| entry.amount)
            .sum()
    }

    /// Sum of positive non-internal entry amounts.
    pub fn income(&self) -> i64 {
        self.entries
            .iter()
            .filter(|entry| entry.is_income())
            .map(|entry| entry.amount)
            .sum()
    }

    /// Sum of negative non-internal entry amounts.
    pub fn expenses(&self) -> i64 {
        self.entries
            .iter()
            .filter(|entry| entry.is_expense())
            .map(|entry| entry.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(amount: i64, internal: bool) -> Entry {
        Entry {
            amount,
            internal,
            note: "test".into(),
            date: None,
            tag: String::new(),
        }
    }

    #[test]
    fn sums_split_internal_income_and_expenses() {
        let account = Account {
            opening_balance: 0,
            closing_balance: 70,
            entries: vec![entry(100, false), entry(-50, false), entry(20, true)],
        };

        assert_eq!(account.entries_sum(), 70);
        assert_eq!(account.internal_entries_sum(), 20);
        assert_eq!(account.income(), 100);
        assert_eq!(account.expenses(), -50);
    }

    #[test]
    fn empty_account_sums_to_zero() {
        let account = Account::default();
        assert_eq!(account.entries_sum(), 0);
        assert_eq!(account.income(), 0);
        assert_eq!(account.expenses(), 0);
    }
}
