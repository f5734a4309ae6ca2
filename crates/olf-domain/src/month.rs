//! A calendar month holding accounts keyed by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::account::Account;

/// One month of a year. Account names are unique keys; `BTreeMap` keeps
/// iteration in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    pub opening_balance: i64,
    pub closing_balance: i64,
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
}

impl Month {
    /// Sum of account opening balances.
    pub fn accounts_opening_sum(&self) -> i64 {
        self.accounts
            .values()
            .map(|account| account.opening_balance)
            .sum()
    }

    /// Sum of account closing balances.
    pub fn accounts_closing_sum(&self) -> i64 {
        self.accounts
            .values()
            .map(|account| account.closing_balance)
            .sum()
    }

    /// Sum of internal entry amounts across all accounts.
    pub fn internal_entries_sum(&self) -> i64 {
        self.accounts
            .values()
            .map(|account| account.internal_entries_sum())
            .sum()
    }

    /// Income across all accounts.
    pub fn income(&self) -> i64 {
        self.accounts.values().map(|account| account.income()).sum()
    }

    /// Expenses across all accounts.
    pub fn expenses(&self) -> i64 {
        self.accounts
            .values()
            .map(|account| account.expenses())
            .sum()
    }
}
