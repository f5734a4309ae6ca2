//! Legacy (v1) ledger model.
//!
//! The superseded schema keeps ordinal lists where the current one keys by
//! number or name: years, months, wallets, and transactions are plain
//! sequences carrying their own `number`/`name` fields. Field names differ
//! too (`starting_balance`/`ending_balance`, `is_internal`, `comment`,
//! `category`); serde preserves them so old files parse unchanged.

use serde::{Deserialize, Serialize};

/// Root of a legacy ledger file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLedger {
    #[serde(default)]
    pub years: Vec<LegacyYear>,
}

impl LegacyLedger {
    /// Total income across all years.
    pub fn total_income(&self) -> i64 {
        self.years.iter().map(|year| year.income()).sum()
    }

    /// Total expenses across all years.
    pub fn total_expenses(&self) -> i64 {
        self.years.iter().map(|year| year.expenses()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyYear {
    pub number: i32,
    #[serde(default)]
    pub months: Vec<LegacyMonth>,
    pub starting_balance: i64,
    pub ending_balance: i64,
}

impl LegacyYear {
    pub fn income(&self) -> i64 {
        self.months.iter().map(|month| month.income()).sum()
    }

    pub fn expenses(&self) -> i64 {
        self.months.iter().map(|month| month.expenses()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMonth {
    pub number: u32,
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    pub starting_balance: i64,
    pub ending_balance: i64,
}

impl LegacyMonth {
    /// Sum of wallet starting balances.
    pub fn wallets_starting_sum(&self) -> i64 {
        self.wallets
            .iter()
            .map(|wallet| wallet.starting_balance)
            .sum()
    }

    /// Sum of wallet ending balances.
    pub fn wallets_ending_sum(&self) -> i64 {
        self.wallets
            .iter()
            .map(|wallet| wallet.ending_balance)
            .sum()
    }

    /// Sum of internal transaction amounts across all wallets.
    pub fn internal_transactions_sum(&self) -> i64 {
        self.wallets
            .iter()
            .map(|wallet| wallet.internal_transactions_sum())
            .sum()
    }

    pub fn income(&self) -> i64 {
        self.wallets.iter().map(|wallet| wallet.income()).sum()
    }

    pub fn expenses(&self) -> i64 {
        self.wallets.iter().map(|wallet| wallet.expenses()).sum()
    }
}

/// The legacy counterpart of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub starting_balance: i64,
    pub ending_balance: i64,
}

impl Wallet {
    /// Sum of all transaction amounts.
    pub fn transactions_sum(&self) -> i64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    /// Sum of the internal transaction amounts.
    pub fn internal_transactions_sum(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|txn| txn.is_internal)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Sum of positive non-internal transaction amounts.
    pub fn income(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|txn| !txn.is_internal && txn.amount > 0)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Sum of negative non-internal transaction amounts.
    pub fn expenses(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|txn| !txn.is_internal && txn.amount < 0)
            .map(|txn| txn.amount)
            .sum()
    }
}

/// The legacy counterpart of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: i64,
    #[serde(default)]
    pub is_internal: bool,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub category: String,
}
