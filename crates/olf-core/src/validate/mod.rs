//! One validator per tree level.
//!
//! Invocation is top-down, but what-must-be-true-first is bottom-up: each
//! level validates its children before its own aggregate equations, so a
//! child failure is reported before (and instead of) the parent-level
//! mismatch it would explain.

mod account;
mod entry;
mod ledger;
mod legacy;
mod month;
mod year;

pub use account::{AccountValidator, Predecessor};
pub use entry::EntryValidator;
pub use ledger::LedgerValidator;
pub use legacy::LegacyValidator;
pub use month::MonthValidator;
pub use year::YearValidator;
