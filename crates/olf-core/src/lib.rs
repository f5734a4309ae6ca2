//! olf-core
//!
//! The cross-level consistency engine for Open Ledger Format trees: one
//! validator per level (entry, account, month, year, ledger), the legacy
//! (v1) validator, and the v1 → v2 converter. Validation is a pure,
//! fail-fast traversal over an immutable snapshot; the first violated
//! invariant at the most specific level wins, wrapped with the coordinates
//! of every enclosing level.

pub mod convert;
pub mod error;
pub mod validate;

pub use convert::convert;
pub use error::{BalanceSide, Location, ValidationError, ValidationErrorKind};
pub use validate::{
    AccountValidator, EntryValidator, LedgerValidator, LegacyValidator, MonthValidator,
    Predecessor, YearValidator,
};
