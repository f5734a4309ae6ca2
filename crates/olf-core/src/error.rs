//! Structured validation failures carrying their tree coordinates.

use std::fmt;

use thiserror::Error;

/// One step of the path from the ledger root down to the failing element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Year(i32),
    Month(u32),
    Account(String),
    Entry(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Year(number) => write!(f, "year {number}"),
            Location::Month(number) => write!(f, "month {number}"),
            Location::Account(name) => write!(f, "account {name}"),
            Location::Entry(index) => write!(f, "entry {index}"),
        }
    }
}

/// Which balance column an aggregate equation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSide {
    Opening,
    Closing,
}

impl fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceSide::Opening => f.write_str("opening"),
            BalanceSide::Closing => f.write_str("closing"),
        }
    }
}

/// The invariant that was violated, with the values that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("date `{value}` is not a valid YYYY-MM-DD calendar date")]
    MalformedDate { value: String },

    #[error("entry date {date} lies outside {year:04}-{month:02}")]
    DateMismatch {
        date: String,
        year: i32,
        month: u32,
    },

    #[error("opening balance {opening} plus entry amounts {entries} does not equal closing balance {closing}")]
    BalanceEquationViolated {
        opening: i64,
        entries: i64,
        closing: i64,
    },

    #[error("stated {side} balance {stated} does not agree with the derived {side} balance {derived}")]
    AggregateMismatch {
        side: BalanceSide,
        stated: i64,
        derived: i64,
    },

    #[error("internal entries must net to zero within the month, got {sum}")]
    InternalImbalance { sum: i64 },

    #[error("opening balance {found} does not equal the previous period's closing balance {expected}")]
    ContinuityViolated { expected: i64, found: i64 },

    #[error("new account must open at zero, got {opening}")]
    NewAccountNonZeroOpening { opening: i64 },

    #[error("account `{account}` was dropped with a non-zero closing balance {closing}")]
    IllegalOmission { account: String, closing: i64 },

    #[error("{what} must be {bounds}, got {value}")]
    RangeViolated {
        what: &'static str,
        bounds: &'static str,
        value: i64,
    },

    #[error("{what} must contain at least one {unit}")]
    EmptyCollection {
        what: &'static str,
        unit: &'static str,
    },

    #[error("{what} numbers must be consecutive ascending, got {after} after {before}")]
    NonContiguousKeys {
        what: &'static str,
        before: i64,
        after: i64,
    },

    #[error("duplicate account name `{name}`")]
    DuplicateAccountName { name: String },
}

/// A single validation failure plus the path from the root to the element
/// that produced it. Each enclosing validator prefixes its own coordinate
/// without altering the kind, so the failure reads top-down:
/// `year 2025: month 2: account Checking: entry 0: …`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    trail: Vec<Location>,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            trail: Vec::new(),
            kind,
        }
    }

    /// Prefixes the trail with an enclosing coordinate.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.trail.insert(0, location);
        self
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    pub fn trail(&self) -> &[Location] {
        &self.trail
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.trail {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
