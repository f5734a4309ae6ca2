pub mod report;
pub mod v1;
pub mod validate;

use olf_core::ValidationError;
use olf_storage::StorageError;
use thiserror::Error;

/// Everything a subcommand can fail with. Validation failures keep their
/// full coordinate trail; storage failures keep their path.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Converts an amount in the smallest unit to display units.
pub(crate) fn display_amount(amount: i64) -> f64 {
    amount as f64 / 1000.0
}
