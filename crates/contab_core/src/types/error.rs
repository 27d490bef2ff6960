//! Error types for margin validation and buffer construction.

use thiserror::Error;

/// Categorised foundation-layer errors.
///
/// Validation variants are raised before any sampling begins and leave
/// no partial state behind; `Allocation` is raised when a lookup table
/// or output buffer cannot be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Fewer than two rows were supplied.
    #[error("number of rows {got} is less than 2")]
    TooFewRows {
        /// Number of rows supplied.
        got: usize,
    },

    /// Fewer than two columns were supplied.
    #[error("number of columns {got} is less than 2")]
    TooFewCols {
        /// Number of columns supplied.
        got: usize,
    },

    /// A row sum entry is zero or negative.
    #[error("row sum at index {index} is not positive: {value}")]
    NonPositiveRowSum {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: i64,
    },

    /// A column sum entry is zero or negative.
    #[error("column sum at index {index} is not positive: {value}")]
    NonPositiveColSum {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: i64,
    },

    /// Row sums and column sums do not share the same total.
    #[error("row sums total {row_total} does not match column sums total {col_total}")]
    MarginSumMismatch {
        /// Sum over the row margin.
        row_total: i64,
        /// Sum over the column margin.
        col_total: i64,
    },

    /// A table or buffer of the requested size could not be allocated.
    #[error("failed to allocate a buffer of {requested} entries")]
    Allocation {
        /// Number of entries requested.
        requested: usize,
    },
}
