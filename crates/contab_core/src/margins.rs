//! Prescribed row and column totals that a generated table must satisfy.

use crate::types::{CellCount, CoreError};

/// Validated row and column sums for a two-way table.
///
/// [`Margins::new`] is the only way to obtain a value; it enforces the
/// preconditions the sampler relies on: at least two rows and two
/// columns, strictly positive entries, and equal row/column totals.
/// The grand total is accumulated in `i64` regardless of the cell
/// width and cached at construction.
///
/// A `Margins` value is immutable and may be borrowed by any number of
/// concurrent generations.
///
/// # Examples
///
/// ```rust
/// use contab_core::Margins;
///
/// let margins = Margins::new(vec![3_i32, 2], vec![4, 1]).unwrap();
/// assert_eq!(margins.n_row(), 2);
/// assert_eq!(margins.n_col(), 2);
/// assert_eq!(margins.n_total(), 5);
///
/// // Mismatched totals are rejected up front.
/// assert!(Margins::new(vec![3_i32, 2], vec![4, 2]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Margins<T: CellCount> {
    row_sums: Vec<T>,
    col_sums: Vec<T>,
    n_total: i64,
}

impl<T: CellCount> Margins<T> {
    /// Validates the given sums and constructs the margins.
    ///
    /// # Errors
    ///
    /// - [`CoreError::TooFewRows`] / [`CoreError::TooFewCols`] when a
    ///   dimension is smaller than 2,
    /// - [`CoreError::NonPositiveRowSum`] / [`CoreError::NonPositiveColSum`]
    ///   when an entry is zero or negative,
    /// - [`CoreError::MarginSumMismatch`] when the two totals differ.
    pub fn new(row_sums: Vec<T>, col_sums: Vec<T>) -> Result<Self, CoreError> {
        if row_sums.len() < 2 {
            return Err(CoreError::TooFewRows {
                got: row_sums.len(),
            });
        }
        if col_sums.len() < 2 {
            return Err(CoreError::TooFewCols {
                got: col_sums.len(),
            });
        }

        for (index, &value) in row_sums.iter().enumerate() {
            if value <= T::zero() {
                return Err(CoreError::NonPositiveRowSum {
                    index,
                    value: value.widen(),
                });
            }
        }
        for (index, &value) in col_sums.iter().enumerate() {
            if value <= T::zero() {
                return Err(CoreError::NonPositiveColSum {
                    index,
                    value: value.widen(),
                });
            }
        }

        let row_total: i64 = row_sums.iter().map(|&v| v.widen()).sum();
        let col_total: i64 = col_sums.iter().map(|&v| v.widen()).sum();
        if row_total != col_total {
            return Err(CoreError::MarginSumMismatch {
                row_total,
                col_total,
            });
        }

        Ok(Self {
            row_sums,
            col_sums,
            n_total: row_total,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn n_row(&self) -> usize {
        self.row_sums.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn n_col(&self) -> usize {
        self.col_sums.len()
    }

    /// Returns the prescribed row sums.
    #[inline]
    pub fn row_sums(&self) -> &[T] {
        &self.row_sums
    }

    /// Returns the prescribed column sums.
    #[inline]
    pub fn col_sums(&self) -> &[T] {
        &self.col_sums
    }

    /// Returns the grand total shared by both margins.
    #[inline]
    pub fn n_total(&self) -> i64 {
        self.n_total
    }

    /// Returns the number of cells of one table, `n_row * n_col`.
    #[inline]
    pub fn cells(&self) -> usize {
        self.row_sums.len() * self.col_sums.len()
    }
}
