//! Precomputed natural logarithms of factorials.
//!
//! Combinatorial probabilities over totals of any realistic size
//! overflow `f64` when evaluated as factorial ratios directly; the
//! sampler therefore works in log-space and exponentiates once per
//! evaluation. This module provides the lookup table backing those
//! evaluations.

use crate::margins::Margins;
use crate::types::{CellCount, CoreError};

/// Lookup table of `ln(k!)` for `k = 0..=n_total`.
///
/// Entry `k` holds the cumulative sum of `ln(i)` for `i = 1..=k`, with
/// entry `0` equal to zero. The table is a pure function of its length:
/// build it once per distinct grand total and share it read-only across
/// any number of concurrent generations.
///
/// # Examples
///
/// ```rust
/// use contab_core::LogFactorialTable;
///
/// let table = LogFactorialTable::build(10).unwrap();
/// assert_eq!(table.len(), 11);
/// assert_eq!(table.ln_factorial(0), Some(0.0));
/// // Out-of-range lookups are surfaced, not read past the end.
/// assert_eq!(table.ln_factorial(11), None);
/// assert_eq!(table.ln_factorial(-1), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LogFactorialTable {
    values: Vec<f64>,
}

impl LogFactorialTable {
    /// Builds the table for totals up to and including `n_total`.
    ///
    /// Single pass, O(n_total), no randomness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] when the backing buffer cannot
    /// be reserved.
    pub fn build(n_total: u64) -> Result<Self, CoreError> {
        let len = usize::try_from(n_total)
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or(CoreError::Allocation {
                requested: usize::MAX,
            })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| CoreError::Allocation { requested: len })?;

        values.push(0.0);
        let mut acc = 0.0;
        for i in 1..len {
            acc += (i as f64).ln();
            values.push(acc);
        }

        Ok(Self { values })
    }

    /// Builds the table sized for the given margins' grand total.
    pub fn for_margins<T: CellCount>(margins: &Margins<T>) -> Result<Self, CoreError> {
        Self::build(margins.n_total() as u64)
    }

    /// Returns the number of entries, `n_total + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `ln(k!)`, or `None` when `k` is negative or beyond the
    /// table's range.
    ///
    /// The checked access is what turns an inconsistent
    /// margins/table combination into a reportable error instead of an
    /// out-of-bounds read.
    #[inline]
    pub fn ln_factorial(&self, k: i64) -> Option<f64> {
        usize::try_from(k).ok().and_then(|i| self.values.get(i)).copied()
    }

    /// Returns the raw table entries.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_total() {
        let table = LogFactorialTable::build(0).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.ln_factorial(0), Some(0.0));
        assert_eq!(table.ln_factorial(1), None);
    }

    #[test]
    fn test_first_entries() {
        let table = LogFactorialTable::build(5).unwrap();
        assert_eq!(table.ln_factorial(0), Some(0.0));
        assert_eq!(table.ln_factorial(1), Some(0.0_f64 + 1.0_f64.ln()));
        assert_relative_eq!(table.ln_factorial(3).unwrap(), 6.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(
            table.ln_factorial(5).unwrap(),
            120.0_f64.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_consecutive_differences_are_logs() {
        let n = 1000;
        let table = LogFactorialTable::build(n).unwrap();
        for i in 1..=n as i64 {
            let diff = table.ln_factorial(i).unwrap() - table.ln_factorial(i - 1).unwrap();
            assert_relative_eq!(diff, (i as f64).ln(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let table = LogFactorialTable::build(10).unwrap();
        assert_eq!(table.ln_factorial(11), None);
        assert_eq!(table.ln_factorial(-1), None);
        assert_eq!(table.ln_factorial(i64::MIN), None);
    }

    #[test]
    fn test_for_margins_covers_total() {
        let margins = Margins::new(vec![3_i32, 2], vec![4, 1]).unwrap();
        let table = LogFactorialTable::for_margins(&margins).unwrap();
        assert_eq!(table.len() as i64, margins.n_total() + 1);
        assert!(table.ln_factorial(margins.n_total()).is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// The table is strictly increasing from entry 1 onwards.
            #[test]
            fn prop_monotone_increasing(n in 2_u64..2000) {
                let table = LogFactorialTable::build(n).unwrap();
                let values = table.as_slice();
                for i in 2..values.len() {
                    prop_assert!(values[i] > values[i - 1]);
                }
            }
        }
    }
}
