//! Owned table buffers with an explicit row-major layout.
//!
//! # Layout
//!
//! Every buffer in this module is **row-major**: cell `(r, c)` of an
//! `n_row x n_col` table lives at flat index `r * n_col + c`, and in a
//! batch the `k`-th table occupies the contiguous block
//! `k * n_row * n_col .. (k + 1) * n_row * n_col`. Historical
//! implementations of this sampler stored tables column-major;
//! [`Table::to_column_major`] converts for callers that still expect
//! that layout. The two orderings are **not interchangeable** for
//! non-square tables, so the stride convention is part of the API
//! contract.

use crate::types::{CellCount, CoreError};

/// One owned `n_row x n_col` table of integer cells, row-major.
///
/// Invariant on a completed generation: every entry is non-negative and
/// every row/column sums to the corresponding margin entry.
///
/// # Examples
///
/// ```rust
/// use contab_core::Table;
///
/// let mut table: Table<i32> = Table::new_zeroed(2, 3).unwrap();
/// table.as_mut_slice()[0 * 3 + 2] = 7;
/// assert_eq!(table.get(0, 2), 7);
/// assert_eq!(table.row_sum(0), 7);
/// assert_eq!(table.col_sum(2), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T: CellCount> {
    n_row: usize,
    n_col: usize,
    data: Vec<T>,
}

impl<T: CellCount> Table<T> {
    /// Allocates a zero-initialised table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] when the buffer cannot be
    /// reserved.
    pub fn new_zeroed(n_row: usize, n_col: usize) -> Result<Self, CoreError> {
        let data = zeroed_buffer(n_row, n_col, 1)?;
        Ok(Self { n_row, n_col, data })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn n_row(&self) -> usize {
        self.n_row
    }

    /// Returns the number of columns.
    #[inline]
    pub fn n_col(&self) -> usize {
        self.n_col
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.n_row && col < self.n_col, "cell index out of range");
        self.data[row * self.n_col + col]
    }

    /// Returns the sum of the entries of `row`, widened to `i64`.
    pub fn row_sum(&self, row: usize) -> i64 {
        let start = row * self.n_col;
        self.data[start..start + self.n_col]
            .iter()
            .map(|&v| v.widen())
            .sum()
    }

    /// Returns the sum of the entries of `col`, widened to `i64`.
    pub fn col_sum(&self, col: usize) -> i64 {
        (0..self.n_row)
            .map(|r| self.data[r * self.n_col + col].widen())
            .sum()
    }

    /// Returns the row-major cells as a flat slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the row-major cells as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a copy of the cells in column-major order, the layout of
    /// the historical implementations of this sampler.
    pub fn to_column_major(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        for c in 0..self.n_col {
            for r in 0..self.n_row {
                out.push(self.data[r * self.n_col + c]);
            }
        }
        out
    }
}

/// A batch of `count` independent tables in one contiguous row-major
/// buffer, `count` disjoint blocks of `n_row * n_col` entries each.
///
/// Blocks never alias: the batch driver hands each worker an exclusive
/// sub-slice of the underlying buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableBatch<T: CellCount> {
    count: usize,
    n_row: usize,
    n_col: usize,
    data: Vec<T>,
}

impl<T: CellCount> TableBatch<T> {
    /// Allocates a zero-initialised batch of `count` tables.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] when the buffer cannot be
    /// reserved.
    pub fn new_zeroed(count: usize, n_row: usize, n_col: usize) -> Result<Self, CoreError> {
        let data = zeroed_buffer(n_row, n_col, count)?;
        Ok(Self {
            count,
            n_row,
            n_col,
            data,
        })
    }

    /// Returns the number of tables in the batch.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of rows of each table.
    #[inline]
    pub fn n_row(&self) -> usize {
        self.n_row
    }

    /// Returns the number of columns of each table.
    #[inline]
    pub fn n_col(&self) -> usize {
        self.n_col
    }

    /// Returns the length of one table block, `n_row * n_col`.
    #[inline]
    pub fn block_len(&self) -> usize {
        self.n_row * self.n_col
    }

    /// Returns the row-major cells of table `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= count`.
    #[inline]
    pub fn table(&self, index: usize) -> &[T] {
        assert!(index < self.count, "table index out of range");
        let block = self.block_len();
        &self.data[index * block..(index + 1) * block]
    }

    /// Returns the cell `(row, col)` of table `index`.
    #[inline]
    pub fn get(&self, index: usize, row: usize, col: usize) -> T {
        assert!(
            row < self.n_row && col < self.n_col,
            "cell index out of range"
        );
        self.table(index)[row * self.n_col + col]
    }

    /// Returns the whole batch as one flat slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the whole batch as one mutable flat slice, for the batch
    /// driver to partition into disjoint per-worker regions.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// Allocates `count * n_row * n_col` zeroed entries, surfacing
/// allocation failure instead of aborting.
fn zeroed_buffer<T: CellCount>(
    n_row: usize,
    n_col: usize,
    count: usize,
) -> Result<Vec<T>, CoreError> {
    let cells = n_row
        .checked_mul(n_col)
        .and_then(|c| c.checked_mul(count))
        .ok_or(CoreError::Allocation {
            requested: usize::MAX,
        })?;
    let mut data = Vec::new();
    data.try_reserve_exact(cells)
        .map_err(|_| CoreError::Allocation { requested: cells })?;
    data.resize(cells, T::zero());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_major_indexing() {
        let mut table: Table<i64> = Table::new_zeroed(2, 3).unwrap();
        // Fill with distinct values to pin the stride convention.
        for r in 0..2 {
            for c in 0..3 {
                table.as_mut_slice()[r * 3 + c] = (10 * r + c) as i64;
            }
        }
        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.get(0, 2), 2);
        assert_eq!(table.get(1, 0), 10);
        assert_eq!(table.get(1, 2), 12);
        assert_eq!(table.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_row_and_col_sums() {
        let mut table: Table<i32> = Table::new_zeroed(2, 2).unwrap();
        table.as_mut_slice().copy_from_slice(&[3, 0, 1, 1]);
        assert_eq!(table.row_sum(0), 3);
        assert_eq!(table.row_sum(1), 2);
        assert_eq!(table.col_sum(0), 4);
        assert_eq!(table.col_sum(1), 1);
    }

    #[test]
    fn test_to_column_major() {
        let mut table: Table<i32> = Table::new_zeroed(2, 3).unwrap();
        table.as_mut_slice().copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        // Row-major [[1,2,3],[4,5,6]] reads column-major as 1,4,2,5,3,6.
        assert_eq!(table.to_column_major(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_batch_blocks_are_disjoint_ranges() {
        let batch: TableBatch<i32> = TableBatch::new_zeroed(4, 2, 3).unwrap();
        assert_eq!(batch.count(), 4);
        assert_eq!(batch.block_len(), 6);
        assert_eq!(batch.as_slice().len(), 24);
        // Adjacent blocks tile the buffer exactly.
        for k in 0..4 {
            assert_eq!(batch.table(k).len(), 6);
        }
    }

    #[test]
    fn test_batch_get_reads_expected_block() {
        let mut batch: TableBatch<i64> = TableBatch::new_zeroed(2, 2, 2).unwrap();
        batch.as_mut_slice()[4] = 42; // table 1, cell (0, 0)
        assert_eq!(batch.get(1, 0, 0), 42);
        assert_eq!(batch.get(0, 0, 0), 0);
    }

    #[test]
    #[should_panic(expected = "table index out of range")]
    fn test_batch_index_out_of_range_panics() {
        let batch: TableBatch<i32> = TableBatch::new_zeroed(1, 2, 2).unwrap();
        let _ = batch.table(1);
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn test_table_cell_out_of_range_panics() {
        let table: Table<i32> = Table::new_zeroed(2, 2).unwrap();
        let _ = table.get(2, 0);
    }
}
