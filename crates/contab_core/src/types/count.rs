//! Cell-count abstraction for 32-bit and 64-bit table entries.

use num_traits::{NumCast, PrimInt, Signed};
use std::fmt;

/// Integral type usable as a margin entry and table cell value.
///
/// Implemented for `i32` and `i64`. Margins, totals and sampled cell
/// values share a single generic code path; the two widths differ only
/// in numeric range. The sampling walk itself always runs in 64-bit
/// arithmetic and narrows accepted values back to `Self`, so 32-bit
/// tables never suffer intermediate overflow.
pub trait CellCount:
    PrimInt + Signed + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// Widens this count to the engine's internal 64-bit arithmetic.
    #[inline]
    fn widen(self) -> i64 {
        self.to_i64().expect("cell count representable as i64")
    }

    /// Narrows a 64-bit intermediate back to the cell width.
    ///
    /// Sampled values are bounded by the margins they were drawn from,
    /// which are themselves stored as `Self`; the conversion cannot
    /// overflow for values produced by the sampler.
    #[inline]
    fn narrow(value: i64) -> Self {
        NumCast::from(value).expect("sampled value fits the cell width")
    }
}

impl CellCount for i32 {}
impl CellCount for i64 {}
