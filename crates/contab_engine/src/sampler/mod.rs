//! Cell-by-cell conditional sampling of one table with fixed margins.
//!
//! # Algorithm
//!
//! The table is filled row-major in sampling order: rows `0..n_row-1`
//! (the last row excluded), and within each row columns `0..n_col-1`
//! (the last column excluded). Conditional on everything placed so far,
//! each interior cell follows a reduced central hypergeometric
//! distribution parameterised by four running quantities: the row's
//! remaining budget, the column's remaining budget, the remaining grand
//! total, and their differences.
//!
//! A cell value is drawn by inverse-CDF search without materialising
//! the distribution: evaluate the probability mass at the mode in
//! closed form from the log-factorial table (one `exp` per draw), then
//! walk outward from the mode in both directions at once, updating each
//! trial's mass from its predecessor by a cheap integer ratio and
//! accumulating the running total until the uniform draw is covered.
//! When accumulated mass underflows below the draw, the draw is
//! rescaled to the observed total and the search restarts; this
//! renormalising retry is invisible to the caller.
//!
//! The last column of each sampled row and the entire last row are
//! closed out deterministically from explicit residual bookkeeping.
//!
//! All bookkeeping runs in `i64` regardless of the cell width, so
//! 32-bit tables cannot overflow in the intermediate products.
//!
//! # Algorithm Reference
//!
//! - Patefield, W. M. (1981). "Algorithm AS 159: An Efficient Method of
//!   Generating R x C Tables with Given Row and Column Totals".
//!   Applied Statistics, Volume 30, Number 1, pages 91-97.

use contab_core::{CellCount, LogFactorialTable, Margins};

use crate::error::EngineError;
use crate::rng::SampleStream;

/// Parameters of the reduced hypergeometric distribution of one cell,
/// conditional on every cell sampled before it.
#[derive(Clone, Copy, Debug)]
struct CellDistribution {
    /// Remaining budget of the current row.
    ia: i64,
    /// Remaining grand total minus the row budget.
    ib: i64,
    /// Remaining grand total after this column's budget is taken out.
    ic: i64,
    /// Remaining budget of the current column.
    id: i64,
    /// Remaining grand total before this cell is placed.
    ie: i64,
    /// `ib - id`.
    ii: i64,
}

/// Fills `out` with one table satisfying the margins, drawn with
/// probability proportional to its exact combinatorial likelihood.
///
/// `out` is interpreted row-major (`(r, c)` at `r * n_col + c`) and
/// must hold exactly `n_row * n_col` cells. The log-factorial table
/// must cover the margins' grand total; the stream must be exclusively
/// owned by this call.
///
/// The margins are assumed validated ([`Margins::new`] is the only
/// constructor); this function does not re-validate them. A factorial
/// table inconsistent with the margins is detected rather than read out
/// of range.
///
/// # Errors
///
/// - [`EngineError::TableTooSmall`] when the factorial table is shorter
///   than `n_total + 1`.
/// - [`EngineError::UnrealizableMargins`] when a log-factorial lookup
///   falls outside the table mid-sampling.
///
/// # Panics
///
/// Panics when `out.len() != n_row * n_col`.
pub fn sample_table<T: CellCount>(
    margins: &Margins<T>,
    log_fact: &LogFactorialTable,
    stream: &mut SampleStream,
    out: &mut [T],
) -> Result<(), EngineError> {
    let n_row = margins.n_row();
    let n_col = margins.n_col();
    assert_eq!(
        out.len(),
        margins.cells(),
        "output block must hold n_row * n_col cells"
    );

    let expected = margins.n_total() as usize + 1;
    if log_fact.len() < expected {
        return Err(EngineError::TableTooSmall {
            expected,
            got: log_fact.len(),
        });
    }

    // Remaining budgets of the interior columns. The last column has no
    // entry here; it absorbs each row's residual.
    let mut work: Vec<i64> = margins.col_sums()[..n_col - 1]
        .iter()
        .map(|&v| v.widen())
        .collect();

    // Remaining grand total over rows l..n_row.
    let mut jc = margins.n_total();

    for l in 0..n_row - 1 {
        let mut ia = margins.row_sums()[l].widen();
        let mut ic = jc;
        jc -= ia;

        for m in 0..n_col - 1 {
            let id = work[m];
            let ie = ic;
            ic -= id;
            let ib = ie - ia;

            // Nothing left to distribute: the rest of this row is
            // forced to zero, no draw taken.
            if ie == 0 {
                for cell in &mut out[l * n_col + m..(l + 1) * n_col] {
                    *cell = T::zero();
                }
                ia = 0;
                break;
            }

            let dist = CellDistribution {
                ia,
                ib,
                ic,
                id,
                ie,
                ii: ib - id,
            };
            let value = sample_cell(dist, log_fact, stream, l, m)?;

            out[l * n_col + m] = T::narrow(value);
            ia -= value;
            work[m] -= value;
        }

        // The last column absorbs the row's residual budget.
        out[l * n_col + (n_col - 1)] = T::narrow(ia);
    }

    close_final_row(margins, &work, out);
    Ok(())
}

/// Draws one cell value by inverse-CDF search over the reduced
/// hypergeometric distribution described by `dist`.
fn sample_cell(
    dist: CellDistribution,
    log_fact: &LogFactorialTable,
    stream: &mut SampleStream,
    row: usize,
    col: usize,
) -> Result<i64, EngineError> {
    let CellDistribution {
        ia,
        ib,
        ic,
        id,
        ie,
        ii,
    } = dist;

    let lf = |k: i64| -> Result<f64, EngineError> {
        log_fact
            .ln_factorial(k)
            .ok_or(EngineError::UnrealizableMargins { row, col })
    };

    let mut r = stream.open_uniform();

    loop {
        // Most probable value of this cell. The product is evaluated in
        // f64: margins whose factorial table fits in memory stay well
        // below 2^53, so the rounding is exact where it matters.
        let nlm = ((ia as f64 * id as f64) / ie as f64 + 0.5).floor() as i64;

        // Mass at the mode, in closed form from the log-factorial
        // table. One exponentiation per draw; every subsequent trial
        // mass is a multiplicative update of this one.
        let x = (lf(ia)? + lf(ib)? + lf(ic)? + lf(id)?
            - lf(ie)?
            - lf(nlm)?
            - lf(id - nlm)?
            - lf(ia - nlm)?
            - lf(ii + nlm)?)
            .exp();
        if r <= x {
            return Ok(nlm);
        }

        // Walk outward from the mode in both directions at once. Each
        // direction retires when its next ratio numerator reaches zero,
        // the boundary of the distribution's support.
        let mut sumprb = x;
        let mut up_mass = x;
        let mut down_mass = x;
        let mut up = nlm;
        let mut down = nlm;
        let mut up_done = false;
        let mut down_done = false;

        while !(up_done && down_done) {
            if !up_done {
                let numerator = (id - up) * (ia - up);
                if numerator == 0 {
                    up_done = true;
                } else {
                    up += 1;
                    up_mass *= numerator as f64 / ((up * (ii + up)) as f64);
                    sumprb += up_mass;
                    if r <= sumprb {
                        return Ok(up);
                    }
                }
            }

            if !down_done {
                let numerator = down * (ii + down);
                if numerator == 0 {
                    down_done = true;
                } else {
                    down -= 1;
                    down_mass *= numerator as f64 / (((id - down) * (ia - down)) as f64);
                    sumprb += down_mass;
                    if r <= sumprb {
                        return Ok(down);
                    }
                }
            }
        }

        // Both directions exhausted with the accumulated mass below the
        // draw: the tail masses underflowed. Rescale the draw to the
        // observed total and search again.
        r = sumprb * stream.open_uniform();
    }
}

/// Closes out the last row: the interior cells take the remaining
/// column budgets, and the final cell takes the row's residual after
/// those. The residual is accumulated explicitly here rather than
/// carried over from the sampling loops.
fn close_final_row<T: CellCount>(margins: &Margins<T>, work: &[i64], out: &mut [T]) {
    let n_col = margins.n_col();
    let last = margins.n_row() - 1;

    let mut residual = margins.row_sums()[last].widen();
    for (m, &budget) in work.iter().enumerate() {
        out[last * n_col + m] = T::narrow(budget);
        residual -= budget;
    }
    debug_assert!(residual >= 0, "final cell residual must be non-negative");
    out[last * n_col + (n_col - 1)] = T::narrow(residual);
}
