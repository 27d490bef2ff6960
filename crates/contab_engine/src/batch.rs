//! Batch generation: data-parallel fan-out over disjoint output blocks.
//!
//! The driver builds (or reuses) the log-factorial table once, splits
//! the output buffer into one contiguous region per worker, derives an
//! independent stream per worker slot, and runs the per-table sampler
//! on a rayon pool. Regions never overlap and the margins/factorial
//! table are read-only for the batch's duration, so the fan-out needs
//! no locks and no atomics.

use contab_core::{CellCount, LogFactorialTable, Margins, Table, TableBatch};
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::EngineError;
use crate::rng::{SampleStream, SeedSource};
use crate::sampler::sample_table;

/// Generates one table satisfying the margins.
///
/// Builds a fresh log-factorial table and draws from the stream of
/// worker slot 0, so a single draw equals the first table of a
/// one-table, one-worker batch with the same seed.
///
/// # Errors
///
/// Propagates allocation failures from the foundation layer and
/// sampling-time precondition violations.
///
/// # Examples
///
/// ```rust
/// use contab_core::Margins;
/// use contab_engine::{generate_table, SeedSource};
///
/// let margins = Margins::new(vec![3_i32, 2], vec![4, 1]).unwrap();
/// let table = generate_table(&margins, SeedSource::Explicit(42)).unwrap();
/// assert_eq!(table.row_sum(0), 3);
/// assert_eq!(table.col_sum(0), 4);
/// ```
pub fn generate_table<T: CellCount>(
    margins: &Margins<T>,
    seed: SeedSource,
) -> Result<Table<T>, EngineError> {
    let log_fact = LogFactorialTable::for_margins(margins)?;
    let mut table = Table::new_zeroed(margins.n_row(), margins.n_col())?;
    let mut stream = SampleStream::for_worker(seed.resolve(), 0);
    sample_table(margins, &log_fact, &mut stream, table.as_mut_slice())?;
    Ok(table)
}

/// Generates one table into a caller-supplied buffer, reusing a
/// caller-supplied log-factorial table and stream.
///
/// This is the allocation-free form for callers generating many tables
/// with their own buffer management; `out` is filled row-major and must
/// hold exactly `n_row * n_col` cells.
///
/// # Errors
///
/// - [`EngineError::TableTooSmall`] when `log_fact` does not cover the
///   margins' grand total.
/// - [`EngineError::UnrealizableMargins`] when a log-factorial lookup
///   falls out of range mid-sampling.
pub fn generate_table_with<T: CellCount>(
    margins: &Margins<T>,
    log_fact: &LogFactorialTable,
    stream: &mut SampleStream,
    out: &mut [T],
) -> Result<(), EngineError> {
    sample_table(margins, log_fact, stream, out)
}

/// Generates `config.count()` independent tables into one contiguous
/// row-major batch.
///
/// The index range `[0, count)` is split statically into contiguous
/// chunks, one per worker, with chunk sizes differing by at most one;
/// each worker owns the stream of its slot
/// ([`SampleStream::for_worker`]) and writes into its pre-assigned
/// block region. The call blocks until every worker finishes and is
/// atomic from the caller's perspective: `Ok` carries all tables, `Err`
/// carries none.
///
/// # Reproducibility
///
/// Streams are derived per worker slot, not per table index: a batch is
/// byte-reproducible for a fixed `(seed, workers)` pair, and changing
/// the worker count re-partitions the streams. Workers beyond
/// `count` are left idle.
///
/// # Errors
///
/// Propagates configuration, allocation and sampling errors.
pub fn generate_tables<T: CellCount>(
    config: &GeneratorConfig,
    margins: &Margins<T>,
    log_fact: Option<&LogFactorialTable>,
) -> Result<TableBatch<T>, EngineError> {
    config.validate()?;

    let built;
    let log_fact = match log_fact {
        Some(table) => table,
        None => {
            built = LogFactorialTable::for_margins(margins)?;
            &built
        }
    };

    let count = config.count();
    let workers = config.workers().min(count);
    let block = margins.cells();
    let root_seed = config.seed().resolve();

    let mut batch = TableBatch::new_zeroed(count, margins.n_row(), margins.n_col())?;

    // Static partition of [0, count): chunk sizes differ by at most
    // one, so the per-worker slices tile the buffer exactly.
    let base = count / workers;
    let extra = count % workers;
    let mut regions = Vec::with_capacity(workers);
    let mut rest = batch.as_mut_slice();
    for worker in 0..workers {
        let tables_here = base + usize::from(worker < extra);
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(tables_here * block);
        regions.push(head);
        rest = tail;
    }
    debug_assert!(rest.is_empty(), "partition must cover the whole buffer");

    regions
        .into_par_iter()
        .enumerate()
        .try_for_each(|(worker, region)| {
            let mut stream = SampleStream::for_worker(root_seed, worker as u64);
            for out in region.chunks_exact_mut(block) {
                sample_table(margins, log_fact, &mut stream, out)?;
            }
            Ok::<(), EngineError>(())
        })?;

    Ok(batch)
}
