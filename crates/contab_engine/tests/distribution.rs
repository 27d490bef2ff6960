//! Distributional tests for the table sampler.
//!
//! These tests verify that sampled tables follow the exact conditional
//! law, not merely the margin constraints:
//!
//! 1. **Two-point 2x2 case**: empirical frequencies vs the analytic
//!    hypergeometric probabilities.
//! 2. **Cell expectations**: empirical cell means vs `row_i * col_j / n`.
//! 3. **Batch properties**: the invariant under a parallel fan-out.

use contab_core::Margins;
use contab_engine::{generate_tables, GeneratorConfig, SeedSource};

/// Asserts the margin invariant for one row-major block.
fn assert_margins_hold(margins: &Margins<i64>, cells: &[i64]) {
    let n_row = margins.n_row();
    let n_col = margins.n_col();
    for &cell in cells {
        assert!(cell >= 0, "negative cell {}", cell);
    }
    for r in 0..n_row {
        let sum: i64 = cells[r * n_col..(r + 1) * n_col].iter().sum();
        assert_eq!(sum, margins.row_sums()[r], "row {} sum", r);
    }
    for c in 0..n_col {
        let sum: i64 = (0..n_row).map(|r| cells[r * n_col + c]).sum();
        assert_eq!(sum, margins.col_sums()[c], "column {} sum", c);
    }
}

#[test]
fn test_two_by_two_matches_analytic_law() {
    // rows [3,2] x cols [4,1], total 5: exactly two feasible tables,
    // distinguished by cell (0,0).
    //   P(cell = 3) = C(4,3) * C(1,0) / C(5,3) = 0.4
    //   P(cell = 2) = C(4,2) * C(1,1) / C(5,3) = 0.6
    let margins = Margins::new(vec![3_i64, 2], vec![4, 1]).unwrap();
    let count = 20_000;
    let config = GeneratorConfig::builder()
        .count(count)
        .workers(1)
        .seed(SeedSource::Explicit(42))
        .build()
        .unwrap();

    let batch = generate_tables(&config, &margins, None).unwrap();

    let mut threes = 0usize;
    for k in 0..batch.count() {
        assert_margins_hold(&margins, batch.table(k));
        match batch.get(k, 0, 0) {
            3 => threes += 1,
            2 => {}
            other => panic!("cell (0,0) outside the feasible set: {}", other),
        }
    }

    // Binomial bound: sd of the empirical frequency is
    // sqrt(0.4 * 0.6 / 20_000) ~ 0.0035; 0.02 is beyond five sigma.
    let frequency = threes as f64 / count as f64;
    assert!(
        (frequency - 0.4).abs() < 0.02,
        "P(cell = 3) empirical {:.4}, analytic 0.4",
        frequency
    );
}

#[test]
fn test_cell_means_match_expectation() {
    // Under the conditional law, E[cell (i, j)] = row_i * col_j / n.
    let margins = Margins::new(vec![4_i64, 4], vec![4, 4]).unwrap();
    let count = 20_000;
    let config = GeneratorConfig::builder()
        .count(count)
        .workers(1)
        .seed(SeedSource::Explicit(7))
        .build()
        .unwrap();

    let batch = generate_tables(&config, &margins, None).unwrap();

    let mut sum = 0i64;
    for k in 0..batch.count() {
        sum += batch.get(k, 0, 0);
    }
    let mean = sum as f64 / count as f64;

    // Hypergeometric sd ~ 0.76, standard error of the mean ~ 0.0053;
    // 0.03 is well beyond five sigma.
    assert!(
        (mean - 2.0).abs() < 0.03,
        "E[cell (0,0)] empirical {:.4}, analytic 2.0",
        mean
    );
}

#[test]
fn test_parallel_batch_satisfies_invariant() {
    let margins = Margins::new(vec![7_i64, 5, 3], vec![6, 5, 4]).unwrap();
    let config = GeneratorConfig::builder()
        .count(1000)
        .workers(8)
        .seed(SeedSource::Explicit(1))
        .build()
        .unwrap();

    let batch = generate_tables(&config, &margins, None).unwrap();
    assert_eq!(batch.count(), 1000);
    for k in 0..batch.count() {
        assert_margins_hold(&margins, batch.table(k));
    }
}

#[test]
fn test_parallel_and_grand_total() {
    // Grand total of every table equals the margins' total.
    let margins = Margins::new(vec![10_i64, 8, 6], vec![9, 8, 7]).unwrap();
    let config = GeneratorConfig::builder()
        .count(200)
        .workers(4)
        .seed(SeedSource::Explicit(3))
        .build()
        .unwrap();

    let batch = generate_tables(&config, &margins, None).unwrap();
    for k in 0..batch.count() {
        let total: i64 = batch.table(k).iter().sum();
        assert_eq!(total, margins.n_total());
    }
}
