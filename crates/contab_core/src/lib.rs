//! # contab_core: Foundation for Random Contingency-Table Generation
//!
//! ## Foundation Layer Role
//!
//! contab_core is the bottom layer of the workspace, providing:
//! - Validated margin totals (`margins::Margins`)
//! - The log-factorial lookup table (`math::log_factorial`)
//! - Owned table buffers with an explicit row-major layout (`table`)
//! - The generic cell-width abstraction (`types::CellCount`)
//! - Error types (`types::CoreError`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other contab crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic integral computation
//! - thiserror: Structured error derivation
//!
//! Randomness and parallelism live one layer up, in `contab_engine`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use contab_core::{LogFactorialTable, Margins};
//!
//! let margins = Margins::new(vec![3_i64, 2], vec![4, 1]).unwrap();
//! assert_eq!(margins.n_total(), 5);
//!
//! let table = LogFactorialTable::for_margins(&margins).unwrap();
//! // ln(0!) = 0, ln(3!) = ln(6)
//! assert_eq!(table.ln_factorial(0), Some(0.0));
//! assert!((table.ln_factorial(3).unwrap() - 6.0_f64.ln()).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod margins;
pub mod math;
pub mod table;
pub mod types;

pub use margins::Margins;
pub use math::log_factorial::LogFactorialTable;
pub use table::{Table, TableBatch};
pub use types::{CellCount, CoreError};
