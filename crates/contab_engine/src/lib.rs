//! # contab_engine: Sampling Engine for Random Contingency Tables
//!
//! Draws integer tables uniformly at random (weighted by the exact
//! combinatorial likelihood) among all tables satisfying prescribed row
//! and column sums, for exact conditional tests and Monte-Carlo
//! permutation inference.
//!
//! ## Architecture
//!
//! - [`rng`]: seedable uniform streams with worker-indexed sub-stream
//!   derivation
//! - [`sampler`]: the cell-by-cell conditional hypergeometric walk that
//!   fills one table
//! - [`batch`]: the data-parallel driver that produces many independent
//!   tables into one contiguous buffer
//! - [`config`]: validated generation configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use contab_core::Margins;
//! use contab_engine::{generate_tables, GeneratorConfig, SeedSource};
//!
//! let margins = Margins::new(vec![3_i64, 2], vec![4, 1]).unwrap();
//! let config = GeneratorConfig::builder()
//!     .count(100)
//!     .workers(2)
//!     .seed(SeedSource::Explicit(42))
//!     .build()
//!     .unwrap();
//!
//! let batch = generate_tables(&config, &margins, None).unwrap();
//! assert_eq!(batch.count(), 100);
//! for k in 0..batch.count() {
//!     assert_eq!(batch.get(k, 0, 0) + batch.get(k, 0, 1), 3);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod config;
pub mod error;
pub mod rng;
pub mod sampler;

pub use batch::{generate_table, generate_table_with, generate_tables};
pub use config::{GeneratorConfig, GeneratorConfigBuilder, MAX_TABLES, MAX_WORKERS};
pub use error::{ConfigError, EngineError};
pub use rng::{SampleStream, SeedSource};
pub use sampler::sample_table;
