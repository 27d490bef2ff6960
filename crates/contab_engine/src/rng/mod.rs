//! # Random Number Generation Infrastructure
//!
//! Seedable uniform streams for table sampling. Each stream is an
//! independent, exclusively-owned piece of RNG state: one stream per
//! sequential call, one stream per worker in a batch, never shared
//! between execution contexts.
//!
//! ## Design
//!
//! - **Reproducibility**: streams are seeded; a fixed seed replays a
//!   fixed sequence.
//! - **Sub-stream derivation**: batch workers derive statistically
//!   independent streams from one root seed plus a worker-index
//!   discriminator ([`SampleStream::for_worker`]).
//! - **Explicit entropy policy**: the seed-or-system-entropy decision
//!   is an injectable [`SeedSource`], not a default buried inside the
//!   sampler.
//! - **Open-interval draws**: [`SampleStream::open_uniform`] samples
//!   the open interval `(0, 1)`; the inverse-CDF acceptance tests in
//!   the sampler rely on the endpoints being excluded.

mod stream;

pub use stream::{SampleStream, SeedSource};
