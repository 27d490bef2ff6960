//! Generation configuration.
//!
//! This module provides the validated configuration consumed by the
//! batch driver, constructed through a builder.

use crate::error::ConfigError;
use crate::rng::SeedSource;

/// Maximum number of tables allowed in one batch.
pub const MAX_TABLES: usize = 100_000_000;

/// Maximum number of parallel workers allowed.
pub const MAX_WORKERS: usize = 1024;

/// Immutable batch-generation configuration.
///
/// Use [`GeneratorConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use contab_engine::{GeneratorConfig, SeedSource};
///
/// let config = GeneratorConfig::builder()
///     .count(10_000)
///     .workers(8)
///     .seed(SeedSource::Explicit(42))
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.count(), 10_000);
/// assert_eq!(config.workers(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of tables to generate.
    count: usize,
    /// Number of parallel workers.
    workers: usize,
    /// Entropy policy for the root stream.
    seed: SeedSource,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the number of tables to generate.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of parallel workers.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the entropy policy for the root stream.
    #[inline]
    pub fn seed(&self) -> SeedSource {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `count` is 0 or greater than 100,000,000
    /// - `workers` is 0 or greater than 1,024
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count > MAX_TABLES {
            return Err(ConfigError::InvalidTableCount(self.count));
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
///
/// `count` must be supplied; `workers` defaults to 1 and `seed` to
/// [`SeedSource::Entropy`].
#[derive(Clone, Debug)]
pub struct GeneratorConfigBuilder {
    count: Option<usize>,
    workers: usize,
    seed: SeedSource,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self {
            count: None,
            workers: 1,
            seed: SeedSource::Entropy,
        }
    }
}

impl GeneratorConfigBuilder {
    /// Sets the number of tables to generate.
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the number of parallel workers.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the worker count to the number of logical CPUs.
    #[inline]
    pub fn workers_auto(mut self) -> Self {
        self.workers = num_cpus::get().clamp(1, MAX_WORKERS);
        self
    }

    /// Sets the entropy policy for the root stream.
    #[inline]
    pub fn seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `count` is missing or any parameter is
    /// out of range.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let count = self
            .count
            .ok_or(ConfigError::MissingParameter { name: "count" })?;

        let config = GeneratorConfig {
            count,
            workers: self.workers,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
