//! Error types for the sampling engine.

use contab_core::CoreError;
use thiserror::Error;

/// Configuration errors raised by the [`GeneratorConfig`] builder.
///
/// [`GeneratorConfig`]: crate::config::GeneratorConfig
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Table count outside the valid range [1, 100_000_000].
    #[error("invalid table count {0}: must be in range [1, 100_000_000]")]
    InvalidTableCount(usize),

    /// Worker count outside the valid range [1, 1024].
    #[error("invalid worker count {0}: must be in range [1, 1024]")]
    InvalidWorkerCount(usize),

    /// A required builder parameter was not supplied.
    #[error("missing parameter '{name}'")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },
}

/// Errors raised while generating tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Margin validation or buffer allocation failed in the foundation
    /// layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The generation configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A log-factorial lookup fell outside the table while sampling a
    /// cell. This indicates margins and factorial table that are
    /// mutually inconsistent (for example a caller-supplied table built
    /// for a smaller total), a state the sampler refuses to read past.
    #[error("margins and factorial table are inconsistent at cell ({row}, {col}): log-factorial lookup out of range")]
    UnrealizableMargins {
        /// Row of the cell being sampled when the lookup failed.
        row: usize,
        /// Column of the cell being sampled when the lookup failed.
        col: usize,
    },

    /// A caller-supplied factorial table is too short for the margins'
    /// grand total.
    #[error("factorial table has {got} entries but the margins' total requires {expected}")]
    TableTooSmall {
        /// Entries required, `n_total + 1`.
        expected: usize,
        /// Entries supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidTableCount(0);
        assert!(err.to_string().contains("invalid table count 0"));

        let err = ConfigError::InvalidWorkerCount(2000);
        assert!(err.to_string().contains("invalid worker count 2000"));

        let err = ConfigError::MissingParameter { name: "count" };
        assert_eq!(err.to_string(), "missing parameter 'count'");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::TooFewRows { got: 1 };
        let err: EngineError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }

    #[test]
    fn test_table_too_small_display() {
        let err = EngineError::TableTooSmall {
            expected: 11,
            got: 6,
        };
        assert!(err.to_string().contains("6 entries"));
        assert!(err.to_string().contains("requires 11"));
    }
}
