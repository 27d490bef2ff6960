//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod generate;

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{CliError, Result};

/// Parses a comma-separated margin list such as `3,2` or `10, 8, 6`.
pub(crate) fn parse_margin<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    text.split(',')
        .map(|entry| {
            entry.trim().parse::<T>().map_err(|err| {
                CliError::InvalidArgument(format!("margin entry '{}': {}", entry.trim(), err))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_margin_basic() {
        let parsed: Vec<i64> = parse_margin("3,2").unwrap();
        assert_eq!(parsed, vec![3, 2]);
    }

    #[test]
    fn test_parse_margin_with_spaces() {
        let parsed: Vec<i32> = parse_margin("10, 8, 6").unwrap();
        assert_eq!(parsed, vec![10, 8, 6]);
    }

    #[test]
    fn test_parse_margin_rejects_garbage() {
        let result: Result<Vec<i64>> = parse_margin("3,x");
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_margin_rejects_empty_entry() {
        let result: Result<Vec<i64>> = parse_margin("3,,2");
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
