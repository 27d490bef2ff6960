//! The `check` command: validate margins without generating tables.

use contab_core::Margins;

use super::parse_margin;
use crate::error::Result;

/// Runs the `check` command.
///
/// Validates the margins exactly as `generate` would and reports the
/// table shape and grand total on success.
pub fn run(rows: &str, cols: &str) -> Result<()> {
    let margins = Margins::new(parse_margin::<i64>(rows)?, parse_margin::<i64>(cols)?)?;

    println!(
        "margins ok: {} x {} table, grand total {}",
        margins.n_row(),
        margins.n_col(),
        margins.n_total()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_valid_margins_accepted() {
        assert!(run("3,2", "4,1").is_ok());
    }

    #[test]
    fn test_mismatched_totals_rejected() {
        let result = run("3,2", "4,2");
        assert!(matches!(result, Err(CliError::Margins(_))));
    }

    #[test]
    fn test_single_row_rejected() {
        let result = run("5", "3,2");
        assert!(matches!(result, Err(CliError::Margins(_))));
    }
}
