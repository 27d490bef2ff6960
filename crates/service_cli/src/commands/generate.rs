//! The `generate` command: draw tables and emit them as CSV or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use contab_core::{CellCount, Margins, TableBatch};
use contab_engine::{generate_tables, GeneratorConfig, SeedSource};
use tracing::info;

use super::parse_margin;
use crate::error::{CliError, Result};

/// Resolved arguments for the `generate` command, after configuration
/// file defaults have been merged in.
pub struct GenerateArgs {
    /// Comma-separated row sums.
    pub rows: String,
    /// Comma-separated column sums.
    pub cols: String,
    /// Number of tables to generate.
    pub count: usize,
    /// Worker count; `Some(0)` means all logical CPUs, `None` means 1.
    pub workers: Option<usize>,
    /// Root seed; 0 or absent means system entropy.
    pub seed: Option<u64>,
    /// Output format name, `csv` or `json`.
    pub format: String,
    /// Output file path; stdout when absent.
    pub output: Option<String>,
    /// Use 64-bit cells instead of 32-bit.
    pub wide: bool,
}

/// Output formats understood by the command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "unknown output format '{}', expected 'csv' or 'json'",
                other
            ))),
        }
    }
}

/// Runs the `generate` command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;

    if args.wide {
        let margins = Margins::new(
            parse_margin::<i64>(&args.rows)?,
            parse_margin::<i64>(&args.cols)?,
        )?;
        generate_and_emit(&margins, &args, format)
    } else {
        let margins = Margins::new(
            parse_margin::<i32>(&args.rows)?,
            parse_margin::<i32>(&args.cols)?,
        )?;
        generate_and_emit(&margins, &args, format)
    }
}

fn generate_and_emit<T: CellCount>(
    margins: &Margins<T>,
    args: &GenerateArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut builder = GeneratorConfig::builder()
        .count(args.count)
        .seed(SeedSource::from_option(args.seed));
    builder = match args.workers {
        Some(0) => builder.workers_auto(),
        Some(workers) => builder.workers(workers),
        None => builder,
    };
    let config = builder.build()?;

    info!(
        count = config.count(),
        workers = config.workers(),
        n_row = margins.n_row(),
        n_col = margins.n_col(),
        n_total = margins.n_total(),
        "generating tables"
    );

    let batch = generate_tables(&config, margins, None)?;

    match &args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            emit(&batch, writer, format)?;
            info!(path = path.as_str(), "tables written");
        }
        None => {
            let stdout = io::stdout();
            emit(&batch, stdout.lock(), format)?;
        }
    }
    Ok(())
}

fn emit<T: CellCount, W: Write>(
    batch: &TableBatch<T>,
    writer: W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(batch, writer),
        OutputFormat::Json => write_json(batch, writer),
    }
}

/// One CSV record per table row: `table,row,c0,...,c{n_col-1}`.
fn write_csv<T: CellCount, W: Write>(batch: &TableBatch<T>, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["table".to_string(), "row".to_string()];
    header.extend((0..batch.n_col()).map(|c| format!("c{}", c)));
    csv_writer.write_record(&header)?;

    for k in 0..batch.count() {
        for r in 0..batch.n_row() {
            let mut record = vec![k.to_string(), r.to_string()];
            record.extend((0..batch.n_col()).map(|c| batch.get(k, r, c).to_string()));
            csv_writer.write_record(&record)?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// A JSON array of tables, each a row-major array of rows.
fn write_json<T: CellCount, W: Write>(batch: &TableBatch<T>, writer: W) -> Result<()> {
    let tables: Vec<Vec<Vec<i64>>> = (0..batch.count())
        .map(|k| {
            (0..batch.n_row())
                .map(|r| {
                    (0..batch.n_col())
                        .map(|c| batch.get(k, r, c).widen())
                        .collect()
                })
                .collect()
        })
        .collect();
    serde_json::to_writer_pretty(writer, &tables)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_batch() -> TableBatch<i32> {
        let margins = Margins::new(vec![3_i32, 2], vec![4, 1]).unwrap();
        let config = GeneratorConfig::builder()
            .count(2)
            .seed(SeedSource::Explicit(42))
            .build()
            .unwrap();
        generate_tables(&config, &margins, None).unwrap()
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_csv_output_shape() {
        let batch = small_batch();
        let mut out = Vec::new();
        write_csv(&batch, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        // Header plus n_row lines per table.
        assert_eq!(lines.len(), 1 + batch.count() * batch.n_row());
        assert_eq!(lines[0], "table,row,c0,c1");
        assert!(lines[1].starts_with("0,0,"));
    }

    #[test]
    fn test_json_output_shape() {
        let batch = small_batch();
        let mut out = Vec::new();
        write_json(&batch, &mut out).unwrap();

        let parsed: Vec<Vec<Vec<i64>>> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), batch.count());
        assert_eq!(parsed[0].len(), batch.n_row());
        assert_eq!(parsed[0][0].len(), batch.n_col());
        // Row sums survive the round trip.
        let first_row_sum: i64 = parsed[0][0].iter().sum();
        assert_eq!(first_row_sum, 3);
    }
}
