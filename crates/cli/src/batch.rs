//! CSV batch evaluation: one shape per row, results as JSON.
//!
//! Input columns: `kind`, `regular`, `vertices` (`"x,y x,y ..."`). Every other
//! column is ignored. Rows that fail to parse or validate are kept in the
//! output with an `error` field instead of aborting the batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geometria::plane::{Shape, ShapeKind};
use polars::prelude::*;

use crate::input::{parse_flag, parse_vertices};
use crate::report::{RowReport, ShapeReport};

/// Raw cells of one CSV row.
#[derive(Clone, Debug, Default)]
pub struct ShapeRow {
    pub kind: Option<String>,
    pub regular: Option<String>,
    pub vertices: Option<String>,
}

pub fn read_rows(input: &Path) -> Result<Vec<ShapeRow>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let kinds = string_column(&df, "kind")?;
    let vertices = string_column(&df, "vertices")?;
    let regular = if df.column("regular").is_ok() {
        string_column(&df, "regular")?
    } else {
        vec![None; df.height()]
    };

    Ok(kinds
        .into_iter()
        .zip(regular)
        .zip(vertices)
        .map(|((kind, regular), vertices)| ShapeRow {
            kind,
            regular,
            vertices,
        })
        .collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::String)?;
    Ok(col
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Build the shape a row describes.
pub fn evaluate(row: &ShapeRow) -> Result<Shape> {
    let kind: ShapeKind = row.kind.as_deref().unwrap_or("").parse()?;
    let regular = parse_flag(row.regular.as_deref())?;
    let vertices = parse_vertices(row.vertices.as_deref().unwrap_or(""))?;
    Ok(Shape::new(kind, regular, vertices)?)
}

pub fn evaluate_all(rows: &[ShapeRow]) -> Vec<RowReport> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let kind = row.kind.clone().unwrap_or_default();
            match evaluate(row) {
                Ok(shape) => RowReport {
                    row: i,
                    kind,
                    shape: Some(ShapeReport::from(&shape)),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(row = i, error = %err, "row rejected");
                    RowReport {
                        row: i,
                        kind,
                        shape: None,
                        error: Some(format!("{err:#}")),
                    }
                }
            }
        })
        .collect()
}

/// Read `input`, evaluate every row, and write the reports to `out` as JSON.
/// Returns the reports for logging and tests.
pub fn run(input: &Path, out: &Path) -> Result<Vec<RowReport>> {
    let rows = read_rows(input)?;
    let reports = evaluate_all(&rows);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(reports)
}
