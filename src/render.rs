//! Text output: CSV or an aligned pipe table.

use crate::error::{Error, Result};
use crate::series::Series;
use csv::{Terminator, WriterBuilder};
use std::io::{self, Write};

/// Column titles, in row order.
pub const HEADER: [&str; 4] = ["Date", "Cases", "Deaths", "Recovered"];

/// Spaces on each side of a table cell.
const CELL_PADDING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    /// Markdown-like aligned table.
    Table,
}

impl OutputFormat {
    /// `"csv"` selects CSV. Any other token, including typos, selects the table.
    pub fn from_token(token: &str) -> Self {
        match token {
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

/// Render the whole series to a string.
pub fn render(series: &Series, format: OutputFormat) -> Result<String> {
    let rows = series.rows();
    match format {
        OutputFormat::Csv => write_csv(&HEADER, &rows),
        OutputFormat::Table => Ok(write_table(&HEADER, &rows)),
    }
}

/// Render into memory first, then hand the text to `out` in one write.
pub fn write_series<W: Write>(series: &Series, format: &str, mut out: W) -> Result<()> {
    let text = render(series, OutputFormat::from_token(format))?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_csv<const N: usize>(header: &[&str; N], rows: &[[String; N]]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Left-aligned table, upper-cased header, `-` separator under the header.
///
/// ```text
///   DATE       | CASES | DEATHS | RECOVERED
/// -------------|-------|--------|------------
///   2021-01-01 | 1     | 2      | 3
/// ```
fn write_table<const N: usize>(header: &[&str; N], rows: &[[String; N]]) -> String {
    let header: Vec<String> = header.iter().map(|h| h.to_uppercase()).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);

    let dashes: Vec<String> = widths
        .iter()
        .map(|w| "-".repeat(w + 2 * CELL_PADDING))
        .collect();
    out.push('-');
    out.push_str(&dashes.join("|"));
    out.push('-');
    out.push('\n');

    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let pad = " ".repeat(CELL_PADDING);
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{pad}{cell:<w$}{pad}"))
        .collect();
    out.push(' ');
    out.push_str(&cells.join("|"));
    out.push(' ');
    out.push('\n');
}
