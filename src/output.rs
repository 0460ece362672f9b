use crate::error::{DashboardError, Result};
use crate::types::{Dataset, View};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

/// Source column indices to export, in source order. `None` selects every
/// source column.
fn export_indices(dataset: &Dataset, columns: Option<&[&str]>) -> Result<Vec<usize>> {
    let Some(columns) = columns else {
        return Ok((0..dataset.headers.len()).collect());
    };
    for wanted in columns {
        if !dataset.headers.iter().any(|h| h == *wanted) {
            return Err(DashboardError::MissingColumn(wanted.to_string()));
        }
    }
    Ok(dataset
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| columns.contains(h))
        .map(|(i, _)| i)
        .collect())
}

/// Serialize every row of `view` as CSV, keeping the source text of each
/// selected column.
pub fn write_view_csv<W: Write>(
    writer: W,
    dataset: &Dataset,
    view: &View<'_>,
    columns: Option<&[&str]>,
) -> Result<()> {
    let indices = export_indices(dataset, columns)?;
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(indices.iter().map(|&i| &dataset.headers[i]))?;
    for report in view.iter() {
        wtr.write_record(indices.iter().map(|&i| report.raw.get(i).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// UTF-8 CSV bytes for a download button.
pub fn view_to_csv_bytes(
    dataset: &Dataset,
    view: &View<'_>,
    columns: Option<&[&str]>,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_view_csv(&mut buf, dataset, view, columns)?;
    Ok(buf)
}

pub fn export_view(path: &Path, dataset: &Dataset, view: &View<'_>) -> Result<()> {
    std::fs::write(path, view_to_csv_bytes(dataset, view, None)?)?;
    info!(rows = view.len(), path = %path.display(), "Archive exported");
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        println!("(tidak ada baris)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
