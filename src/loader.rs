use crate::error::{DashboardError, Result};
use crate::types::{Column, Dataset, RawRow, Report};
use crate::util::{clean_text, month_name, parse_date_lenient};
use chrono::Datelike;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    /// Records the CSV decoder could not turn into a row at all.
    pub malformed_rows: usize,
    pub undated_rows: usize,
    pub missing_category: usize,
    pub missing_media: usize,
}

/// Open the dataset file. A missing or unreadable file is reported as
/// `SourceUnavailable` so the caller can stop with a message.
pub fn load_dataset(path: &Path) -> Result<(Dataset, LoadReport)> {
    info!("Loading dataset from {}", path.display());
    let file = File::open(path).map_err(|source| DashboardError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<(Dataset, LoadReport)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    // trimmed once so the presence check and row decoding see the same names
    let headers: StringRecord = rdr.headers()?.iter().map(str::trim).collect();
    for column in Column::REQUIRED {
        if !headers.iter().any(|h| h == column.header()) {
            return Err(DashboardError::MissingColumn(column.header().to_string()));
        }
    }

    let mut report = LoadReport::default();
    let mut reports: Vec<Report> = Vec::new();

    for result in rdr.records() {
        report.total_rows += 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", report.total_rows, e);
                report.malformed_rows += 1;
                continue;
            }
        };
        let row: RawRow = match record.deserialize(Some(&headers)) {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping malformed row {}: {}", report.total_rows, e);
                report.malformed_rows += 1;
                continue;
            }
        };

        let raw_date = clean_text(row.tanggal);
        let date = parse_date_lenient(raw_date.as_deref());
        if date.is_none() {
            report.undated_rows += 1;
        }
        let category_final = clean_text(row.kategori_final);
        if category_final.is_none() {
            report.missing_category += 1;
        }
        let media = clean_text(row.media);
        if media.is_none() {
            report.missing_media += 1;
        }

        reports.push(Report {
            raw_date,
            date,
            year: date.map(|d| d.year()),
            month_name: date.map(month_name),
            category_final,
            media,
            topic: clean_text(row.topik),
            topic_cleaned: clean_text(row.topik_cleaned_final),
            raw: record,
        });
    }

    report.loaded_rows = reports.len();
    debug!(?report, "Dataset parsed");
    Ok((Dataset { headers, reports }, report))
}
