use crate::error::{DashboardError, Result};
use crate::types::{Column, Dataset, View};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::debug;

pub const ALL_YEARS_LABEL: &str = "Semua Tahun";

/// Active year filter. `All` passes every row through, undated rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSelection {
    #[default]
    All,
    Year(i32),
}

impl YearSelection {
    /// Parse user input against the years present in `dataset`.
    pub fn resolve(input: &str, dataset: &Dataset) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(ALL_YEARS_LABEL) || input == "0" {
            return Ok(YearSelection::All);
        }
        let year: i32 = input
            .parse()
            .map_err(|_| DashboardError::InvalidSelection(format!("tahun '{}'", input)))?;
        if available_years(dataset).contains(&year) {
            Ok(YearSelection::Year(year))
        } else {
            Err(DashboardError::InvalidSelection(format!(
                "tahun {} tidak ada di dataset",
                year
            )))
        }
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelection::All => f.write_str(ALL_YEARS_LABEL),
            YearSelection::Year(y) => write!(f, "{}", y),
        }
    }
}

/// Distinct years in the dataset, ascending.
pub fn available_years(dataset: &Dataset) -> Vec<i32> {
    let years: BTreeSet<i32> = dataset.reports.iter().filter_map(|r| r.year).collect();
    years.into_iter().collect()
}

pub fn filter_by_year(dataset: &Dataset, selection: YearSelection) -> View<'_> {
    let view = dataset.view();
    let filtered = match selection {
        YearSelection::All => view,
        YearSelection::Year(y) => view.filter(|r| r.year == Some(y)),
    };
    debug!(%selection, rows = filtered.len(), "Year filter applied");
    filtered
}

/// Sidebar banner describing what the year filter shows.
pub fn year_banner(dataset: &Dataset, selection: YearSelection) -> String {
    match selection {
        YearSelection::Year(y) => format!("Menampilkan data: Tahun {}", y),
        YearSelection::All => {
            let years = available_years(dataset);
            match (years.first(), years.last()) {
                (Some(first), Some(last)) if first != last => {
                    format!("Menampilkan data: {} - {}", first, last)
                }
                (Some(only), _) => format!("Menampilkan data: {}", only),
                _ => "Menampilkan data: semua laporan".to_string(),
            }
        }
    }
}

/// Every known category in first-seen order, regardless of the active filter.
pub fn all_categories(dataset: &Dataset) -> Vec<String> {
    let view = dataset.view();
    let mut seen = HashSet::new();
    view.values(Column::Category)
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}

pub fn filter_by_category<'a>(view: &View<'a>, category: &str) -> View<'a> {
    view.filter(|r| r.category_final.as_deref() == Some(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn year_filter_keeps_only_that_year() {
        let ds = fixtures::sleman();
        let view = filter_by_year(&ds, YearSelection::Year(2022));
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.year == Some(2022)));
        assert!(view.len() <= ds.len());
    }

    #[test]
    fn all_years_is_identity() {
        let ds = fixtures::sleman();
        let view = filter_by_year(&ds, YearSelection::All);
        assert_eq!(view.len(), ds.len());
        for (a, b) in view.iter().zip(ds.reports.iter()) {
            assert!(std::ptr::eq(a, b));
        }
    }

    #[test]
    fn undated_rows_never_match_a_year() {
        let ds = fixtures::sleman();
        for y in available_years(&ds) {
            assert!(filter_by_year(&ds, YearSelection::Year(y))
                .iter()
                .all(|r| r.year.is_some()));
        }
    }

    #[test]
    fn three_rows_two_in_2022() {
        let ds = fixtures::dataset(&[
            ["2022-02-01", "Jalan", "SMS", "a", "a"],
            ["2022-06-01", "Jalan", "SMS", "b", "b"],
            ["2023-01-01", "Sampah", "SMS", "c", "c"],
        ]);
        let sel = YearSelection::resolve("2022", &ds).unwrap();
        assert_eq!(filter_by_year(&ds, sel).len(), 2);
    }

    #[test]
    fn resolve_rejects_years_not_in_data() {
        let ds = fixtures::sleman();
        assert_eq!(available_years(&ds), vec![2022, 2023]);
        assert_eq!(YearSelection::resolve("", &ds).unwrap(), YearSelection::All);
        assert_eq!(
            YearSelection::resolve("semua tahun", &ds).unwrap(),
            YearSelection::All
        );
        assert!(YearSelection::resolve("2019", &ds).is_err());
        assert!(YearSelection::resolve("dua ribu", &ds).is_err());
    }

    #[test]
    fn banner_text() {
        let ds = fixtures::sleman();
        assert_eq!(year_banner(&ds, YearSelection::All), "Menampilkan data: 2022 - 2023");
        assert_eq!(
            year_banner(&ds, YearSelection::Year(2023)),
            "Menampilkan data: Tahun 2023"
        );
    }

    #[test]
    fn categories_ignore_active_filter() {
        let ds = fixtures::sleman();
        assert_eq!(
            all_categories(&ds),
            vec!["Jalan Rusak", "Sampah", "Penerangan Jalan Umum", "Administrasi"]
        );
        let view = filter_by_year(&ds, YearSelection::Year(2023));
        let sampah = filter_by_category(&view, "Sampah");
        assert_eq!(sampah.len(), 1);
    }
}
