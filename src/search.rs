use crate::summary::EMPTY_SENTINEL;
use crate::types::{ArchiveRow, Column, Report, View};

/// Rows whose `column` contains `query`, ignoring case. An empty or missing
/// query returns the view unchanged; whitespace is matched literally and null
/// cells never match.
pub fn search<'a>(view: &View<'a>, query: Option<&str>, column: Column) -> View<'a> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return view.clone(),
    };
    view.filter(|r| {
        r.field(column)
            .map(|text| text.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

pub fn archive_row(report: &Report) -> ArchiveRow {
    let cell = |c: Column| report.field(c).unwrap_or(EMPTY_SENTINEL).to_string();
    ArchiveRow {
        tanggal: report
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell(Column::Date)),
        media: cell(Column::Media),
        topik: cell(Column::Topic),
        kategori_final: cell(Column::Category),
    }
}

pub fn archive_rows(view: &View<'_>) -> Vec<ArchiveRow> {
    view.iter().map(archive_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn empty_query_is_identity() {
        let ds = fixtures::sleman();
        let view = ds.view();
        assert_eq!(search(&view, None, Column::Topic).len(), view.len());
        assert_eq!(search(&view, Some(""), Column::Topic).len(), view.len());
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let ds = fixtures::dataset(&[
            ["2022-01-01", "Jalan", "SMS", "jalanrusak", "x"],
            ["2022-01-02", "Jalan", "SMS", "jalan licin", "x"],
        ]);
        let view = ds.view();
        let spaces = search(&view, Some(" "), Column::Topic);
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces.iter().next().and_then(|r| r.topic.as_deref()), Some("jalan licin"));
        let padded = search(&view, Some("JALAN "), Column::Topic);
        assert_eq!(padded.len(), 1);
        assert_eq!(search(&view, Some("jalan"), Column::Topic).len(), 2);
    }

    #[test]
    fn search_ignores_case() {
        let ds = fixtures::sleman();
        let view = ds.view();
        let upper = search(&view, Some("JALAN"), Column::Topic);
        let lower = search(&view, Some("jalan"), Column::Topic);
        assert_eq!(upper.len(), 2);
        let a: Vec<*const Report> = upper.iter().map(|r| r as *const _).collect();
        let b: Vec<*const Report> = lower.iter().map(|r| r as *const _).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn null_cells_never_match() {
        let ds = fixtures::dataset(&[
            ["2022-01-01", "Jalan", "SMS", "", "x"],
            ["2022-01-02", "Jalan", "SMS", "jalan licin", "x"],
        ]);
        let hits = search(&ds.view(), Some("a"), Column::Topic);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.iter().next().and_then(|r| r.topic.as_deref()), Some("jalan licin"));
    }

    #[test]
    fn archive_rows_fill_missing_cells() {
        let ds = fixtures::sleman();
        let rows = archive_rows(&ds.view());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].tanggal, "2022-01-10");
        assert_eq!(rows[6].tanggal, "tidak jelas");
        assert_eq!(rows[6].kategori_final, "Administrasi");
    }
}
