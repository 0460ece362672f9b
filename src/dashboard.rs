//! Page models for the three dashboard menus.
//!
//! Each builder runs the full pipeline for one page over the year-filtered
//! view and returns plain data; rendering happens in `main`.
use crate::category::{frequency_by, top_value, SortOrder};
use crate::error::{DashboardError, Result};
use crate::filters::{all_categories, filter_by_category};
use crate::keywords::{
    joined_text, rank_tokens, top_keywords, RECOMMENDATION_TOP_K, WORDCLOUD_MAX_WORDS,
};
use crate::recommend::{recommend, Recommendation};
use crate::search::{archive_rows, search};
use crate::summary::{mode_or_sentinel, monthly_trend, scorecard, EMPTY_SENTINEL};
use crate::types::{
    ArchiveRow, Column, Dataset, FrequencyRow, KeywordCount, Scorecard, TrendPoint, View,
};
use crate::util::format_int;
use serde::Serialize;

pub const NO_TREND_DATA: &str = "Data tidak tersedia untuk periode ini.";
pub const EMPTY_ANALYSIS: &str = "Data Kosong di Tahun/Filter yang dipilih.";
pub const EMPTY_ANALYSIS_HINT: &str = "Saran: Coba ganti filter 'Tahun' menjadi 'Semua Tahun'.";
pub const NO_TEXT_ROWS: &str = "Tidak ada data teks.";
pub const TOO_LITTLE_TEXT: &str = "Teks terlalu sedikit.";

#[derive(Debug, Clone, Serialize)]
pub struct SummaryPage {
    pub scorecard: Scorecard,
    pub trend: Vec<TrendPoint>,
}

impl SummaryPage {
    /// Informational message when there is nothing to chart.
    pub fn trend_message(&self) -> Option<&'static str> {
        self.trend.is_empty().then_some(NO_TREND_DATA)
    }
}

pub fn build_summary(view: &View<'_>) -> SummaryPage {
    SummaryPage {
        scorecard: scorecard(view),
        trend: monthly_trend(view),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordCloud {
    Words(Vec<KeywordCount>),
    NoRows,
    TooLittleText,
}

impl WordCloud {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            WordCloud::Words(_) => None,
            WordCloud::NoRows => Some(NO_TEXT_ROWS),
            WordCloud::TooLittleText => Some(TOO_LITTLE_TEXT),
        }
    }
}

pub fn build_wordcloud(view: &View<'_>, category: &str) -> WordCloud {
    let rows = filter_by_category(view, category);
    if rows.is_empty() {
        return WordCloud::NoRows;
    }
    let text = joined_text(&rows, Column::TopicCleaned);
    if text.chars().count() <= 1 {
        return WordCloud::TooLittleText;
    }
    WordCloud::Words(rank_tokens(&text, Some(WORDCLOUD_MAX_WORDS)))
}

#[derive(Debug, Clone)]
pub struct Analysis {
    /// Ascending by count, top issue last.
    pub categories: Vec<FrequencyRow>,
    pub top_issue: String,
    /// Descending by count.
    pub media: Vec<FrequencyRow>,
    pub top_media: String,
    /// Selector options, from the whole dataset.
    pub category_options: Vec<String>,
    pub wordcloud_category: Option<String>,
    pub wordcloud: WordCloud,
    /// Index into `category_options` the solution selector starts on.
    pub default_solution_index: usize,
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Clone)]
pub enum AnalysisPage {
    Empty,
    Ready(Box<Analysis>),
}

/// Builds the analysis page. `None` selections fall back to the first
/// category for the word cloud and to the top issue for recommendations.
pub fn build_analysis(
    dataset: &Dataset,
    view: &View<'_>,
    wordcloud_category: Option<&str>,
    solution_category: Option<&str>,
) -> AnalysisPage {
    if view.is_empty() {
        return AnalysisPage::Empty;
    }
    let categories = frequency_by(view, Column::Category, SortOrder::Ascending);
    let top_issue = top_value(view, Column::Category).unwrap_or(EMPTY_SENTINEL);
    let media = frequency_by(view, Column::Media, SortOrder::Descending);
    let top_media = top_value(view, Column::Media).unwrap_or(EMPTY_SENTINEL);

    let category_options = all_categories(dataset);
    let wordcloud_category = wordcloud_category
        .map(str::to_string)
        .or_else(|| category_options.first().cloned());
    let wordcloud = match &wordcloud_category {
        Some(c) => build_wordcloud(view, c),
        None => WordCloud::NoRows,
    };

    let default_solution_index = category_options
        .iter()
        .position(|c| c.as_str() == top_issue)
        .unwrap_or(0);
    let solution = solution_category
        .map(str::to_string)
        .or_else(|| category_options.get(default_solution_index).cloned());
    let recommendation = solution.map(|category| {
        let rows = filter_by_category(view, &category);
        let keywords: Vec<String> =
            top_keywords(&rows, Column::TopicCleaned, Some(RECOMMENDATION_TOP_K))
                .into_iter()
                .map(|k| k.word)
                .collect();
        let busiest_month = mode_or_sentinel(view, Column::MonthName);
        recommend(&category, &keywords, top_media, &busiest_month)
    });

    AnalysisPage::Ready(Box::new(Analysis {
        categories,
        top_issue: top_issue.to_string(),
        media,
        top_media: top_media.to_string(),
        category_options,
        wordcloud_category,
        wordcloud,
        default_solution_index,
        recommendation,
    }))
}

/// Resolve a selector answer: a 1-based option number or an option name
/// (case-insensitive). Blank input keeps `default`.
pub fn select_option(options: &[String], input: &str, default: usize) -> Result<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default.min(options.len().saturating_sub(1)));
    }
    if let Ok(n) = input.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Ok(n - 1);
        }
        return Err(DashboardError::InvalidSelection(format!("nomor {}", n)));
    }
    options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(input))
        .ok_or_else(|| DashboardError::InvalidSelection(format!("kategori '{}'", input)))
}

#[derive(Debug, Clone)]
pub struct ArchivePage {
    /// Rows in the download, which ignores the search box.
    pub export_rows: usize,
    pub rows: Vec<ArchiveRow>,
}

impl ArchivePage {
    pub fn caption(&self) -> String {
        format!("Menampilkan {} baris data.", format_int(self.rows.len()))
    }
}

pub fn build_archive(view: &View<'_>, query: Option<&str>) -> ArchivePage {
    let hits = search(view, query, Column::Topic);
    ArchivePage {
        export_rows: view.len(),
        rows: archive_rows(&hits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{filter_by_year, YearSelection};
    use crate::fixtures;
    use crate::recommend::{ChannelKind, IssueKind};

    fn ready(page: AnalysisPage) -> Analysis {
        match page {
            AnalysisPage::Ready(a) => *a,
            AnalysisPage::Empty => panic!("expected analysis"),
        }
    }

    #[test]
    fn year_selection_drives_summary_total() {
        let ds = fixtures::dataset(&[
            ["2022-01-05", "Jalan", "SMS", "a", "a"],
            ["2022-08-05", "Sampah", "SMS", "b", "b"],
            ["2023-02-05", "Jalan", "SMS", "c", "c"],
        ]);
        let view = filter_by_year(&ds, YearSelection::Year(2022));
        let page = build_summary(&view);
        assert_eq!(page.scorecard.total_reports, 2);
        assert_eq!(page.trend.len(), 2);
        assert_eq!(page.trend_message(), None);
    }

    #[test]
    fn top_issue_and_road_recommendation() {
        let ds = fixtures::sleman();
        let view = ds.view();
        let a = ready(build_analysis(&ds, &view, None, None));
        assert_eq!(a.top_issue, "Jalan Rusak");
        assert_eq!(a.categories.last().map(|r| r.value.as_str()), Some("Jalan Rusak"));
        assert_eq!(a.top_media, "Instagram");
        assert_eq!(a.media[0].value, "Instagram");
        assert_eq!(a.default_solution_index, 0);

        let rec = a.recommendation.unwrap();
        assert_eq!(rec.category, "Jalan Rusak");
        assert_eq!(rec.issue.kind, IssueKind::Road);
        assert_eq!(rec.keywords[..2], ["jalan".to_string(), "lubang".to_string()]);
        assert_eq!(rec.channel.kind, ChannelKind::Social);
        assert!(rec.seasonal_alert.contains("March"));
    }

    #[test]
    fn explicit_solution_category_and_direct_channel() {
        let ds = fixtures::dataset(&[
            ["2022-01-05", "Sampah", "WhatsApp", "a", "sampah bakar"],
            ["2022-01-06", "Sampah", "WhatsApp", "b", "sampah pohon"],
            ["2022-02-07", "Jalan Rusak", "Instagram", "c", "lubang"],
        ]);
        let view = ds.view();
        let a = ready(build_analysis(&ds, &view, Some("Jalan Rusak"), Some("Jalan Rusak")));
        assert_eq!(a.top_media, "WhatsApp");
        let rec = a.recommendation.unwrap();
        assert_eq!(rec.issue.kind, IssueKind::Road);
        assert_eq!(rec.keywords, vec!["lubang".to_string()]);
        assert_eq!(rec.channel.kind, ChannelKind::Direct);
        assert!(rec.channel.message.contains("WhatsApp"));
        assert!(rec.seasonal_alert.contains("January"));
    }

    #[test]
    fn default_solution_points_at_top_issue() {
        let ds = fixtures::dataset(&[
            ["2022-01-05", "Sampah", "SMS", "a", "a"],
            ["2023-01-06", "Jalan", "SMS", "b", "b"],
            ["2023-01-07", "Jalan", "SMS", "c", "c"],
        ]);
        let view = filter_by_year(&ds, YearSelection::Year(2023));
        let a = ready(build_analysis(&ds, &view, None, None));
        assert_eq!(a.category_options, vec!["Sampah", "Jalan"]);
        assert_eq!(a.default_solution_index, 1);
        // word cloud defaults to the first option, which has no 2023 rows
        assert_eq!(a.wordcloud_category.as_deref(), Some("Sampah"));
        assert_eq!(a.wordcloud, WordCloud::NoRows);
    }

    #[test]
    fn wordcloud_states() {
        let ds = fixtures::dataset(&[
            ["2022-01-05", "Jalan", "SMS", "a", "x"],
            ["2022-01-06", "Sampah", "SMS", "b", "sampah sampah bakar"],
        ]);
        let view = ds.view();
        assert_eq!(build_wordcloud(&view, "Jalan"), WordCloud::TooLittleText);
        assert_eq!(build_wordcloud(&view, "Lampu").message(), Some(NO_TEXT_ROWS));
        match build_wordcloud(&view, "Sampah") {
            WordCloud::Words(words) => {
                assert_eq!(words[0].word, "sampah");
                assert_eq!(words[0].count, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_year_renders_empty_states_everywhere() {
        let ds = fixtures::sleman();
        let view = filter_by_year(&ds, YearSelection::Year(2030));
        let summary = build_summary(&view);
        assert_eq!(summary.scorecard.total_reports, 0);
        assert_eq!(summary.scorecard.top_category, EMPTY_SENTINEL);
        assert_eq!(summary.trend_message(), Some(NO_TREND_DATA));
        assert!(matches!(build_analysis(&ds, &view, None, None), AnalysisPage::Empty));
        let archive = build_archive(&view, Some("jalan"));
        assert!(archive.rows.is_empty());
        assert_eq!(archive.export_rows, 0);
        assert_eq!(archive.caption(), "Menampilkan 0 baris data.");
    }

    #[test]
    fn archive_search_does_not_shrink_export() {
        let ds = fixtures::sleman();
        let view = filter_by_year(&ds, YearSelection::Year(2022));
        let page = build_archive(&view, Some("LUBANG"));
        assert_eq!(page.export_rows, 3);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.caption(), "Menampilkan 2 baris data.");
    }

    #[test]
    fn selector_answers() {
        let options = vec!["Jalan Rusak".to_string(), "Sampah".to_string()];
        assert_eq!(select_option(&options, "", 1).unwrap(), 1);
        assert_eq!(select_option(&options, "1", 1).unwrap(), 0);
        assert_eq!(select_option(&options, "sampah", 0).unwrap(), 1);
        assert!(select_option(&options, "3", 0).is_err());
        assert!(select_option(&options, "Lampu", 0).is_err());
    }
}
