use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row as it appears in the dataset file. Columns beyond these are kept
/// only in `Report::raw` for export.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Tanggal")]
    pub tanggal: Option<String>,
    #[serde(rename = "Kategori_Final")]
    pub kategori_final: Option<String>,
    #[serde(rename = "Media")]
    pub media: Option<String>,
    #[serde(rename = "Topik")]
    pub topik: Option<String>,
    #[serde(rename = "Topik_Cleaned_Final")]
    pub topik_cleaned_final: Option<String>,
}

/// Columns the pipeline reads by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Category,
    Media,
    Topic,
    TopicCleaned,
    MonthName,
}

impl Column {
    pub const REQUIRED: [Column; 5] = [
        Column::Date,
        Column::Category,
        Column::Media,
        Column::Topic,
        Column::TopicCleaned,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "Tanggal",
            Column::Category => "Kategori_Final",
            Column::Media => "Media",
            Column::Topic => "Topik",
            Column::TopicCleaned => "Topik_Cleaned_Final",
            Column::MonthName => "Bulan",
        }
    }
}

/// A single complaint report.
#[derive(Debug, Clone)]
pub struct Report {
    /// Source text of `Tanggal`, kept for display even when unparseable.
    pub raw_date: Option<String>,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month_name: Option<String>,
    pub category_final: Option<String>,
    pub media: Option<String>,
    pub topic: Option<String>,
    pub topic_cleaned: Option<String>,
    /// Source fields, in source column order.
    pub raw: StringRecord,
}

impl Report {
    /// Text value of a categorical or text column. The date column yields
    /// the raw source text.
    pub fn field(&self, column: Column) -> Option<&str> {
        match column {
            Column::Date => self.raw_date.as_deref(),
            Column::Category => self.category_final.as_deref(),
            Column::Media => self.media.as_deref(),
            Column::Topic => self.topic.as_deref(),
            Column::TopicCleaned => self.topic_cleaned.as_deref(),
            Column::MonthName => self.month_name.as_deref(),
        }
    }
}

/// The full dataset, immutable after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: StringRecord,
    pub reports: Vec<Report>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Every row, in source order.
    pub fn view(&self) -> View<'_> {
        View {
            rows: self.reports.iter().collect(),
        }
    }
}

/// A read-only projection of a `Dataset`. Row order follows the source.
#[derive(Debug, Clone, Default)]
pub struct View<'a> {
    rows: Vec<&'a Report>,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Report> + '_ {
        self.rows.iter().copied()
    }

    /// Non-null values of `column`, in row order.
    pub fn values(&self, column: Column) -> impl Iterator<Item = &'a str> + '_ {
        self.rows.iter().copied().filter_map(move |r| r.field(column))
    }

    pub fn filter<F>(&self, mut keep: F) -> View<'a>
    where
        F: FnMut(&Report) -> bool,
    {
        View {
            rows: self.rows.iter().copied().filter(|r| keep(*r)).collect(),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct FrequencyRow {
    #[serde(rename = "Nilai")]
    #[tabled(rename = "Nilai")]
    pub value: String,
    #[serde(rename = "Jumlah")]
    #[tabled(rename = "Jumlah")]
    pub count: usize,
    #[serde(rename = "Persen")]
    #[tabled(rename = "Persen")]
    pub share: String,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    #[serde(rename = "Periode")]
    #[tabled(rename = "Periode")]
    pub period: String,
    #[serde(rename = "Jumlah")]
    #[tabled(rename = "Jumlah")]
    pub count: usize,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    #[serde(rename = "Kata")]
    #[tabled(rename = "Kata")]
    pub word: String,
    #[serde(rename = "Frekuensi")]
    #[tabled(rename = "Frekuensi")]
    pub count: usize,
}

#[derive(Debug, Tabled, Clone)]
pub struct ArchiveRow {
    #[tabled(rename = "Tanggal")]
    pub tanggal: String,
    #[tabled(rename = "Media")]
    pub media: String,
    #[tabled(rename = "Topik")]
    pub topik: String,
    #[tabled(rename = "Kategori_Final")]
    pub kategori_final: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub total_reports: usize,
    pub top_category: String,
    pub top_media: String,
    pub busiest_month: String,
}
