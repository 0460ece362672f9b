use crate::filters::YearSelection;
use clap::Parser;
use std::path::PathBuf;

/// Terminal dashboard for the Lapor Sleman complaint dataset.
#[derive(Parser, Debug, Clone)]
#[command(name = "lapor_sleman", version)]
pub struct Config {
    /// CSV produced by the clustering/classification notebook
    #[arg(
        short,
        long,
        env = "LAPOR_SLEMAN_DATA",
        default_value = "Dataset/data_dashboard_sleman.csv"
    )]
    pub data: PathBuf,

    /// Where the archive download is written
    #[arg(long, env = "LAPOR_SLEMAN_EXPORT", default_value = "laporan_aduan_sleman.csv")]
    pub export: PathBuf,

    /// Where the summary page is saved as JSON
    #[arg(long, default_value = "ringkasan_dashboard.json")]
    pub summary_json: PathBuf,

    /// Initial year filter; omit for all years
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Rows shown in the archive table
    #[arg(long, default_value_t = 20)]
    pub preview_rows: usize,
}

impl Config {
    pub fn initial_year(&self) -> YearSelection {
        self.year.map_or(YearSelection::All, YearSelection::Year)
    }
}
