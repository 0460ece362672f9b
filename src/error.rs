use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The dataset file is missing or cannot be opened. Halts the session.
    #[error("File '{}' TIDAK DITEMUKAN! ({source})", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent from the dataset file.
    #[error("Kolom wajib '{0}' tidak ada di dataset")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User picked a year or category that is not in the dataset.
    #[error("Pilihan tidak valid: {0}")]
    InvalidSelection(String),
}

impl DashboardError {
    /// Errors after which nothing else can be computed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DashboardError::SourceUnavailable { .. } | DashboardError::MissingColumn(_)
        )
    }
}
