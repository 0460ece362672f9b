// Session state: the dataset is read once, on first access, and reused for
// every page until the process exits.
use crate::config::Config;
use crate::error::Result;
use crate::filters::{filter_by_year, YearSelection};
use crate::loader::{load_dataset, LoadReport};
use crate::types::{Dataset, View};
use once_cell::unsync::OnceCell;
use tracing::info;

pub struct AppState {
    pub config: Config,
    pub year: YearSelection,
    dataset: OnceCell<(Dataset, LoadReport)>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            year: YearSelection::All,
            config,
            dataset: OnceCell::new(),
        }
    }

    /// Loads the dataset on the first call.
    pub fn dataset(&self) -> Result<&Dataset> {
        self.loaded().map(|(ds, _)| ds)
    }

    pub fn load_report(&self) -> Result<&LoadReport> {
        self.loaded().map(|(_, report)| report)
    }

    fn loaded(&self) -> Result<&(Dataset, LoadReport)> {
        self.dataset.get_or_try_init(|| {
            let loaded = load_dataset(&self.config.data)?;
            info!(rows = loaded.0.len(), "Dataset cached for this session");
            Ok(loaded)
        })
    }

    /// Rows passing the active year filter.
    pub fn filtered(&self) -> Result<View<'_>> {
        Ok(filter_by_year(self.dataset()?, self.year))
    }
}
