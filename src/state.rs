use crate::config::ChartConfig;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Built once before the
/// window opens and never mutated afterwards.
pub struct AppState {
    pub config: ChartConfig,

    /// Parsed contents of `config.data_path`.
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(config: ChartConfig, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    /// File name shown in the top bar.
    pub fn source_name(&self) -> String {
        self.config
            .data_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.data_path.display().to_string())
    }

    /// One-line description of the loaded data.
    pub fn summary(&self) -> String {
        match self.dataset.y_range() {
            Some((min, max)) => format!(
                "{} records, y from {min} to {max}",
                self.dataset.len()
            ),
            None => "no records".to_string(),
        }
    }
}
