use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Compile-time configuration
// ---------------------------------------------------------------------------

/// Data file read on start-up, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "road-NYOutgoing.txt";

/// Everything the viewer needs to know before the window opens.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub x_label: String,
    pub y_label: String,
    /// Bar width in x units.
    pub bar_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_title: "Road Histogram".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [600.0, 400.0],
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            bar_width: 0.8,
        }
    }
}
