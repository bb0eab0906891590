mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::HistogramApp;
use config::ChartConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ChartConfig::default();

    log::debug!("loading {}", config.data_path.display());
    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            match e.line() {
                Some(line) => log::error!("Parse failure at line {line}: {e}"),
                None => log::error!("Failed to load file: {e}"),
            }
            return Err(e).context("loading chart data");
        }
    };
    log::info!(
        "Loaded {} records from {}",
        dataset.len(),
        config.data_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    let state = AppState::new(config, dataset);

    log::debug!("opening viewer");
    // eframe::Error is not Send + Sync (some variants hold raw window
    // handles), so it cannot go through anyhow's `.context`.
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(HistogramApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    log::debug!("viewer closed");
    Ok(())
}
