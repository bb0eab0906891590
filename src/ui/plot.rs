use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::config::ChartConfig;
use crate::data::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Bar chart (central panel)
// ---------------------------------------------------------------------------

/// One vertical bar per record: argument `x`, value `y`, baseline 0.
pub fn build_bars(dataset: &Dataset, bar_width: f64) -> Vec<Bar> {
    let fill = color::bar_fill();
    let stroke = Stroke::new(1.0, color::bar_stroke());

    dataset
        .xs()
        .iter()
        .zip(dataset.ys())
        .map(|(&x, &y)| {
            Bar::new(x as f64, y as f64)
                .base_offset(0.0)
                .width(bar_width)
                .name(Record::new(x, y))
                .fill(fill)
                .stroke(stroke)
        })
        .collect()
}

/// Render the dataset as a bar chart filling the available space.
pub fn bar_chart(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig) {
    let chart = BarChart::new(build_bars(dataset, config.bar_width))
        .name("records")
        .color(color::bar_fill());

    Plot::new("bar_chart")
        .x_axis_label(config.x_label.as_str())
        .y_axis_label(config.y_label.as_str())
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
