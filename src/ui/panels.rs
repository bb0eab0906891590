use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status strip above the chart.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong(state.source_name());
        ui.separator();

        if state.dataset.is_empty() {
            ui.label(RichText::new("File contains no records").color(Color32::YELLOW));
        } else {
            ui.label(state.summary());
        }
    });
}
