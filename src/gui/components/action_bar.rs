// src/gui/components/action_bar.rs

use eframe::egui;
use crate::{config::state::ViewKind, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy the current view as CSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        let count = match app.state.gui.view {
            ViewKind::Source(i) => {
                let shown = app.source_ix.get(i).map(|v| v.len()).unwrap_or(0);
                let total = app.set.as_ref()
                    .and_then(|s| s.tables().get(i))
                    .map(|t| t.table.row_count())
                    .unwrap_or(0);
                format!("{} / {} rows", shown, total)
            }
            _ => format!("{} / {} reports", app.visible.len(), app.total()),
        };
        ui.label(egui::RichText::new(count).strong());

        ui.separator();
        ui.label(app.status_text());
    });
}
