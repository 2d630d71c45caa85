// src/gui/components/tabs.rs
//
// Top tabs: Reports (cards), Table, then one raw table per source.
// Below them, the report-type badges that toggle the type clause.

use eframe::egui;
use crate::{config::state::ViewKind, filter::FilterState, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.view;
        let mut next = cur;

        ui.selectable_value(&mut next, ViewKind::Cards, "Reports");
        ui.selectable_value(&mut next, ViewKind::Table, "Table");

        let names: Vec<String> = app
            .set
            .as_ref()
            .map(|s| s.tables().iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default();
        for (i, name) in names.iter().enumerate() {
            ui.selectable_value(&mut next, ViewKind::Source(i), name.as_str());
        }

        if next != cur {
            app.set_view(next);
        }
    });

    // Type badges only apply to the report views.
    if matches!(app.state.gui.view, ViewKind::Source(_)) {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.label("Type:");
        let mut changed = false;
        for badge in app.state.options.type_badges.clone() {
            let on = app.state.gui.filter.report_types.contains(&badge);
            let text = egui::RichText::new(badge.as_str()).strong();
            if ui.selectable_label(on, text).clicked() {
                FilterState::toggle(&mut app.state.gui.filter.report_types, &badge);
                changed = true;
            }
        }
        if changed {
            logf!("UI: types → {:?}", app.state.gui.filter.report_types);
            app.rebuild_view();
        }
    });
}
