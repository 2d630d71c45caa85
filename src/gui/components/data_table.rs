// src/gui/components/data_table.rs
//
// Draws the live tables. Purely a view over App:
// - draw_reports: canonical columns of the filtered reports
// - draw_source:  one decoded source as-is, with its own search box

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode, CursorIcon};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, report::CanonicalReport};

/// Initial widths for the canonical columns (Type, Title, Summary, ...).
const REPORT_WIDTHS: [f32; 9] = [50.0, 240.0, 320.0, 150.0, 160.0, 80.0, 120.0, 120.0, 120.0];

pub fn draw_reports(ui: &mut egui::Ui, app: &mut App) {
    let headers: Vec<&str> = CanonicalReport::COLUMNS.to_vec();
    let rows: Vec<Vec<String>> = app.visible.iter().map(|r| r.to_cells()).collect();
    table(ui, "reports_table", &headers, &REPORT_WIDTHS, rows.len(), |ri, ci| {
        rows.get(ri).and_then(|r| r.get(ci)).map(String::as_str)
    });
}

pub fn draw_source(ui: &mut egui::Ui, app: &mut App, idx: usize) {
    let Some(name) = app.set.as_ref().and_then(|s| s.tables().get(idx)).map(|t| t.name.clone()) else {
        ui.label(RichText::new("No data loaded").italics());
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!("Search {}:", name));
        if let Some(q) = app.state.gui.source_queries.get_mut(idx) {
            if ui.text_edit_singleline(q).changed() {
                logd!("UI: source {} query → {:?}", idx, q);
                app.rebuild_source_view(idx);
            }
        }
    });
    ui.add_space(4.0);

    let Some(src) = app.set.as_ref().and_then(|s| s.tables().get(idx)) else { return };
    let ix = app.source_ix.get(idx).map(Vec::as_slice).unwrap_or(&[]);
    let headers: Vec<&str> = src.table.headers.iter().map(String::as_str).collect();
    let widths = vec![140.0; headers.len()];

    table(ui, ("source_table", idx), &headers, &widths, ix.len(), |ri, ci| {
        let row = ix.get(ri).and_then(|&r| src.table.rows.get(r))?;
        row.values().nth(ci)
    });
}

fn table<'c>(
    ui: &mut egui::Ui,
    salt: impl std::hash::Hash,
    headers: &[&str],
    widths: &[f32],
    nrows: usize,
    cell: impl Fn(usize, usize) -> Option<&'c str>,
) {
    let cols = headers.len();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;     // minimal gap to content (avoid overlap)
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt(("table_hscroll", &salt))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut tb = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", &salt, cols));
            for ci in 0..cols {
                let w = widths.get(ci).copied().unwrap_or(80.0);
                tb = tb.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            tb.header(24.0, |mut header| {
                for h in headers {
                    header.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            let resp = ui.add(egui::Label::new(RichText::new(*h).strong()).selectable(false));
                            resp.on_hover_cursor(CursorIcon::Default);
                        });
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, nrows, |mut row| {
                    let ri = row.index();
                    for ci in 0..cols {
                        let text = cell(ri, ci).unwrap_or_default();
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(text);
                            });
                        });
                    }
                });
            });
        });
}
