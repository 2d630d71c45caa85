// src/gui/actions/copy.rs
use eframe::egui;
use crate::{config::state::ViewKind, csv, gui::app::App, report::CanonicalReport};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = match app.state.gui.view {
        ViewKind::Cards | ViewKind::Table => {
            if app.visible.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
                return;
            }
            let rows: Vec<Vec<String>> = app.visible.iter().map(|r| r.to_cells()).collect();
            logf!("Copy: reports rows={}", rows.len());
            csv::rows_to_string(Some(&CanonicalReport::COLUMNS[..]), &as_strs(&rows), ',')
        }
        ViewKind::Source(i) => {
            let Some(src) = app.set.as_ref().and_then(|s| s.tables().get(i)) else {
                app.status("Nothing to copy (no data)");
                logd!("Copy: Clicked, but source {} is not loaded", i);
                return;
            };
            let ix = app.source_ix.get(i).map(Vec::as_slice).unwrap_or(&[]);
            if ix.is_empty() {
                app.status("Nothing to copy");
                return;
            }
            let rows: Vec<Vec<&str>> = ix
                .iter()
                .filter_map(|&r| src.table.rows.get(r))
                .map(|row| row.values().collect())
                .collect();
            let headers: Vec<&str> = src.table.headers.iter().map(String::as_str).collect();
            logf!("Copy: source={} rows={}", src.name, rows.len());
            csv::rows_to_string(Some(&headers[..]), &rows, ',')
        }
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

fn as_strs(rows: &[Vec<String>]) -> Vec<Vec<&str>> {
    rows.iter().map(|r| r.iter().map(String::as_str).collect()).collect()
}
