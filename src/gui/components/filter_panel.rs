// src/gui/components/filter_panel.rs
//
// Left panel: search box, Topic/Agency list, year picker, tag toggles.
// Every change writes into state.gui.filter and re-runs the filter.

use eframe::egui;
use crate::filter::FilterState;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;

    ui.heading("Filters");

    ui.label("Search");
    if ui
        .add(egui::TextEdit::singleline(&mut app.state.gui.filter.query).hint_text("title or summary"))
        .changed()
    {
        logd!("UI: query → {:?}", app.state.gui.filter.query);
        changed = true;
    }

    ui.add_space(6.0);

    // --- Year (single select) ---
    let years = app.facets.years.clone();
    let mut year = app.state.gui.filter.year.clone();
    egui::ComboBox::from_label("Year")
        .selected_text(year.as_deref().unwrap_or("Any"))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut year, None, "Any");
            for y in &years {
                ui.selectable_value(&mut year, Some(y.clone()), y.as_str());
            }
        });
    if year != app.state.gui.filter.year {
        logf!("UI: year → {:?}", year);
        app.state.gui.filter.year = year;
        changed = true;
    }

    ui.add_space(6.0);

    // --- Tags (free-form, multi select) ---
    if !app.facets.tags.is_empty() {
        ui.label("Tags");
        ui.horizontal_wrapped(|ui| {
            for tag in app.facets.tags.clone() {
                let on = app.state.gui.filter.tags.contains(&tag);
                if ui.selectable_label(on, tag.as_str()).clicked() {
                    FilterState::toggle(&mut app.state.gui.filter.tags, &tag);
                    changed = true;
                }
            }
        });
        ui.add_space(6.0);
    }

    ui.horizontal(|ui| {
        if ui.button("Clear filters").clicked() {
            app.state.gui.filter.clear();
            app.last_clicked = None;
            logf!("UI: filters cleared");
            changed = true;
        }
    });

    ui.separator();

    // --- Topic/Agency (multi select) ---
    ui.label(format!("Topic/Agency ({})", app.state.gui.filter.subjects.len()));

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("subjects_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let subjects = app.facets.subjects.clone();
            for (idx, name) in subjects.iter().enumerate() {
                let is_selected = app.state.gui.filter.subjects.contains(name);
                let resp = ui.selectable_label(is_selected, name.as_str());
                if !resp.clicked() { continue; }

                let modifiers = ui.input(|i| i.modifiers);
                let sel = &mut app.state.gui.filter.subjects;

                if modifiers.shift {
                    // Range from the anchor; ctrl+shift extends instead of replacing
                    let anchor = app.last_clicked.unwrap_or(idx);
                    let (lo, hi) = if anchor <= idx { (anchor, idx) } else { (idx, anchor) };
                    if !modifiers.ctrl { sel.clear(); }
                    for s in &subjects[lo..=hi] { sel.insert(s.clone()); }
                } else if modifiers.ctrl {
                    FilterState::toggle(sel, name);
                } else if is_selected && sel.len() == 1 {
                    // Clicking the only selected entry clears it
                    sel.clear();
                } else {
                    sel.clear();
                    sel.insert(name.clone());
                }
                app.last_clicked = Some(idx);
                changed = true;
            }
        });

    if changed {
        app.rebuild_view();
        logd!(
            "UI: filter changed ({} subjects, {} tags, {} types)",
            app.state.gui.filter.subjects.len(),
            app.state.gui.filter.tags.len(),
            app.state.gui.filter.report_types.len()
        );
    }
}
