// src/gui/components/report_cards.rs
//
// Card list for the filtered reports: type badge, title, summary,
// agency-or-topic, date, links.

use eframe::egui::{self, Color32, RichText};
use crate::{config::consts::PRIMARY_TYPE, gui::app::App, report::CanonicalReport};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.visible.is_empty() {
        ui.centered_and_justified(|ui| {
            let msg = if app.set.is_none() { "No data loaded" } else { "No reports match the current filters" };
            ui.label(RichText::new(msg).italics());
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("report_cards_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for r in &app.visible {
                card(ui, r);
                ui.add_space(4.0);
            }
        });
}

fn badge_color(report_type: &str) -> Color32 {
    if report_type == PRIMARY_TYPE {
        Color32::from_rgb(0x64, 0xB4, 0xFF)
    } else {
        Color32::from_rgb(0xF0, 0xD2, 0x3C)
    }
}

fn card(ui: &mut egui::Ui, r: &CanonicalReport) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new(r.report_type.as_str()).strong().color(badge_color(&r.report_type)));
            ui.label(RichText::new(r.title.as_str()).heading());
        });

        if !r.summary.is_empty() {
            ui.label(r.summary.as_str());
        }

        ui.horizontal_wrapped(|ui| {
            let subject = r.subject();
            if !subject.is_empty() {
                ui.label(RichText::new(subject).strong());
            }
            if !r.date.is_empty() {
                ui.label(RichText::new(r.date.as_str()).weak());
            }
            for t in &r.tags {
                ui.label(RichText::new(format!("#{t}")).small());
            }
            if let Some(u) = &r.pdf_url {
                ui.hyperlink_to("PDF", u);
            }
            if let Some(u) = &r.web_url {
                ui.hyperlink_to("Web", u);
            }
        });
    });
}
