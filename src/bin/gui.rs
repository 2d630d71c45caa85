// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use report_browser::{config::{options::AppOptions, state::AppState}, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    report_browser::log::init();

    let options = match AppOptions::load(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(gui::icon::icon_data())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
