// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, ViewKind},
    facets::FacetLists,
    filter,
    report::CanonicalReport,
    sink::{self, ViewSink},
    store::{self, ReportSet},
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Report Browser",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once; None when loading failed
    pub set: Option<ReportSet>,

    // facet option lists, filled through ViewSink::render_facets
    pub facets: FacetLists,

    // in-memory display for the current filter (filled by render_reports)
    pub visible: Vec<CanonicalReport>,

    // raw-table projections, one per source
    pub source_ix: Vec<Vec<usize>>,

    // anchor for ctrl/shift selection in the subject list
    pub last_clicked: Option<usize>,

    // status line (loader progress writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut prog = GuiProgress::new(status.clone());

        logf!("Init: {} source(s)", state.options.sources.len());

        // Blocks until every source has answered.
        let set = match store::load_sources(&state.options.sources, Some(&mut prog)) {
            Ok(set) => Some(set),
            Err(e) => {
                loge!("Init: load failed: {}", e);
                if let Ok(mut s) = status.lock() {
                    *s = join!("Error: ", &e.to_string());
                }
                None
            }
        };

        let mut app = Self {
            state,
            set,
            facets: FacetLists::default(),
            visible: Vec::new(),
            source_ix: Vec::new(),
            last_clicked: None,
            status,
        };

        if let Some(set) = app.set.take() {
            app.render_facets(set.facets());
            app.set = Some(set);
        }
        app.rebuild_view();
        app.rebuild_source_views();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.set.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    /// Re-run the filter for the current selections.
    pub fn rebuild_view(&mut self) {
        let Some(set) = self.set.take() else {
            self.visible.clear();
            return;
        };
        let filter = self.state.gui.filter.clone();
        let n = sink::publish(&set, &filter, self);
        logd!("View: {} of {} reports", n, set.len());
        self.set = Some(set);
    }

    /// Re-run the raw-table search for every source.
    pub fn rebuild_source_views(&mut self) {
        let Some(set) = self.set.as_ref() else {
            self.source_ix.clear();
            return;
        };
        let queries = &mut self.state.gui.source_queries;
        queries.resize(set.tables().len(), s!());
        self.source_ix = set
            .tables()
            .iter()
            .zip(queries.iter())
            .map(|(src, q)| filter::filter_raw_rows(&src.table, q))
            .collect();
    }

    pub fn rebuild_source_view(&mut self, idx: usize) {
        let Some(set) = self.set.as_ref() else { return };
        let (Some(src), Some(q)) = (set.tables().get(idx), self.state.gui.source_queries.get(idx)) else {
            return;
        };
        let ix = filter::filter_raw_rows(&src.table, q);
        if let Some(slot) = self.source_ix.get_mut(idx) {
            *slot = ix;
        }
    }

    pub fn set_view(&mut self, view: ViewKind) {
        if self.state.gui.view != view {
            logf!("UI: Tab switch {:?} → {:?}", self.state.gui.view, view);
            self.state.gui.view = view;
        }
    }
}

impl ViewSink for App {
    fn render_reports(&mut self, reports: &[&CanonicalReport]) {
        self.visible = reports.iter().map(|r| (*r).clone()).collect();
    }

    fn render_facets(&mut self, facets: &FacetLists) {
        self.facets = facets.clone();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            match self.state.gui.view {
                ViewKind::Cards => crate::gui::components::report_cards::draw(ui, self),
                ViewKind::Table => crate::gui::components::data_table::draw_reports(ui, self),
                ViewKind::Source(i) => crate::gui::components::data_table::draw_source(ui, self, i),
            }
        });
    }
}
