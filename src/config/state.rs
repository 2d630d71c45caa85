// src/config/state.rs
use super::options::AppOptions;
use crate::filter::FilterState;

/// Which tab the central panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Cards,
    Table,
    /// Raw table of one source, by index into `AppOptions::sources`.
    Source(usize),
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Selections driving the report filter
    pub filter: FilterState,

    /// Active tab
    pub view: ViewKind,

    /// Per-source raw-table search text, parallel to the sources list
    pub source_queries: Vec<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            view: ViewKind::Cards,
            source_queries: Vec::new(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            source_queries: vec![s!(); options.sources.len()],
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
