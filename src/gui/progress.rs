// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Loading {} source(s)…", total));
    }
    fn item_done(&mut self, source: &str, rows: usize) {
        self.done += 1;
        self.set_status(format!("Loaded {} ({} rows) ({}/{})", source, rows, self.done, self.total));
    }
    fn item_failed(&mut self, source: &str, err: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {}: {}", source, err));
    }
    fn finish(&mut self) {
        // A failure message stays visible; only overwrite on success.
        if self.failed == 0 {
            self.set_status(format!("Ready ({}/{} sources)", self.done, self.total));
        }
    }
}
