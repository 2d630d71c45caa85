// src/progress.rs
/// Lightweight progress reporting for source loading.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// One source was read and decoded.
    fn item_done(&mut self, _source: &str, _rows: usize) {}

    /// One source failed to load.
    fn item_failed(&mut self, _source: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

