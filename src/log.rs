// src/log.rs
//
// File logging through `tracing`. The `logf!`/`logd!`/`loge!` macros are the
// crate-wide entry points; `init()` installs the subscriber once per process.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

pub use tracing;

use crate::config::consts::{LOG_DIR, LOG_FILE, LOG_FILTER};

static INIT: OnceLock<()> = OnceLock::new();

pub fn log_path() -> PathBuf {
    PathBuf::from(LOG_DIR).join(LOG_FILE)
}

/// Install the file subscriber. Safe to call more than once.
/// If the log file cannot be opened, logging stays disabled.
pub fn init() {
    INIT.get_or_init(|| {
        let path = log_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_timer(fmt::time::uptime())
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
