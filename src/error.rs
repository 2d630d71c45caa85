// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Source loading failures. Any of these aborts initialization.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source file could not be read.
    #[error("failed to read source '{name}' ({}): {source}", .path.display())]
    Read {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A loader thread went away without answering.
    #[error("source '{0}' did not report back")]
    Lost(String),
    /// Nothing configured to load.
    #[error("no sources configured")]
    NoSources,
}

/// Configuration could not be assembled from defaults, file and environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Extract(Box::new(e))
    }
}
