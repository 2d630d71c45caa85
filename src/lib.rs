// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod csv;
pub mod facets;
pub mod filter;
pub mod normalize;
pub mod report;
pub mod sink;
pub mod store;

pub mod progress;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
