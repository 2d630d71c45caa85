// src/config/options.rs
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ConfigError;
use crate::normalize::SourceProfile;

/// One CSV input and how to normalize it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Display name (tab title, log lines, errors).
    pub name: String,
    pub path: PathBuf,
    pub profile: SourceProfile,
}

impl SourceSpec {
    pub fn new(name: &str, path: impl Into<PathBuf>, profile: SourceProfile) -> Self {
        Self { name: s!(name), path: path.into(), profile }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Loaded in parallel; reports are concatenated in this order.
    pub sources: Vec<SourceSpec>,
    /// Report-type badges offered as toggles.
    pub type_badges: Vec<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        let data = PathBuf::from(DATA_DIR);
        Self {
            sources: vec![
                SourceSpec::new("CRS list", data.join(CRS_FILE), SourceProfile::primary(PRIMARY_TYPE)),
                SourceSpec::new("Financial reports", data.join(FINANCIAL_FILE), SourceProfile::secondary("")),
            ],
            type_badges: TYPE_BADGES.iter().map(|s| s!(*s)).collect(),
        }
    }
}

impl AppOptions {
    /// Defaults ← TOML file ← `REPORT_BROWSER_*` env.
    ///
    /// An explicit `path` must exist; without one, `report_browser.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut fig = Figment::from(Serialized::defaults(AppOptions::default()));

        match path {
            Some(p) => {
                if !p.is_file() {
                    return Err(ConfigError::Missing(p.to_path_buf()));
                }
                fig = fig.merge(Toml::file(p));
            }
            None => {
                let p = Path::new(CONFIG_FILE);
                if p.is_file() {
                    fig = fig.merge(Toml::file(p));
                }
            }
        }

        let opts: AppOptions = fig.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()?;
        logd!("Config: sources={} badges={:?}", opts.sources.len(), opts.type_badges);
        Ok(opts)
    }

    /// Replace the path of the source called `name`, or append a new secondary source.
    pub fn set_source_path(&mut self, name: &str, path: impl Into<PathBuf>) {
        let path = path.into();
        match self.sources.iter_mut().find(|s| s.name.eq_ignore_ascii_case(name)) {
            Some(src) => src.path = path,
            None => self.sources.push(SourceSpec::new(name, path, SourceProfile::secondary(""))),
        }
    }
}
