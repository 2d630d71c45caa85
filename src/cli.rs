// src/cli.rs
use std::{io, path::PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::options::AppOptions,
    filter::FilterState,
    progress::Progress,
    sink::{self, TextFormat, TextSink, ViewSink},
    store,
};

/// Browse CSV report lists from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ./report_browser.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override a source path, NAME=PATH (unknown names are added as secondary sources)
    #[arg(long = "source", value_name = "NAME=PATH")]
    pub sources: Vec<String>,

    /// Case-insensitive text over title and summary
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Topic (primary reports) or agency (others); repeatable
    #[arg(long = "subject")]
    pub subjects: Vec<String>,

    /// Year prefix of the date, e.g. 2021
    #[arg(short, long)]
    pub year: Option<String>,

    /// Report type badge, e.g. CRS; repeatable
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Free-form tag; repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Print facet lists before the results
    #[arg(long)]
    pub facets: bool,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = Format::Cards)]
    pub format: Format,

    /// Report per-source load progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Cards,
    Csv,
    Tsv,
}

impl From<Format> for TextFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Cards => TextFormat::Cards,
            Format::Csv   => TextFormat::Csv,
            Format::Tsv   => TextFormat::Tsv,
        }
    }
}

impl Args {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone(),
            subjects: self.subjects.iter().cloned().collect(),
            year: self.year.clone().filter(|y| !y.is_empty()),
            report_types: self.types.iter().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
        }
    }

    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::load(self.config.as_deref()).wrap_err("loading configuration")?;
        for pair in &self.sources {
            let (name, path) = pair
                .split_once('=')
                .ok_or_else(|| eyre!("--source expects NAME=PATH, got {:?}", pair))?;
            opts.set_source_path(name.trim(), path.trim());
        }
        Ok(opts)
    }
}

/// Progress lines on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { eprintln!("Loading {} source(s)", total); }
    fn item_done(&mut self, source: &str, rows: usize) { eprintln!("  {}: {} rows", source, rows); }
    fn item_failed(&mut self, source: &str, err: &str) { eprintln!("  {}: FAILED ({})", source, err); }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.options()?;
    let state = args.filter_state();
    logf!("CLI: sources={} filter={:?}", opts.sources.len(), state);

    let mut prog = StderrProgress;
    let progress: Option<&mut dyn Progress> = if args.verbose { Some(&mut prog) } else { None };
    let set = store::load_sources(&opts.sources, progress)?;

    let stdout = io::stdout().lock();
    let mut out = TextSink::new(stdout, args.format.into());
    if args.facets {
        out.render_facets(set.facets());
    }
    sink::publish(&set, &state, &mut out);
    out.finish().wrap_err("writing output")?;
    Ok(())
}
