// src/bin/cli.rs
use clap::Parser;
use report_browser::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    report_browser::log::init();
    cli::run(cli::Args::parse())
}
