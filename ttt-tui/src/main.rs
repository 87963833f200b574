use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{Args, Config};
use tracing::info;

pub mod app;
pub mod board;
pub mod config;
pub mod logging;
pub mod moves;
pub mod popup;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::resolve(&args)?;
    logging::init(&config)?;
    info!(?config, "starting");

    let terminal = ratatui::init();
    let res = App::new(&config).run(terminal);
    ratatui::restore();
    res.context("terminal i/o failed")
}
