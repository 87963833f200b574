use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Terminal tic-tac-toe with a browsable move history.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// RON file with settings; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List moves newest first
    #[arg(short, long)]
    pub reverse: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `tictac=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Event poll interval in milliseconds
    #[arg(long)]
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub reverse_moves: bool,
    pub tick_rate_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse_moves: false,
            tick_rate_ms: 100,
            log_file: None,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    pub fn from_ron(source: &str) -> Result<Self> {
        ron::from_str(source).context("failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (if any) with command line overrides applied.
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_args(args))
    }

    fn with_args(mut self, args: &Args) -> Self {
        self.reverse_moves |= args.reverse;
        if let Some(log_file) = &args.log_file {
            self.log_file = Some(log_file.clone());
        }
        if let Some(log_level) = &args.log_level {
            self.log_level.clone_from(log_level);
        }
        if let Some(tick_rate_ms) = args.tick_rate_ms {
            self.tick_rate_ms = tick_rate_ms;
        }
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
