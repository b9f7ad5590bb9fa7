//! Jotpad terminal entry point.
//!
//! # Responsibility
//! - Resolve configuration from an optional TOML file and CLI flags.
//! - Start file logging when a log directory is configured.
//! - Run either the interactive terminal UI or a headless replay.

mod mouse;
mod replay;
mod surface;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use jotpad_core::{init_logging, AppConfig, AppState, ConfigOverrides};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jotpad", version, about = "A tiny note-taking widget for the terminal")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// Start in the dark theme.
    #[arg(long)]
    dark: bool,
    /// Put a note back when its edit is abandoned by clicking elsewhere.
    #[arg(long)]
    restore_abandoned_edits: bool,
    /// Apply a newline-delimited JSON action script and print the final view.
    #[arg(long, value_name = "PATH")]
    replay: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<AppConfig> {
        let base = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        let config = base.with_overrides(ConfigOverrides {
            log_level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
            start_dark: self.dark,
            restore_abandoned_edits: self.restore_abandoned_edits,
        })?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("invalid configuration")?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }
    let state = AppState::new(config.abandon_policy, config.initial_theme());
    info!(
        "event=cli_start module=cli status=ok mode={} policy={:?} dark={}",
        if cli.replay.is_some() { "replay" } else { "tui" },
        config.abandon_policy,
        state.theme().is_dark()
    );
    match &cli.replay {
        Some(path) => {
            let view = replay::run_file(path, state)?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        None => tui::run(state)?,
    }
    Ok(())
}
