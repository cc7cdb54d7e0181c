//! Command implementations for the nf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod run;
pub mod watch;

use std::path::{Path, PathBuf};

use newsfilter_core::trigger::TriggerConfig;
use tracing::info;

use crate::cli::Cli;
use config::Config;

/// Trigger file used when neither the command line nor the config names one.
pub const DEFAULT_TRIGGERS_FILE: &str = "triggers.txt";

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The trigger file could not be read.
    #[error("trigger error: {0}")]
    Triggers(#[from] newsfilter_core::trigger::TriggerError),

    /// The trigger file was read but some lines were rejected.
    #[error("{count} trigger line(s) rejected")]
    InvalidTriggers {
        /// Number of rejected lines.
        count: usize,
    },

    /// Feed fetch or parse error.
    #[error("feed error: {0}")]
    Feed(#[from] newsfilter_feed::FeedError),

    /// The stories file could not be read or parsed.
    #[error("items error: {0}")]
    Items(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Explicit config file path (from `--config` or `NF_CONFIG`).
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            config_path: cli.config.clone(),
        }
    }

    /// Loads the application config and applies its output preferences.
    pub fn load_config(&mut self) -> Result<Config> {
        let config = config::load_config(self.config_path.as_deref())?;
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
        Ok(config)
    }
}

/// Picks the trigger file: command line, then config, then the default.
pub fn resolve_triggers_path(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.triggers.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TRIGGERS_FILE))
}

/// Loads and parses a trigger file.
///
/// Rejected lines are logged by the parser and do not fail the load.
pub fn load_triggers(path: &Path) -> Result<TriggerConfig> {
    let triggers = TriggerConfig::load(path)?;
    info!(
        path = %path.display(),
        defined = triggers.names().count(),
        active = triggers.active().len(),
        rejected = triggers.diagnostics().len(),
        "loaded triggers"
    );
    Ok(triggers)
}
