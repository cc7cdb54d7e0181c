//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the nf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// nf - filter news feeds with composable triggers
#[derive(Parser, Debug)]
#[command(name = "nf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the config file (default: ~/.config/nf/config.toml)
    #[arg(long, global = true, env = "NF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a trigger file and show what it defines
    #[command(alias = "c")]
    Check {
        /// Trigger file (default: from config, then ./triggers.txt)
        triggers: Option<PathBuf>,
    },

    /// Filter one batch of stories and print the matches
    #[command(alias = "r")]
    Run {
        /// Trigger file (default: from config, then ./triggers.txt)
        #[arg(short, long)]
        triggers: Option<PathBuf>,

        /// JSON file containing an array of stories
        #[arg(short, long, conflicts_with = "feed")]
        items: Option<PathBuf>,

        /// RSS feed URL (repeatable; default: feeds from config)
        #[arg(short, long, action = clap::ArgAction::Append)]
        feed: Vec<String>,
    },

    /// Poll feeds on an interval and print new matches
    #[command(alias = "w")]
    Watch {
        /// Trigger file (default: from config, then ./triggers.txt)
        #[arg(short, long)]
        triggers: Option<PathBuf>,

        /// RSS feed URL (repeatable; default: feeds from config)
        #[arg(short, long, action = clap::ArgAction::Append)]
        feed: Vec<String>,

        /// Seconds between polls (default: from config, then 120)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Poll once and exit
        #[arg(long)]
        once: bool,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}
