//! Config command implementation.
//!
//! View configuration settings.
//! Config file is located at ~/.config/nf/config.toml.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Poll interval used by `nf watch` when neither flag nor config sets one.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 120;

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default trigger file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<PathBuf>,

    /// Default RSS feed URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feeds: Vec<String>,

    /// Seconds between polls in `nf watch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            triggers: None,
            feeds: Vec::new(),
            poll_interval_secs: None,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Returns the poll interval, falling back to the default.
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config file path.
///
/// Uses the explicit path if given, otherwise XDG-style paths:
/// `$XDG_CONFIG_HOME/nf/config.toml`, then `~/.config/nf/config.toml`.
pub fn get_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            return Ok(PathBuf::from(xdg_config).join("nf").join("config.toml"));
        }
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("nf").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = get_config_path(explicit)?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;
    let config = load_config(Some(&path))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        match &config.triggers {
            Some(triggers) => println!("triggers: {}", triggers.display()),
            None => println!("triggers: (default) {}", super::DEFAULT_TRIGGERS_FILE),
        }
        println!("poll_interval_secs: {}", config.poll_interval_secs());

        if config.feeds.is_empty() {
            println!("feeds: (none)");
        } else {
            println!("feeds:");
            for feed in &config.feeds {
                println!("  - {}", feed);
            }
        }

        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.triggers.is_none());
        assert!(config.feeds.is_empty());
        assert_eq!(config.poll_interval_secs(), DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let config = Config {
            poll_interval_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.poll_interval_secs(), DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
version = 1
triggers = "/home/me/triggers.txt"
feeds = ["https://news.example.com/rss", "https://world.example.com/rss"]
poll_interval_secs = 60

[output]
color = false
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.triggers, Some(PathBuf::from("/home/me/triggers.txt")));
        assert_eq!(config.feeds.len(), 2);
        assert_eq!(config.poll_interval_secs(), 60);
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_load_config_without_version() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "feeds = []\n");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_load_config_rejects_future_version() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "version = 99\n");

        assert!(matches!(load_config(Some(&path)), Err(CommandError::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "feeds = [unterminated\n");

        match load_config(Some(&path)) {
            Err(CommandError::Config(message)) => assert!(message.contains("Failed to parse")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let config = Config {
            feeds: vec!["https://news.example.com/rss".to_string()],
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("version = 1"));
        assert!(text.contains("https://news.example.com/rss"));
        assert!(!text.contains("triggers"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = get_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    #[serial]
    fn test_xdg_config_home() {
        let original = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", "/tmp/nf-xdg-test");

        let path = get_config_path(None);

        match original {
            Some(val) => env::set_var("XDG_CONFIG_HOME", val),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(
            path.unwrap(),
            PathBuf::from("/tmp/nf-xdg-test/nf/config.toml")
        );
    }
}
