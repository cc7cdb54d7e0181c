//! Run command implementation.
//!
//! Filters one batch of stories, read from a JSON file or fetched from RSS
//! feeds, and prints the matches.

use std::fs;
use std::path::{Path, PathBuf};

use newsfilter_core::trigger::filter_items;
use newsfilter_core::Item;
use newsfilter_feed::FeedClient;
use tracing::debug;

use super::{load_triggers, resolve_triggers_path, CommandContext, CommandError, Result};
use crate::output::{format_matches_json, format_matches_table};

/// Options for the run command.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Trigger file override.
    pub triggers: Option<PathBuf>,
    /// JSON file with an array of stories.
    pub items: Option<PathBuf>,
    /// Feed URLs to fetch.
    pub feeds: Vec<String>,
}

/// Executes the run command.
///
/// Stories come from `--items` if given, then from `--feed`, then from the
/// feeds listed in the config file. Feed errors are fatal here.
///
/// # Errors
///
/// Returns an error if the triggers or stories cannot be loaded.
pub async fn execute(ctx: &mut CommandContext, opts: &RunOptions) -> Result<()> {
    let config = ctx.load_config()?;
    let path = resolve_triggers_path(opts.triggers.as_deref(), &config);
    let triggers = load_triggers(&path)?;

    let items = if let Some(items_path) = &opts.items {
        read_items(items_path)?
    } else {
        let feeds = if opts.feeds.is_empty() {
            &config.feeds
        } else {
            &opts.feeds
        };
        if feeds.is_empty() {
            return Err(CommandError::Config(
                "no stories to filter: pass --items or --feed, or set feeds in the config file"
                    .to_string(),
            ));
        }
        fetch_items(feeds).await?
    };

    let matches = filter_items(&triggers, &items);
    debug!(stories = items.len(), matches = matches.len(), "filtered stories");

    if ctx.json_output {
        println!("{}", format_matches_json(&triggers, &matches)?);
    } else if !ctx.quiet {
        print!("{}", format_matches_table(&triggers, &matches, ctx.use_colors));
    }

    Ok(())
}

/// Reads stories from a JSON file containing an array of items.
pub fn read_items(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CommandError::Items(format!("failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CommandError::Items(format!("failed to parse {}: {}", path.display(), e)))
}

async fn fetch_items(feeds: &[String]) -> Result<Vec<Item>> {
    let client = FeedClient::new()?;
    let mut items = Vec::new();
    for url in feeds {
        items.extend(client.fetch(url).await?);
    }
    Ok(items)
}
