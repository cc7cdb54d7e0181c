//! Watch command implementation.
//!
//! Polls RSS feeds on a fixed interval and prints each matching story the
//! first time it is seen. Feeds that fail are logged and skipped for that
//! round; the loop ends on Ctrl-C or after one round with `--once`.

use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use newsfilter_core::trigger::{filter_items, Match, TriggerConfig};
use newsfilter_feed::FeedClient;
use tracing::{debug, info, warn};

use super::{load_triggers, resolve_triggers_path, CommandContext, CommandError, Result};
use crate::output::{format_match_line, MatchOutput};

/// Number of reported story ids remembered between polls.
pub const MAX_SEEN_STORIES: usize = 10_000;

/// Options for the watch command.
#[derive(Debug, Default)]
pub struct WatchOptions {
    /// Trigger file override.
    pub triggers: Option<PathBuf>,
    /// Feed URLs to poll.
    pub feeds: Vec<String>,
    /// Seconds between polls.
    pub interval: Option<u64>,
    /// Poll once and exit.
    pub once: bool,
}

/// Story ids that have already been reported.
///
/// Holds at most `capacity` ids; once full, the id reported longest ago is
/// forgotten first.
#[derive(Debug)]
pub struct SeenStories {
    ids: HashSet<String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for SeenStories {
    fn default() -> Self {
        Self::with_capacity(MAX_SEEN_STORIES)
    }
}

impl SeenStories {
    /// Creates a set that remembers at most `capacity` ids (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashSet::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Keeps only the matches not reported before and marks them as reported.
    ///
    /// A story repeated within one batch is reported once.
    pub fn take_new<'a>(&mut self, matches: Vec<Match<'a>>) -> Vec<Match<'a>> {
        matches
            .into_iter()
            .filter(|m| self.remember(m.item.id()))
            .collect()
    }

    /// Records an id; returns false if it was already known.
    fn remember(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }

        self.ids.insert(id.to_string());
        self.order.push_back(id.to_string());
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.ids.remove(&oldest);
            }
        }
        true
    }

    /// Returns true if `id` has been reported and not yet forgotten.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of stories currently remembered.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing has been reported yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Executes the watch command.
///
/// # Errors
///
/// Returns an error if the triggers cannot be loaded or no feeds are
/// configured. Individual feed failures are not errors.
pub async fn execute(ctx: &mut CommandContext, opts: &WatchOptions) -> Result<()> {
    let config = ctx.load_config()?;
    let path = resolve_triggers_path(opts.triggers.as_deref(), &config);
    let triggers = load_triggers(&path)?;

    let feeds = if opts.feeds.is_empty() {
        config.feeds.clone()
    } else {
        opts.feeds.clone()
    };
    if feeds.is_empty() {
        return Err(CommandError::Config(
            "no feeds to watch: pass --feed or set feeds in the config file".to_string(),
        ));
    }

    let interval_secs = opts
        .interval
        .unwrap_or_else(|| config.poll_interval_secs());
    let client = FeedClient::new()?;
    let poller = Poller {
        client: &client,
        feeds: &feeds,
        triggers: &triggers,
        interval: Duration::from_secs(interval_secs),
        once: opts.once,
    };

    info!(feeds = feeds.len(), interval_secs, "watching feeds");

    let mut seen = SeenStories::default();
    poller.run(ctx, &mut seen, ctrl_c()).await
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// One polling loop over a fixed set of feeds.
struct Poller<'a> {
    client: &'a FeedClient,
    feeds: &'a [String],
    triggers: &'a TriggerConfig,
    interval: Duration,
    once: bool,
}

impl Poller<'_> {
    /// Polls until `shutdown` resolves, or for one round when `once` is set.
    ///
    /// `shutdown` is watched during fetches as well as between polls.
    async fn run<F>(&self, ctx: &CommandContext, seen: &mut SeenStories, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let items = tokio::select! {
                items = self.client.fetch_all(self.feeds) => items,
                () = &mut shutdown => {
                    info!("interrupted during fetch, stopping");
                    break;
                }
            };

            let matches = seen.take_new(filter_items(self.triggers, &items));
            debug!(
                stories = items.len(),
                new_matches = matches.len(),
                remembered = seen.len(),
                "poll complete"
            );
            print_matches(ctx, self.triggers, &matches)?;

            if self.once {
                break;
            }

            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                () = &mut shutdown => {
                    info!("interrupted, stopping");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Prints one line per match, as text or as JSON lines.
fn print_matches(
    ctx: &CommandContext,
    triggers: &TriggerConfig,
    matches: &[Match<'_>],
) -> Result<()> {
    for m in matches {
        if ctx.json_output {
            println!("{}", serde_json::to_string(&MatchOutput::new(triggers, m))?);
        } else if !ctx.quiet {
            println!("{}", format_match_line(triggers, m, ctx.use_colors));
        }
    }
    Ok(())
}
