//! Conversion of RSS channels into news items.

use chrono::{DateTime, FixedOffset};
use newsfilter_core::Item;
use tracing::warn;

use crate::error::{FeedError, FeedResult};
use crate::html::clean_text;

/// Fallback publish-date format for feeds that almost follow RFC 2822.
const NUMERIC_OFFSET_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Parses an RSS 2.0 document into items.
///
/// Entries with a missing or unparseable publish date are skipped with a
/// warning, so every returned item carries a real timestamp.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not a valid RSS channel.
pub fn parse_channel(bytes: &[u8]) -> FeedResult<Vec<Item>> {
    let channel = rss::Channel::read_from(bytes).map_err(|e| FeedError::Parse {
        message: e.to_string(),
    })?;

    Ok(channel.items().iter().filter_map(entry_to_item).collect())
}

/// Parses a publish date in RFC 2822, `+hhmm` offset, or RFC 3339 form.
pub fn parse_pub_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    DateTime::parse_from_rfc2822(text)
        .or_else(|_| DateTime::parse_from_str(text, NUMERIC_OFFSET_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
}

fn entry_to_item(entry: &rss::Item) -> Option<Item> {
    let title = entry.title().map(clean_text).unwrap_or_default();
    let description = entry.description().map(clean_text).unwrap_or_default();
    let link = entry.link().unwrap_or_default().trim().to_string();

    // guid, then link, then title
    let id = entry
        .guid()
        .map(|guid| guid.value().trim().to_string())
        .filter(|guid| !guid.is_empty())
        .or_else(|| Some(link.clone()).filter(|link| !link.is_empty()))
        .unwrap_or_else(|| title.clone());

    let Some(raw_date) = entry.pub_date() else {
        warn!(id = %id, "dropping feed entry without a publish date");
        return None;
    };

    let Some(published_at) = parse_pub_date(raw_date) else {
        warn!(id = %id, date = raw_date, "dropping feed entry with unparseable publish date");
        return None;
    };

    Some(Item::new(id, title, description, link, published_at))
}
