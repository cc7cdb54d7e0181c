//! Common helper functions for output formatting.

use chrono::DateTime;
use chrono_tz::Tz;
use newsfilter_core::trigger::{Trigger, TriggerConfig, TriggerId, TriggerKind};
use owo_colors::OwoColorize;

/// Display format for publication times.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a publication time in the reference zone.
pub fn format_timestamp(at: &DateTime<Tz>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats a trigger kind keyword, colored by family.
pub fn format_kind(kind: TriggerKind, use_colors: bool) -> String {
    let label = kind.keyword();
    if !use_colors {
        return label.to_string();
    }

    match kind {
        TriggerKind::Title | TriggerKind::Description => label.cyan().to_string(),
        TriggerKind::Before | TriggerKind::After => label.yellow().to_string(),
        TriggerKind::Not | TriggerKind::And | TriggerKind::Or => label.magenta().to_string(),
    }
}

/// Returns the name bound to a handle, or the handle itself when it has none.
pub fn name_of(config: &TriggerConfig, id: TriggerId) -> String {
    config
        .names()
        .find(|(_, bound)| *bound == id)
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Describes a trigger's arguments, naming composite operands.
pub fn describe_trigger(config: &TriggerConfig, trigger: &Trigger) -> String {
    match trigger {
        Trigger::TitlePhrase(phrase) | Trigger::DescriptionPhrase(phrase) => {
            format!("\"{}\"", phrase.as_str())
        }
        Trigger::Before(at) | Trigger::After(at) => format_timestamp(at),
        Trigger::Not(a) => format!("not {}", name_of(config, *a)),
        Trigger::And(a, b) => format!("{} and {}", name_of(config, *a), name_of(config, *b)),
        Trigger::Or(a, b) => format!("{} or {}", name_of(config, *a), name_of(config, *b)),
    }
}
