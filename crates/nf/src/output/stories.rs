//! Matched story output formatting.

use newsfilter_core::trigger::{Match, TriggerConfig, TriggerKind};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_kind, format_timestamp, truncate_str};

/// JSON output structure for a batch of matches.
#[derive(Serialize)]
pub struct MatchesOutput<'a> {
    pub matches: Vec<MatchOutput<'a>>,
}

/// JSON output structure for a single matched story.
#[derive(Serialize)]
pub struct MatchOutput<'a> {
    pub id: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub link: &'a str,
    pub published_at: String,
    pub trigger: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl<'a> MatchOutput<'a> {
    /// Builds the output record for one match.
    pub fn new(config: &TriggerConfig, m: &Match<'a>) -> Self {
        Self {
            id: m.item.id(),
            title: m.item.title(),
            description: m.item.description(),
            link: m.item.link(),
            published_at: m.item.published_at().to_rfc3339(),
            trigger: m.trigger.name(),
            kind: trigger_kind(config, m).map(TriggerKind::keyword),
        }
    }
}

fn trigger_kind(config: &TriggerConfig, m: &Match<'_>) -> Option<TriggerKind> {
    config.graph().get(m.trigger.id()).map(|trigger| trigger.kind())
}

/// Formats matches as JSON.
pub fn format_matches_json(
    config: &TriggerConfig,
    matches: &[Match<'_>],
) -> Result<String, serde_json::Error> {
    let output = MatchesOutput {
        matches: matches.iter().map(|m| MatchOutput::new(config, m)).collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats matches as a table.
pub fn format_matches_table(
    config: &TriggerConfig,
    matches: &[Match<'_>],
    use_colors: bool,
) -> String {
    if matches.is_empty() {
        return "No matching stories.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!("{:<22} {:<16} {}", "Published", "Trigger", "Title");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for m in matches {
        let published = format_timestamp(&m.item.published_at());
        let trigger = truncate_str(m.trigger.name(), 16);
        let title = truncate_str(m.item.title(), 60);

        let line = if use_colors {
            format!(
                "{:<22} {:<16} {}",
                published.dimmed().to_string(),
                trigger.green().to_string(),
                title
            )
        } else {
            format!("{:<22} {:<16} {}", published, trigger, title)
        };
        output.push_str(&line);
        output.push('\n');

        if !m.item.link().is_empty() {
            let link = format!("{:<22} {:<16} {}", "", "", m.item.link());
            if use_colors {
                output.push_str(&format!("{}\n", link.dimmed()));
            } else {
                output.push_str(&link);
                output.push('\n');
            }
        }
    }

    output
}

/// Formats a single match as one line, for streaming output in `nf watch`.
pub fn format_match_line(config: &TriggerConfig, m: &Match<'_>, use_colors: bool) -> String {
    let published = format_timestamp(&m.item.published_at());
    let kind = trigger_kind(config, m)
        .map(|kind| format_kind(kind, use_colors))
        .unwrap_or_default();

    if use_colors {
        format!(
            "{} [{} {}] {} {}",
            published.dimmed(),
            m.trigger.name().green(),
            kind,
            m.item.title().bold(),
            m.item.link().dimmed()
        )
    } else {
        format!(
            "{} [{} {}] {} {}",
            published,
            m.trigger.name(),
            kind,
            m.item.title(),
            m.item.link()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use newsfilter_core::trigger::filter_items;
    use newsfilter_core::Item;

    fn config() -> TriggerConfig {
        TriggerConfig::parse(
            "t1,TitleTrigger,election\n\
             t2,DescriptionTrigger,hurricane\n\
             ADD,ADD,t1,t2\n",
        )
    }

    fn items() -> Vec<Item> {
        vec![
            Item::new(
                "a",
                "Election night coverage",
                "",
                "https://news.example.com/a",
                Utc.with_ymd_and_hms(2016, 11, 9, 1, 30, 0).unwrap(),
            ),
            Item::new(
                "b",
                "Gulf coast braces",
                "A hurricane is approaching",
                "",
                Utc.with_ymd_and_hms(2016, 11, 9, 2, 0, 0).unwrap(),
            ),
            Item::new(
                "c",
                "Sports roundup",
                "",
                "",
                Utc.with_ymd_and_hms(2016, 11, 9, 3, 0, 0).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_matches_json() {
        let config = config();
        let items = items();
        let matches = filter_items(&config, &items);

        let json = format_matches_json(&config, &matches).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let list = value["matches"].as_array().unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], "a");
        assert_eq!(list[0]["trigger"], "t1");
        assert_eq!(list[0]["kind"], "TitleTrigger");
        assert_eq!(list[0]["published_at"], "2016-11-08T20:30:00-05:00");
        assert!(list[0].get("description").is_none());
        assert_eq!(list[1]["trigger"], "t2");
        assert!(list[1].get("link").is_none());
    }

    #[test]
    fn test_matches_json_empty() {
        let config = config();
        let json = format_matches_json(&config, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matches"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_matches_table() {
        let config = config();
        let items = items();
        let matches = filter_items(&config, &items);

        let table = format_matches_table(&config, &matches, false);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Published"));
        assert!(lines[1].contains("Election night coverage"));
        assert!(lines[1].contains("t1"));
        assert!(lines[2].trim() == "https://news.example.com/a");
        assert!(lines[3].contains("Gulf coast braces"));
        assert!(!table.contains("Sports roundup"));
    }

    #[test]
    fn test_matches_table_empty() {
        let config = config();
        assert_eq!(
            format_matches_table(&config, &[], false),
            "No matching stories.\n"
        );
    }

    #[test]
    fn test_match_line_plain() {
        let config = config();
        let items = items();
        let matches = filter_items(&config, &items);

        let line = format_match_line(&config, &matches[0], false);
        assert_eq!(
            line,
            "2016-11-08 20:30 EST [t1 TitleTrigger] Election night coverage https://news.example.com/a"
        );
    }
}
