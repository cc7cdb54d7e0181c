//! End-to-end tests: trigger file on disk through to filtered items.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use newsfilter_core::trigger::{filter_items, TriggerConfig, TriggerErrorKind, TriggerKind};
use newsfilter_core::Item;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn story(id: &str, title: &str, description: &str, day: u32, hour: u32) -> Item {
    Item::new(
        id,
        title,
        description,
        format!("https://news.example.com/{id}"),
        Utc.with_ymd_and_hms(2016, 10, day, hour, 0, 0).unwrap(),
    )
}

#[test]
fn test_fixture_bindings_and_diagnostics() {
    let config = TriggerConfig::load(fixture("triggers.txt")).unwrap();

    let names: Vec<&str> = config.names().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["t1", "t2", "t3", "t4", "t5", "t6"]);

    let t5 = config.lookup("t5").unwrap();
    assert_eq!(config.graph().get(t5).unwrap().kind(), TriggerKind::And);

    let kinds: Vec<(usize, TriggerErrorKind)> = config
        .diagnostics()
        .iter()
        .map(|d| (d.line, d.error.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![(22, TriggerErrorKind::Syntax), (23, TriggerErrorKind::Reference)]
    );

    let active: Vec<&str> = config.active().iter().map(|a| a.name()).collect();
    assert_eq!(active, vec!["t5", "t6"]);
}

#[test]
fn test_fixture_filters_stories() {
    let config = TriggerConfig::load(fixture("triggers.txt")).unwrap();

    let items = vec![
        // Mentions both candidates in the description
        story("a", "Debate night", "Trump and Clinton met on stage", 9, 12),
        // Election story after the t4 threshold (21:00:10 UTC on Oct 3)
        story("b", "Election polls tighten", "", 4, 12),
        // Election story before the threshold
        story("c", "Election season begins", "", 2, 12),
        // Matches both t5 and t6; t5 comes first
        story("d", "Election update", "Clinton, Trump trade barbs", 10, 1),
        // Matches nothing
        story("e", "Local bake sale", "Pies", 5, 9),
    ];

    let report: Vec<(&str, &str)> = filter_items(&config, &items)
        .iter()
        .map(|m| (m.item.id(), m.trigger.name()))
        .collect();

    assert_eq!(report, vec![("a", "t5"), ("b", "t6"), ("d", "t5")]);
}
