//! Filter driver: applies the active triggers to a batch of items.
//!
//! Each item is tested against the active triggers in order and is reported
//! with the first trigger that matches it. Items that match nothing are
//! dropped, and matched items keep their input order.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use newsfilter_core::trigger::{TriggerConfig, TriggerEvaluator};
//! use newsfilter_core::Item;
//!
//! let config = TriggerConfig::parse(
//!     "storm,TitleTrigger,storm\n\
//!      rain,DescriptionTrigger,rain\n\
//!      ADD,ADD,storm,rain\n",
//! );
//! let evaluator = TriggerEvaluator::new(&config);
//!
//! let item = Item::new(
//!     "1",
//!     "Storm warning",
//!     "Heavy rain expected",
//!     "https://example.com/1",
//!     Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
//! );
//!
//! // Both triggers match; the first one in the active list wins.
//! assert_eq!(evaluator.first_match(&item).unwrap().name(), "storm");
//! ```

use crate::item::Item;

use super::graph::TriggerGraph;
use super::parser::{ActiveTrigger, TriggerConfig};

/// An item together with the active trigger that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The matched item.
    pub item: &'a Item,
    /// The first active trigger that matched the item.
    pub trigger: &'a ActiveTrigger,
}

/// Evaluates an ordered list of triggers against items.
///
/// The evaluator only borrows the graph and the trigger list, so the same
/// configuration can be reused for any number of filtering passes.
#[derive(Debug, Clone, Copy)]
pub struct TriggerEvaluator<'a> {
    graph: &'a TriggerGraph,
    triggers: &'a [ActiveTrigger],
}

impl<'a> TriggerEvaluator<'a> {
    /// Creates an evaluator over the active list of a configuration.
    pub fn new(config: &'a TriggerConfig) -> Self {
        Self::with_triggers(config.graph(), config.active())
    }

    /// Creates an evaluator over an explicit trigger list.
    ///
    /// Every handle in `triggers` must belong to `graph`.
    pub fn with_triggers(graph: &'a TriggerGraph, triggers: &'a [ActiveTrigger]) -> Self {
        Self { graph, triggers }
    }

    /// Returns the first trigger, in list order, that matches the item.
    ///
    /// Operands shared between triggers are evaluated once per item.
    pub fn first_match(&self, item: &Item) -> Option<&'a ActiveTrigger> {
        let mut evaluation = self.graph.evaluation(item);
        self.triggers
            .iter()
            .find(|trigger| evaluation.get(trigger.id()))
    }

    /// Returns true if any trigger matches the item.
    pub fn matches(&self, item: &Item) -> bool {
        self.first_match(item).is_some()
    }

    /// Returns the matching items with the trigger that selected each one.
    pub fn filter_items<'b>(&self, items: &'b [Item]) -> Vec<Match<'b>>
    where
        'a: 'b,
    {
        items
            .iter()
            .filter_map(|item| {
                self.first_match(item)
                    .map(|trigger| Match { item, trigger })
            })
            .collect()
    }
}

/// Filters `items` against the active triggers of `config`.
pub fn filter_items<'a>(config: &'a TriggerConfig, items: &'a [Item]) -> Vec<Match<'a>> {
    TriggerEvaluator::new(config).filter_items(items)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
