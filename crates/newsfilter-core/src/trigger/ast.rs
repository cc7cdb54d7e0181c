//! Predicate nodes that make up a trigger graph.

use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;

use super::error::TriggerResult;
use super::phrase::Phrase;
use super::time::parse_threshold;

/// Stable handle to a node stored in a [`TriggerGraph`](super::TriggerGraph).
///
/// Handles are only handed out by the graph itself and always point at a
/// node that was pushed before any node referring to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub(super) usize);

impl TriggerId {
    /// Returns the arena index of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single predicate over a news item.
///
/// Leaves carry the data they test against. Composites refer to their
/// operands by handle, so one named trigger can feed several composites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    // ==================== Phrase Triggers ====================
    /// The phrase appears in the item title.
    TitlePhrase(Phrase),

    /// The phrase appears in the item description.
    DescriptionPhrase(Phrase),

    // ==================== Time Triggers ====================
    /// The item was published strictly before the threshold.
    Before(DateTime<Tz>),

    /// The item was published strictly after the threshold.
    After(DateTime<Tz>),

    // ==================== Boolean Operators ====================
    /// Logical NOT of another trigger.
    Not(TriggerId),

    /// Logical AND of two triggers.
    And(TriggerId, TriggerId),

    /// Logical OR of two triggers.
    Or(TriggerId, TriggerId),
}

impl Trigger {
    /// Creates a title phrase trigger.
    pub fn title(phrase: &str) -> Self {
        Trigger::TitlePhrase(Phrase::new(phrase))
    }

    /// Creates a description phrase trigger.
    pub fn description(phrase: &str) -> Self {
        Trigger::DescriptionPhrase(Phrase::new(phrase))
    }

    /// Creates a before trigger from a threshold like `3 Oct 2016 17:00:10`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid threshold.
    pub fn before(text: &str) -> TriggerResult<Self> {
        parse_threshold(text).map(Trigger::Before)
    }

    /// Creates an after trigger from a threshold like `3 Oct 2016 17:00:10`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid threshold.
    pub fn after(text: &str) -> TriggerResult<Self> {
        parse_threshold(text).map(Trigger::After)
    }

    /// Returns which variant this node is.
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::TitlePhrase(_) => TriggerKind::Title,
            Trigger::DescriptionPhrase(_) => TriggerKind::Description,
            Trigger::Before(_) => TriggerKind::Before,
            Trigger::After(_) => TriggerKind::After,
            Trigger::Not(_) => TriggerKind::Not,
            Trigger::And(_, _) => TriggerKind::And,
            Trigger::Or(_, _) => TriggerKind::Or,
        }
    }

    /// Returns the handles this node refers to, in operand order.
    pub fn operands(&self) -> Vec<TriggerId> {
        match self {
            Trigger::Not(inner) => vec![*inner],
            Trigger::And(left, right) | Trigger::Or(left, right) => vec![*left, *right],
            _ => vec![],
        }
    }
}

/// The kind of a trigger, named after its configuration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Title,
    Description,
    Before,
    After,
    Not,
    And,
    Or,
}

impl TriggerKind {
    /// All kinds, in keyword-table order.
    pub const ALL: [TriggerKind; 7] = [
        TriggerKind::Title,
        TriggerKind::Description,
        TriggerKind::Before,
        TriggerKind::After,
        TriggerKind::Not,
        TriggerKind::And,
        TriggerKind::Or,
    ];

    /// Returns the configuration keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            TriggerKind::Title => "TitleTrigger",
            TriggerKind::Description => "DescriptionTrigger",
            TriggerKind::Before => "BeforeTrigger",
            TriggerKind::After => "AfterTrigger",
            TriggerKind::Not => "NotTrigger",
            TriggerKind::And => "AndTrigger",
            TriggerKind::Or => "OrTrigger",
        }
    }

    /// Returns the exact number of comma-separated fields a definition needs.
    pub fn field_count(self) -> usize {
        match self {
            TriggerKind::And | TriggerKind::Or => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The directive named in the second field of a configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Defines a named trigger.
    Define(TriggerKind),
    /// Appends named triggers to the active list.
    Add,
}

impl Directive {
    /// The keyword of the `ADD` directive.
    pub const ADD: &'static str = "ADD";

    /// Looks up a directive by its case-sensitive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == Self::ADD {
            return Some(Directive::Add);
        }
        TriggerKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
            .map(Directive::Define)
    }

    /// Returns every known keyword.
    pub fn keywords() -> impl Iterator<Item = &'static str> {
        TriggerKind::ALL
            .into_iter()
            .map(TriggerKind::keyword)
            .chain(std::iter::once(Self::ADD))
    }
}
