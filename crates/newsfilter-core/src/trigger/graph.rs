//! Arena storage for trigger nodes.

use crate::item::Item;

use super::ast::{Trigger, TriggerId};
use super::error::{TriggerError, TriggerResult};

/// Append-only arena owning every trigger node of one configuration.
///
/// Composite nodes may only refer to nodes that are already in the arena,
/// so the graph is acyclic by construction and a node's operands always have
/// smaller indices than the node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerGraph {
    nodes: Vec<Trigger>,
}

impl TriggerGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::UnknownHandle`] if a composite refers to a
    /// handle that is not in this graph.
    pub fn push(&mut self, trigger: Trigger) -> TriggerResult<TriggerId> {
        if let Some(missing) = trigger
            .operands()
            .into_iter()
            .find(|id| id.index() >= self.nodes.len())
        {
            return Err(TriggerError::UnknownHandle {
                index: missing.index(),
            });
        }

        self.nodes.push(trigger);
        Ok(TriggerId(self.nodes.len() - 1))
    }

    /// Returns the node behind a handle.
    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TriggerId, &Trigger)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, trigger)| (TriggerId(index), trigger))
    }

    /// Evaluates the node behind `id` against an item.
    ///
    /// To test several triggers against the same item, use
    /// [`Self::evaluation`] so shared operands are computed once.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this graph.
    pub fn evaluate(&self, id: TriggerId, item: &Item) -> bool {
        self.evaluation(item).get(id)
    }

    /// Starts a memoized evaluation of this graph against one item.
    pub fn evaluation<'a>(&'a self, item: &'a Item) -> Evaluation<'a> {
        Evaluation {
            graph: self,
            item,
            cache: vec![None; self.nodes.len()],
            pending: Vec::new(),
        }
    }
}

/// Results of evaluating one graph against one item.
///
/// Every node is computed at most once, so a lookup costs at most one pass
/// over the arena no matter how often operands are shared. Evaluation uses
/// an explicit stack, so long operator chains cannot overflow the call stack.
#[derive(Debug)]
pub struct Evaluation<'a> {
    graph: &'a TriggerGraph,
    item: &'a Item,
    cache: Vec<Option<bool>>,
    pending: Vec<usize>,
}

impl Evaluation<'_> {
    /// Returns whether the node behind `id` matches the item.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by the graph.
    pub fn get(&mut self, id: TriggerId) -> bool {
        if let Some(value) = self.cache[id.index()] {
            return value;
        }

        self.pending.push(id.index());
        while let Some(&index) = self.pending.last() {
            if self.cache[index].is_some() {
                self.pending.pop();
                continue;
            }

            match self.step(index) {
                Ok(value) => {
                    self.cache[index] = Some(value);
                    self.pending.pop();
                }
                Err(operand) => self.pending.push(operand),
            }
        }

        self.cache[id.index()].unwrap_or(false)
    }

    /// Computes a node whose needed operands are known, or names the
    /// operand that has to be computed first.
    fn step(&self, index: usize) -> Result<bool, usize> {
        let item = self.item;
        let value = match &self.graph.nodes[index] {
            // Phrase triggers
            Trigger::TitlePhrase(phrase) => phrase.is_in(item.title()),
            Trigger::DescriptionPhrase(phrase) => phrase.is_in(item.description()),

            // Time triggers
            Trigger::Before(threshold) => item.published_at() < *threshold,
            Trigger::After(threshold) => item.published_at() > *threshold,

            // Boolean operators
            Trigger::Not(inner) => !self.known(*inner)?,
            Trigger::And(left, right) => self.known(*left)? && self.known(*right)?,
            Trigger::Or(left, right) => self.known(*left)? || self.known(*right)?,
        };
        Ok(value)
    }

    fn known(&self, id: TriggerId) -> Result<bool, usize> {
        self.cache[id.index()].ok_or(id.index())
    }
}
