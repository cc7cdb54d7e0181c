//! Line-oriented parser that builds a trigger graph from configuration text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::ast::{Directive, Trigger, TriggerId, TriggerKind};
use super::error::{TriggerError, TriggerResult};
use super::graph::TriggerGraph;
use super::suggest::find_similar_name;

/// A trigger selected by an `ADD` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTrigger {
    name: String,
    id: TriggerId,
}

impl ActiveTrigger {
    /// Creates an active entry for the trigger bound to `name`.
    pub fn new(name: impl Into<String>, id: TriggerId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Returns the name the trigger was added under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the graph handle of the trigger.
    pub fn id(&self) -> TriggerId {
        self.id
    }
}

/// A configuration line that was skipped, with the reason.
#[derive(Debug)]
pub struct Diagnostic {
    /// 1-based line number in the source.
    pub line: usize,
    /// The line as written.
    pub text: String,
    /// Why the line (or part of an `ADD` line) was rejected.
    pub error: TriggerError,
}

/// Triggers built from one configuration source.
///
/// Holds the node arena, the name registry, the ordered active list, and the
/// diagnostics for every rejected line. Parsing never fails as a whole:
/// malformed lines are skipped and reported, and later lines are still read.
#[derive(Debug, Default)]
pub struct TriggerConfig {
    graph: TriggerGraph,
    registry: HashMap<String, TriggerId>,
    /// Names in order of first definition.
    order: Vec<String>,
    active: Vec<ActiveTrigger>,
    diagnostics: Vec<Diagnostic>,
}

impl TriggerConfig {
    /// Parses configuration text.
    pub fn parse(input: &str) -> Self {
        Self::from_lines(input.lines())
    }

    /// Parses a sequence of configuration lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let line = raw.as_ref().trim();
            if is_comment(line) {
                continue;
            }

            let line_number = index + 1;
            if let Err(error) = config.parse_line(line_number, line) {
                config.report(line_number, line, error);
            }
        }

        config
    }

    /// Reads and parses a trigger file.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::Read`] if the file cannot be read. Problems
    /// with individual lines are reported through [`Self::diagnostics`].
    pub fn load(path: impl AsRef<Path>) -> TriggerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TriggerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading trigger file");
        Ok(Self::parse(&content))
    }

    /// Returns the node arena.
    pub fn graph(&self) -> &TriggerGraph {
        &self.graph
    }

    /// Returns the handle currently bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<TriggerId> {
        self.registry.get(name).copied()
    }

    /// Returns the current bindings, in order of first definition.
    pub fn names(&self) -> impl Iterator<Item = (&str, TriggerId)> {
        self.order
            .iter()
            .filter_map(|name| self.registry.get(name).map(|id| (name.as_str(), *id)))
    }

    /// Returns the triggers selected by `ADD` lines, in order.
    pub fn active(&self) -> &[ActiveTrigger] {
        &self.active
    }

    /// Returns every rejected line, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parses one non-comment line.
    fn parse_line(&mut self, line_number: usize, line: &str) -> TriggerResult<()> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(TriggerError::MissingDirective);
        }

        let keyword = fields[1];
        match Directive::from_keyword(keyword) {
            Some(Directive::Add) => {
                self.add(line_number, line, &fields[2..]);
                Ok(())
            }
            Some(Directive::Define(kind)) => self.define(kind, &fields),
            None => {
                let suggestion = find_similar_name(keyword, Directive::keywords());
                Err(TriggerError::unknown_directive(keyword, suggestion))
            }
        }
    }

    /// Builds a trigger from a definition line and binds its name.
    fn define(&mut self, kind: TriggerKind, fields: &[&str]) -> TriggerResult<()> {
        if fields.len() != kind.field_count() {
            return Err(TriggerError::FieldCount {
                directive: kind.keyword().to_string(),
                expected: kind.field_count(),
                found: fields.len(),
            });
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(TriggerError::EmptyName);
        }

        let trigger = match kind {
            TriggerKind::Title => Trigger::title(fields[2]),
            TriggerKind::Description => Trigger::description(fields[2]),
            TriggerKind::Before => Trigger::before(fields[2])?,
            TriggerKind::After => Trigger::after(fields[2])?,
            TriggerKind::Not => Trigger::Not(self.resolve(fields[2], kind.keyword())?),
            TriggerKind::And => Trigger::And(
                self.resolve(fields[2], kind.keyword())?,
                self.resolve(fields[3], kind.keyword())?,
            ),
            TriggerKind::Or => Trigger::Or(
                self.resolve(fields[2], kind.keyword())?,
                self.resolve(fields[3], kind.keyword())?,
            ),
        };

        if let Trigger::TitlePhrase(phrase) | Trigger::DescriptionPhrase(phrase) = &trigger {
            if phrase.is_empty() {
                warn!(trigger = name, "empty phrase matches every item");
            }
        }

        let id = self.graph.push(trigger)?;
        if self.registry.insert(name.to_string(), id).is_none() {
            self.order.push(name.to_string());
        } else {
            debug!(trigger = name, "redefined trigger");
        }
        debug!(trigger = name, kind = %kind, %id, "created trigger");
        Ok(())
    }

    /// Appends each bound name to the active list; unknown names are reported.
    fn add(&mut self, line_number: usize, line: &str, names: &[&str]) {
        for name in names {
            match self.resolve(name, Directive::ADD) {
                Ok(id) => {
                    debug!(trigger = *name, "added trigger to active list");
                    self.active.push(ActiveTrigger::new(*name, id));
                }
                Err(error) => self.report(line_number, line, error),
            }
        }
    }

    /// Resolves an already-bound name to its handle.
    fn resolve(&self, name: &str, directive: &str) -> TriggerResult<TriggerId> {
        self.lookup(name).ok_or_else(|| {
            let suggestion = find_similar_name(name, self.order.iter().map(String::as_str));
            TriggerError::unknown_trigger(name, directive, suggestion)
        })
    }

    fn report(&mut self, line: usize, text: &str, error: TriggerError) {
        warn!(line, "skipping trigger line '{text}': {error}");
        self.diagnostics.push(Diagnostic {
            line,
            text: text.to_string(),
            error,
        });
    }
}

fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}
