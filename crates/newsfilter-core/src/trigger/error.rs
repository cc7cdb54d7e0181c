//! Error types for trigger configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for trigger operations.
pub type TriggerResult<T> = Result<T, TriggerError>;

/// Errors that can occur while building triggers from configuration.
///
/// Every variant except [`TriggerError::Read`] is reported per line: the
/// offending line is skipped and parsing continues.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The line has fewer than two comma-separated fields.
    #[error("expected a trigger name and a directive keyword")]
    MissingDirective,

    /// A definition line has an empty trigger name.
    #[error("trigger name is empty")]
    EmptyName,

    /// The directive keyword is not recognized.
    #[error("unknown directive '{keyword}'{}", did_you_mean(.suggestion))]
    UnknownDirective {
        /// The unrecognized keyword.
        keyword: String,
        /// A close known keyword, if any.
        suggestion: Option<String>,
    },

    /// A directive has the wrong number of fields.
    #[error("{directive} takes {expected} fields, found {found}")]
    FieldCount {
        /// The directive keyword.
        directive: String,
        /// Required number of fields, including name and keyword.
        expected: usize,
        /// Number of fields on the line.
        found: usize,
    },

    /// A composite or `ADD` line refers to a name that is not bound yet.
    #[error("unknown trigger '{name}' in {directive}{}", did_you_mean(.suggestion))]
    UnknownTrigger {
        /// The referenced name.
        name: String,
        /// The directive keyword of the line.
        directive: String,
        /// A close bound name, if any.
        suggestion: Option<String>,
    },

    /// A time threshold does not match the required format.
    #[error("invalid time '{text}' (expected e.g. '3 Oct 2016 17:00:10')")]
    InvalidTime {
        /// The text that failed to parse.
        text: String,
    },

    /// A time threshold falls into a daylight-saving gap of the reference zone.
    #[error("time '{text}' does not exist in the reference timezone")]
    NonexistentTime {
        /// The text that named the skipped wall-clock time.
        text: String,
    },

    /// A composite was built from a handle that is not part of the graph.
    #[error("trigger handle {index} is not defined in this graph")]
    UnknownHandle {
        /// The offending arena index.
        index: usize,
    },

    /// The trigger file could not be read at all.
    #[error("failed to read trigger file '{path}': {source}")]
    Read {
        /// Path of the trigger file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Broad category of a [`TriggerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerErrorKind {
    /// Wrong field count, empty name, or unknown keyword.
    Syntax,
    /// Reference to an unbound trigger.
    Reference,
    /// Unparseable or nonexistent time threshold.
    TimeParse,
    /// The configuration source could not be read.
    Fatal,
}

impl TriggerError {
    /// Creates an unknown directive error.
    pub fn unknown_directive(keyword: impl Into<String>, suggestion: Option<String>) -> Self {
        TriggerError::UnknownDirective {
            keyword: keyword.into(),
            suggestion,
        }
    }

    /// Creates an unknown trigger error.
    pub fn unknown_trigger(
        name: impl Into<String>,
        directive: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        TriggerError::UnknownTrigger {
            name: name.into(),
            directive: directive.into(),
            suggestion,
        }
    }

    /// Creates an invalid time error.
    pub fn invalid_time(text: impl Into<String>) -> Self {
        TriggerError::InvalidTime { text: text.into() }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> TriggerErrorKind {
        match self {
            TriggerError::MissingDirective
            | TriggerError::EmptyName
            | TriggerError::UnknownDirective { .. }
            | TriggerError::FieldCount { .. } => TriggerErrorKind::Syntax,
            TriggerError::UnknownTrigger { .. } | TriggerError::UnknownHandle { .. } => {
                TriggerErrorKind::Reference
            }
            TriggerError::InvalidTime { .. } | TriggerError::NonexistentTime { .. } => {
                TriggerErrorKind::TimeParse
            }
            TriggerError::Read { .. } => TriggerErrorKind::Fatal,
        }
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}
