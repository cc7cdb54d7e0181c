//! Trigger definitions, the predicate graph, and the filter driver.
//!
//! Triggers are declared in a flat, comma-separated configuration format.
//! Each line either defines a named trigger or adds already-defined triggers
//! to the active list that items are filtered against.
//!
//! # Supported Syntax
//!
//! ## Comments
//! - Blank lines and lines starting with `#` or `//` are ignored.
//!
//! ## Phrase Triggers
//! - `name,TitleTrigger,phrase` - The phrase appears in the title
//! - `name,DescriptionTrigger,phrase` - The phrase appears in the description
//!
//! ## Time Triggers
//! - `name,BeforeTrigger,3 Oct 2016 17:00:10` - Published strictly before
//! - `name,AfterTrigger,3 Oct 2016 17:00:10` - Published strictly after
//!
//! Times are wall-clock times in [`REFERENCE_TZ`] (US Eastern).
//!
//! ## Composite Triggers
//! - `name,NotTrigger,other` - Inverts `other`
//! - `name,AndTrigger,left,right` - Both operands match
//! - `name,OrTrigger,left,right` - Either operand matches
//!
//! Operands must already be defined on an earlier line.
//!
//! ## Activation
//! - `ADD,ADD,name1,name2,...` - Appends triggers to the active list
//!
//! # Example
//!
//! ```
//! use newsfilter_core::trigger::{TriggerConfig, TriggerKind};
//!
//! let config = TriggerConfig::parse(
//!     "t1,TitleTrigger,election\n\
//!      t2,DescriptionTrigger,Trump\n\
//!      t3,AndTrigger,t1,t2\n\
//!      ADD,ADD,t3\n",
//! );
//!
//! assert!(config.diagnostics().is_empty());
//! let t3 = config.lookup("t3").unwrap();
//! assert_eq!(config.graph().get(t3).unwrap().kind(), TriggerKind::And);
//! assert_eq!(config.active().len(), 1);
//! ```

mod ast;
mod error;
mod evaluator;
mod graph;
mod parser;
mod phrase;
mod suggest;
mod time;

pub use ast::{Directive, Trigger, TriggerId, TriggerKind};
pub use error::{TriggerError, TriggerErrorKind, TriggerResult};
pub use evaluator::{filter_items, Match, TriggerEvaluator};
pub use graph::{Evaluation, TriggerGraph};
pub use parser::{ActiveTrigger, Diagnostic, TriggerConfig};
pub use phrase::{contains_phrase, Phrase};
pub use time::{parse_threshold, REFERENCE_TZ, THRESHOLD_FORMAT};
