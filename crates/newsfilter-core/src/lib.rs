//! Trigger composition and evaluation engine for news items.
//!
//! This crate turns a flat, line-oriented trigger file into a graph of
//! boolean predicates and evaluates that graph against [`Item`]s.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use newsfilter_core::trigger::{filter_items, TriggerConfig};
//! use newsfilter_core::Item;
//!
//! let config = TriggerConfig::parse(
//!     "t1,TitleTrigger,election\n\
//!      ADD,ADD,t1\n",
//! );
//!
//! let items = vec![Item::new(
//!     "guid-1",
//!     "Election results are in",
//!     "",
//!     "https://example.com/1",
//!     Utc.with_ymd_and_hms(2024, 11, 6, 12, 0, 0).unwrap(),
//! )];
//!
//! let matches = filter_items(&config, &items);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].trigger.name(), "t1");
//! ```

mod item;
pub mod trigger;

pub use item::Item;
pub use trigger::{contains_phrase, parse_threshold, REFERENCE_TZ};
