//! Output formatting utilities for the nf CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`stories`] - Matched story output (run, watch)
//! - [`triggers`] - Trigger file summaries (check)
//! - [`helpers`] - Common formatting utilities (truncation, timestamps, kinds)

pub mod helpers;
mod stories;
mod triggers;

pub use stories::{format_match_line, format_matches_json, format_matches_table, MatchOutput};
pub use triggers::{format_check_json, format_check_table};
