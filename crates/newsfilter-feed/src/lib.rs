//! RSS feed client for newsfilter.
//!
//! Fetches RSS 2.0 channels over HTTP and turns their entries into
//! [`newsfilter_core::Item`]s ready for trigger evaluation: text is
//! HTML-unescaped and tag-stripped, and every publish date is parsed into a
//! timezone-aware timestamp. Entries without a usable date are dropped.

pub mod client;
pub mod error;
mod html;
pub mod parse;

pub use client::FeedClient;
pub use error::{FeedError, FeedResult};
pub use parse::{parse_channel, parse_pub_date};
