//! The news item record evaluated by triggers.

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::trigger::REFERENCE_TZ;

/// A single news story.
///
/// Items are immutable once built. The publish timestamp is converted into
/// [`REFERENCE_TZ`] on construction so every comparison made by a trigger
/// happens between instants expressed in the same zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    id: String,
    title: String,
    description: String,
    link: String,
    published_at: DateTime<Tz>,
}

impl Item {
    /// Creates a new item, converting `published_at` into the reference zone.
    pub fn new<T: TimeZone>(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        published_at: DateTime<T>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            published_at: published_at.with_timezone(&REFERENCE_TZ),
        }
    }

    /// Returns the opaque unique identifier (usually the feed guid).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the publish time in the reference zone.
    pub fn published_at(&self) -> DateTime<Tz> {
        self.published_at
    }
}

/// Wire shape of an [`Item`]: the timestamp travels as RFC 3339 with an offset.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
    published_at: DateTime<FixedOffset>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(
            record.id,
            record.title,
            record.description,
            record.link,
            record.published_at,
        )
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            published_at: item.published_at.fixed_offset(),
            id: item.id,
            title: item.title,
            description: item.description,
            link: item.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    #[test]
    fn test_new_converts_to_reference_zone() {
        let utc = Utc.with_ymd_and_hms(2016, 10, 13, 3, 59, 59).unwrap();
        let item = Item::new("1", "t", "d", "l", utc);

        // October is daylight time in New York (UTC-4)
        assert_eq!(item.published_at().hour(), 23);
        assert_eq!(item.published_at(), utc);
    }

    #[test]
    fn test_new_keeps_instant_for_fixed_offsets() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let published = plus_two.with_ymd_and_hms(2020, 1, 1, 7, 0, 0).unwrap();
        let item = Item::new("1", "t", "d", "l", published);

        assert_eq!(item.published_at(), published);
        assert_eq!(item.published_at().hour(), 0);
        assert_eq!(item.published_at().timezone(), REFERENCE_TZ);
    }

    #[test]
    fn test_accessors() {
        let item = Item::new(
            "guid-7",
            "A title",
            "A description",
            "https://example.com/7",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        assert_eq!(item.id(), "guid-7");
        assert_eq!(item.title(), "A title");
        assert_eq!(item.description(), "A description");
        assert_eq!(item.link(), "https://example.com/7");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "id": "abc",
            "title": "Markets rally",
            "description": "Stocks rose",
            "link": "https://example.com/abc",
            "published_at": "2024-03-01T15:30:00Z"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), "abc");
        assert_eq!(item.title(), "Markets rally");
        assert_eq!(
            item.published_at(),
            Utc.with_ymd_and_hms(2024, 3, 1, 15, 30, 0).unwrap()
        );
        // March 1st is standard time (UTC-5)
        assert_eq!(item.published_at().hour(), 10);
    }

    #[test]
    fn test_deserialize_defaults_optional_text() {
        let json = r#"{"id": "x", "title": "Only a title", "published_at": "2024-03-01T15:30:00-05:00"}"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.description(), "");
        assert_eq!(item.link(), "");
    }

    #[test]
    fn test_deserialize_rejects_missing_timestamp() {
        let json = r#"{"id": "x", "title": "No date"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_serialize_renders_reference_offset() {
        let item = Item::new(
            "x",
            "t",
            "",
            "",
            Utc.with_ymd_and_hms(2024, 7, 4, 16, 0, 0).unwrap(),
        );
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["published_at"], "2024-07-04T12:00:00-04:00");

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
