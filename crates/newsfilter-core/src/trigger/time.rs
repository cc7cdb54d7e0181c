//! Time thresholds and the reference timezone.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use super::error::{TriggerError, TriggerResult};

/// The zone every timestamp is converted into before comparison (US Eastern).
pub const REFERENCE_TZ: Tz = chrono_tz::America::New_York;

/// `strftime` format of a threshold, e.g. `3 Oct 2016 17:00:10`.
pub const THRESHOLD_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Parses a threshold as wall-clock time in [`REFERENCE_TZ`].
///
/// When the wall-clock time occurs twice (the autumn daylight-saving
/// transition) the earlier instant is used.
///
/// # Errors
///
/// Returns [`TriggerError::InvalidTime`] if the text does not match
/// [`THRESHOLD_FORMAT`], and [`TriggerError::NonexistentTime`] if it names a
/// time skipped by the spring daylight-saving transition.
pub fn parse_threshold(text: &str) -> TriggerResult<DateTime<Tz>> {
    let trimmed = text.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, THRESHOLD_FORMAT)
        .map_err(|_| TriggerError::invalid_time(trimmed))?;

    match REFERENCE_TZ.from_local_datetime(&naive) {
        LocalResult::Single(time) => Ok(time),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TriggerError::NonexistentTime {
            text: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_daylight_time() {
        let time = parse_threshold("12 Oct 2016 23:59:59").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2016, 10, 13, 3, 59, 59).unwrap());
    }

    #[test]
    fn test_parse_standard_time() {
        let time = parse_threshold("01 Jan 2020 00:00:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2020, 1, 1, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_threshold("  3 Oct 2016 17:00:10 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        for text in [
            "2016-10-03 17:00:10",
            "3 Oct 2016",
            "3 Oct 2016 5:00pm",
            "33 Oct 2016 17:00:10",
            "",
        ] {
            assert!(
                matches!(parse_threshold(text), Err(TriggerError::InvalidTime { .. })),
                "expected '{text}' to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_ambiguous_picks_earliest() {
        // 2023-11-05 01:30 happens twice in New York; the first is EDT (UTC-4)
        let time = parse_threshold("05 Nov 2023 01:30:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2023, 11, 5, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_nonexistent_time() {
        // 2023-03-12 02:30 is skipped in New York
        assert!(matches!(
            parse_threshold("12 Mar 2023 02:30:00"),
            Err(TriggerError::NonexistentTime { .. })
        ));
    }
}
