//! Parsing of the textual start-time and duration forms used by exam slots.
//!
//! - Start time: `HH:MM` (24-hour) → minutes since midnight.
//! - Duration: `<h>h <m>m`, either component optional → minutes.

use crate::error::{Error, Result};

/// Parses `HH:MM` into minutes since midnight.
///
/// An empty hour or minute component counts as zero (`":30"` is 30).
///
/// # Errors
/// [`Error::InvalidTime`] if the colon is missing or a component is not
/// a non-negative integer.
///
/// # Examples
///
/// ```
/// use exam_metaheur::model::parse_time;
///
/// assert_eq!(parse_time("09:30").unwrap(), 570);
/// assert!(parse_time("0930").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<u32> {
    let err = || Error::InvalidTime(text.to_string());

    let (hours, minutes) = text.trim().split_once(':').ok_or_else(err)?;
    let hours = parse_component(hours.trim()).ok_or_else(err)?;
    let minutes = parse_component(minutes.trim()).ok_or_else(err)?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(err)
}

/// Parses a duration such as `"2h 30m"`, `"1h"` or `"45m"` into minutes.
///
/// # Errors
/// [`Error::InvalidDuration`] if neither component is present, a lone
/// minute component lacks its `m` suffix, or a component is not an integer.
/// After an hour part the `m` suffix is optional (`"2h 30"` is 150).
///
/// # Examples
///
/// ```
/// use exam_metaheur::model::parse_duration;
///
/// assert_eq!(parse_duration("2h 30m").unwrap(), 150);
/// assert_eq!(parse_duration("1h").unwrap(), 60);
/// assert_eq!(parse_duration("45m").unwrap(), 45);
/// ```
pub fn parse_duration(text: &str) -> Result<u32> {
    let err = || Error::InvalidDuration(text.to_string());

    let trimmed = text.trim();
    let (hours, rest) = match trimmed.split_once('h') {
        Some((h, rest)) => (Some(h.trim()), rest.trim()),
        None => (None, trimmed),
    };
    // A bare number is minutes only after an hour part ("2h 30").
    let minutes = match rest.strip_suffix('m') {
        Some(m) => m.trim(),
        None if rest.is_empty() || hours.is_some() => rest,
        None => return Err(err()),
    };
    let hours = hours.unwrap_or("");

    if hours.is_empty() && minutes.is_empty() {
        return Err(err());
    }

    let hours = parse_component(hours).ok_or_else(err)?;
    let minutes = parse_component(minutes).ok_or_else(err)?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(err)
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() {
        Some(0)
    } else if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("00:00").unwrap(), 0);
        assert_eq!(parse_time("09:00").unwrap(), 540);
        assert_eq!(parse_time("13:45").unwrap(), 825);
        assert_eq!(parse_time(" 8:05 ").unwrap(), 485);
    }

    #[test]
    fn test_parse_time_empty_components() {
        assert_eq!(parse_time(":30").unwrap(), 30);
        assert_eq!(parse_time("10:").unwrap(), 600);
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        assert_eq!(
            parse_time("0930"),
            Err(Error::InvalidTime("0930".to_string()))
        );
        assert!(parse_time("aa:10").is_err());
        assert!(parse_time("10:-5").is_err());
        assert!(parse_time("10:00:00").is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("2h 30m").unwrap(), 150);
        assert_eq!(parse_duration("1h").unwrap(), 60);
        assert_eq!(parse_duration("45m").unwrap(), 45);
        assert_eq!(parse_duration("3h0m").unwrap(), 180);
        assert_eq!(parse_duration(" 0h 15m ").unwrap(), 15);
    }

    #[test]
    fn test_parse_duration_minutes_suffix_optional_after_hours() {
        assert_eq!(parse_duration("2h 30").unwrap(), 150);
        assert_eq!(parse_duration("1h5").unwrap(), 65);
    }

    #[test]
    fn test_parse_duration_rejects_malformed() {
        assert_eq!(
            parse_duration(""),
            Err(Error::InvalidDuration(String::new()))
        );
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("90").is_err());
        assert!(parse_duration("30 m5").is_err());
        assert!(parse_duration("xh 10m").is_err());
    }

    proptest! {
        #[test]
        fn prop_time_matches_components(h in 0u32..24, m in 0u32..60) {
            let text = format!("{h:02}:{m:02}");
            prop_assert_eq!(parse_time(&text).unwrap(), h * 60 + m);
        }

        #[test]
        fn prop_duration_matches_components(h in 0u32..12, m in 0u32..60) {
            let text = format!("{h}h {m}m");
            prop_assert_eq!(parse_duration(&text).unwrap(), h * 60 + m);
        }
    }
}
