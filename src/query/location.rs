//! Location-state round-tripping.
//!
//! The shareable location state is a flat string map owned by the host. The
//! engine echoes its free-text, sort, and time-range parameters into it after
//! each settled change and seeds itself from the same keys on construction.
//!
//! The time range is stored as one paired value, `after,before`, with each
//! side in RFC 3339 and an empty side for an open bound. Unknown keys are
//! preserved; malformed values parse to an absent parameter instead of
//! failing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::boundary::TimeRange;

const TEXT_KEY: &str = "search";
const SORT_KEY: &str = "sort";
const TIME_KEY: &str = "time";

/// Parameters read back from location state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParams {
    pub text: String,
    pub sort: Option<String>,
    pub time_range: Option<TimeRange>,
}

/// Writes the given parameters into `state`, removing keys for empty values.
pub fn write_location(
    state: &mut BTreeMap<String, String>,
    text: &str,
    sort: &str,
    time_range: Option<&TimeRange>,
) {
    if text.is_empty() {
        state.remove(TEXT_KEY);
    } else {
        state.insert(TEXT_KEY.to_string(), text.to_string());
    }
    state.insert(SORT_KEY.to_string(), sort.to_string());
    match time_range {
        Some(range) if range.after.is_some() || range.before.is_some() => {
            state.insert(TIME_KEY.to_string(), encode_time_range(range));
        }
        _ => {
            state.remove(TIME_KEY);
        }
    }
}

/// Reads search parameters back out of `state`.
///
/// Missing or malformed keys yield absent parameters; this never fails.
#[must_use]
pub fn read_location(state: &BTreeMap<String, String>) -> LocationParams {
    LocationParams {
        text: state.get(TEXT_KEY).cloned().unwrap_or_default(),
        sort: state.get(SORT_KEY).cloned(),
        time_range: state.get(TIME_KEY).and_then(|raw| decode_time_range(raw)),
    }
}

fn encode_time_range(range: &TimeRange) -> String {
    let side = |bound: &Option<DateTime<Utc>>| {
        bound
            .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
            .unwrap_or_default()
    };
    format!("{},{}", side(&range.after), side(&range.before))
}

fn decode_time_range(raw: &str) -> Option<TimeRange> {
    let (after, before) = raw.split_once(',')?;
    let parse = |side: &str| {
        if side.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(side)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    };
    let range = TimeRange {
        after: parse(after),
        before: parse(before),
    };
    if range.after.is_none() && range.before.is_none() {
        return None;
    }
    Some(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parameters_round_trip_through_state() {
        let range = TimeRange {
            after: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            before: Some(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()),
        };
        let mut state = BTreeMap::new();
        write_location(&mut state, "abc", "Top", Some(&range));

        let params = read_location(&state);
        assert_eq!(params.text, "abc");
        assert_eq!(params.sort.as_deref(), Some("Top"));
        assert_eq!(params.time_range, Some(range));
    }

    #[test]
    fn open_bounds_round_trip() {
        let range = TimeRange {
            after: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            before: None,
        };
        let mut state = BTreeMap::new();
        write_location(&mut state, "", "Newest", Some(&range));

        assert_eq!(state.get("time").unwrap(), "2024-03-01T00:00:00Z,");
        assert!(!state.contains_key("search"));
        assert_eq!(read_location(&state).time_range, Some(range));
    }

    #[test]
    fn malformed_values_parse_to_absent() {
        let mut state = BTreeMap::new();
        state.insert("time".to_string(), "not-a-date,also-not".to_string());
        state.insert("unrelated".to_string(), "kept".to_string());

        let params = read_location(&state);
        assert_eq!(params.time_range, None);
        assert_eq!(params.text, "");
    }

    #[test]
    fn unknown_keys_survive_a_write() {
        let mut state = BTreeMap::new();
        state.insert("tab".to_string(), "history".to_string());
        write_location(&mut state, "abc", "Top", None);
        assert_eq!(state.get("tab").unwrap(), "history");
    }
}
