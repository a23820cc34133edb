use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use log::debug;
use serde_json::Value;

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a kickoff cell. Anything unreadable means the fixture has no date.
///
/// Kickoffs are local wall-clock times. Values carrying a UTC offset are
/// converted to the local timezone so they compare with the local clock.
pub fn parse_kickoff(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_kickoff_str(s),
        Value::Null => None,
        other => {
            debug!("Ignoring non-text kickoff value: {}", other);
            None
        }
    }
}

pub fn parse_kickoff_str(date_str: &str) -> Option<NaiveDateTime> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    debug!("Unparseable kickoff date: {:?}", date_str);
    None
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::domain::{Fixture, FixtureKey};
    use crate::scoring::is_locked;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn accepts_common_spreadsheet_formats() {
        let expected = at(2025, 8, 16, 15, 0);
        assert_eq!(parse_kickoff(&json!("2025-08-16 15:00:00")), Some(expected));
        assert_eq!(parse_kickoff(&json!("2025-08-16T15:00:00")), Some(expected));
        assert_eq!(parse_kickoff(&json!("2025-08-16 15:00")), Some(expected));
        assert_eq!(parse_kickoff(&json!("2025-08-16")), Some(at(2025, 8, 16, 0, 0)));
    }

    fn local(instant: &str) -> NaiveDateTime {
        DateTime::parse_from_rfc3339(instant)
            .unwrap()
            .with_timezone(&Local)
            .naive_local()
    }

    #[test]
    fn rfc3339_offsets_become_local_wall_clock() {
        assert_eq!(
            parse_kickoff(&json!("2025-08-16T17:00:00+02:00")),
            Some(local("2025-08-16T15:00:00Z"))
        );
        assert_eq!(
            parse_kickoff(&json!("2025-08-16T15:00:00Z")),
            Some(local("2025-08-16T15:00:00Z"))
        );
    }

    #[test]
    fn offset_kickoff_locks_once_the_instant_has_passed() {
        let fixture = Fixture {
            key: FixtureKey::new(1, 0),
            home_team: "Arsenal".into(),
            away_team: "Chelsea".into(),
            kickoff: parse_kickoff(&json!("2025-08-16T15:00:00Z")),
            location: String::new(),
            home_score: None,
            away_score: None,
        };

        assert!(!is_locked([&fixture], local("2025-08-16T14:59:00Z")));
        assert!(is_locked([&fixture], local("2025-08-16T15:00:00Z")));
        assert!(is_locked([&fixture], local("2025-08-16T16:00:00Z")));
    }

    #[test]
    fn garbage_means_no_date() {
        assert_eq!(parse_kickoff(&json!("TBC")), None);
        assert_eq!(parse_kickoff(&json!("")), None);
        assert_eq!(parse_kickoff(&json!(null)), None);
        assert_eq!(parse_kickoff(&json!(45678)), None);
    }
}
