use std::collections::BTreeMap;

use anyhow::{Result, bail};
use log::warn;
use serde_json::{Map, Value};

use super::dates::parse_kickoff;
use crate::domain::{Fixture, FixtureIndex, FixtureKey, coerce_int};

pub const ROUND_NUMBER: &str = "Round Number";
pub const HOME_TEAM: &str = "Home Team";
pub const AWAY_TEAM: &str = "Away Team";
pub const DATE: &str = "Date";
pub const LOCATION: &str = "Location";
pub const HOME_SCORE: &str = "Home Score";
pub const AWAY_SCORE: &str = "Away Score";

/// One table row keyed by trimmed column name
pub type Row = BTreeMap<String, Value>;

pub fn row_from_object(object: Map<String, Value>) -> Row {
    object
        .into_iter()
        .map(|(column, value)| (column.trim().to_string(), value))
        .collect()
}

/// Convert a row into a fixture.
///
/// A table without a `Round Number` column is unusable and fails the load.
/// A row whose round cell is blank or non-numeric is skipped.
pub fn fixture_from_row(index: FixtureIndex, row: &Row) -> Result<Option<Fixture>> {
    let Some(round_cell) = row.get(ROUND_NUMBER) else {
        bail!("Fixture row {} has no '{}' column", index, ROUND_NUMBER);
    };

    let Some(round) = coerce_int(round_cell) else {
        warn!("Skipping fixture row {}: round number {} is not an integer", index, round_cell);
        return Ok(None);
    };

    Ok(Some(Fixture {
        key: FixtureKey::new(round, index),
        home_team: text_cell(row, HOME_TEAM),
        away_team: text_cell(row, AWAY_TEAM),
        kickoff: row.get(DATE).and_then(parse_kickoff),
        location: text_cell(row, LOCATION),
        home_score: row.get(HOME_SCORE).and_then(coerce_int),
        away_score: row.get(AWAY_SCORE).and_then(coerce_int),
    }))
}

fn text_cell(row: &Row, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn fixtures_from_rows(rows: &[Row]) -> Result<Vec<Fixture>> {
    let mut fixtures = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if let Some(fixture) = fixture_from_row(index, row)? {
            fixtures.push(fixture);
        }
    }
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(object) => row_from_object(object),
            _ => panic!("row literal must be an object"),
        }
    }

    #[test]
    fn column_names_are_trimmed() {
        let row = row(json!({" Round Number ": 1, "Home Team  ": "Arsenal"}));
        assert!(row.contains_key(ROUND_NUMBER));
        assert!(row.contains_key(HOME_TEAM));
    }

    #[test]
    fn played_row_becomes_fixture() {
        let row = row(json!({
            "Round Number": 2,
            "Home Team": "Arsenal",
            "Away Team": "Chelsea",
            "Date": "2025-08-23 12:30:00",
            "Location": "Emirates Stadium",
            "Home Score": 2.0,
            "Away Score": 1.0
        }));

        let fixture = fixture_from_row(7, &row).unwrap().unwrap();
        assert_eq!(fixture.key, FixtureKey::new(2, 7));
        assert_eq!(fixture.home_team, "Arsenal");
        assert_eq!(fixture.location, "Emirates Stadium");
        assert!(fixture.kickoff.is_some());
        assert_eq!(fixture.result(), Some((2, 1)));
    }

    #[test]
    fn blank_scores_mean_not_played() {
        let row = row(json!({
            "Round Number": 3,
            "Home Team": "Spurs",
            "Away Team": "Fulham",
            "Date": "not a date",
            "Home Score": null,
            "Away Score": ""
        }));

        let fixture = fixture_from_row(0, &row).unwrap().unwrap();
        assert!(fixture.kickoff.is_none());
        assert!(!fixture.is_played());
    }

    #[test]
    fn non_numeric_round_is_skipped() {
        let row = row(json!({"Round Number": "TBD", "Home Team": "A"}));
        assert!(fixture_from_row(0, &row).unwrap().is_none());
    }

    #[test]
    fn missing_round_column_is_fatal() {
        let row = row(json!({"Home Team": "A", "Away Team": "B"}));
        assert!(fixture_from_row(0, &row).is_err());
    }

    #[test]
    fn skipped_rows_keep_positions_of_later_rows() {
        let rows = vec![
            row(json!({"Round Number": 1})),
            row(json!({"Round Number": null})),
            row(json!({"Round Number": 1})),
        ];
        let fixtures = fixtures_from_rows(&rows).unwrap();
        let indices: Vec<_> = fixtures.iter().map(|f| f.index()).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
