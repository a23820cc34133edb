use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::coerce::lenient_int;

pub type RoundNumber = i64;
pub type FixtureIndex = usize;

/// Identity shared by fixtures and predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FixtureKey {
    pub round: RoundNumber,
    pub index: FixtureIndex,
}

impl FixtureKey {
    pub fn new(round: RoundNumber, index: FixtureIndex) -> Self {
        Self { round, index }
    }
}

/// One scheduled match between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub key: FixtureKey,
    pub home_team: String,
    pub away_team: String,
    pub kickoff: Option<NaiveDateTime>,
    pub location: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

impl Fixture {
    pub fn round(&self) -> RoundNumber {
        self.key.round
    }

    pub fn index(&self) -> FixtureIndex {
        self.key.index
    }

    /// Final score, once both sides have been recorded
    pub fn result(&self) -> Option<(i64, i64)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn is_played(&self) -> bool {
        self.result().is_some()
    }
}

/// A player's predicted scoreline for one fixture.
///
/// Either side may be missing when the stored value could not be read as an
/// integer; such a prediction scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "lenient_int")]
    pub home: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub away: Option<i64>,
}

impl Prediction {
    pub fn new(home: i64, away: i64) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }
}

pub type RoundPredictions = BTreeMap<FixtureIndex, Prediction>;
pub type PlayerRecord = BTreeMap<RoundNumber, RoundPredictions>;

/// Aggregated standing for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub exact_scores: u32,
    pub correct_results: u32,
    pub total_points: i64,
}

/// Leaderboard row after ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: usize,
    pub player: String,
    pub exact_scores: u32,
    pub correct_results: u32,
    pub total_points: i64,
}

/// Points per scored round for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBreakdown {
    pub total_points: i64,
    pub rounds: BTreeMap<RoundNumber, i64>,
}
