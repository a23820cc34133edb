use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Fixture, FixtureIndex, Prediction, RankedEntry, RoundNumber, RoundPredictions};
use crate::scoring::PredictionDetail;
use crate::services::context::RoundStatus;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub items: Vec<RankedEntry>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBreakdownResponse {
    pub player: String,
    pub total_points: i64,
    pub rounds: BTreeMap<RoundNumber, i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundResponse {
    pub player: String,
    pub round: RoundNumber,
    /// `None` while results are pending
    pub round_points: Option<i64>,
    pub predictions: Vec<PredictionDetail>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundsResponse {
    pub rounds: Vec<RoundStatus>,
    pub default_round: Option<RoundNumber>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureView {
    pub index: FixtureIndex,
    pub home_team: String,
    pub away_team: String,
    pub kickoff: Option<NaiveDateTime>,
    pub location: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

impl From<Fixture> for FixtureView {
    fn from(fixture: Fixture) -> Self {
        Self {
            index: fixture.key.index,
            home_team: fixture.home_team,
            away_team: fixture.away_team,
            kickoff: fixture.kickoff,
            location: fixture.location,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDetailResponse {
    #[serde(flatten)]
    pub status: RoundStatus,
    pub fixtures: Vec<FixtureView>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionInput {
    pub index: FixtureIndex,
    pub home: i64,
    pub away: i64,
}

/// Body of a round submission. Replaces the player's whole round.
#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub predictions: Vec<PredictionInput>,
}

impl SubmissionRequest {
    pub fn into_round(self) -> RoundPredictions {
        self.predictions
            .into_iter()
            .map(|p| (p.index, Prediction::new(p.home, p.away)))
            .collect()
    }
}
