use std::collections::BTreeMap;

use serde::Serialize;

use super::engine::{FixtureScore, ScoringRules};
use crate::catalog::FixtureCatalog;
use crate::domain::{
    FixtureIndex, FixtureKey, LeaderboardEntry, PlayerBreakdown, RankedEntry, RoundNumber,
    RoundPredictions,
};
use crate::store::PredictionStore;

/// Totals for one player in one round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub points: i64,
    pub exact_scores: u32,
    pub correct_results: u32,
}

impl RoundTally {
    fn add(&mut self, score: FixtureScore) {
        self.points += score.points;
        self.exact_scores += u32::from(score.is_exact);
        self.correct_results += u32::from(score.is_correct_result);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailStatus {
    Scored,
    Pending,
    NotFound,
}

/// One predicted fixture as shown in a player's round detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDetail {
    pub index: FixtureIndex,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub predicted_home: Option<i64>,
    pub predicted_away: Option<i64>,
    pub actual_home: Option<i64>,
    pub actual_away: Option<i64>,
    pub points: Option<i64>,
    pub status: DetailStatus,
}

/// Folds every player's predictions against the fixture results
pub struct Aggregator<'a> {
    catalog: &'a FixtureCatalog,
    store: &'a PredictionStore,
    rules: ScoringRules,
}

impl<'a> Aggregator<'a> {
    pub fn new(catalog: &'a FixtureCatalog, store: &'a PredictionStore) -> Self {
        Self::with_rules(catalog, store, ScoringRules::default())
    }

    pub fn with_rules(
        catalog: &'a FixtureCatalog,
        store: &'a PredictionStore,
        rules: ScoringRules,
    ) -> Self {
        Self {
            catalog,
            store,
            rules,
        }
    }

    /// Score one round of predictions.
    ///
    /// `None` while no fixture of the round has a result, so pending rounds
    /// stay out of totals and breakdowns. Predictions for unplayed or unknown
    /// fixtures add nothing.
    pub fn score_round(
        &self,
        round: RoundNumber,
        predictions: &RoundPredictions,
    ) -> Option<RoundTally> {
        if !self.catalog.has_results(round) {
            return None;
        }

        let mut tally = RoundTally::default();
        for (&index, prediction) in predictions {
            let Some(fixture) = self.catalog.get(FixtureKey::new(round, index)) else {
                continue;
            };
            if fixture.is_played() {
                tally.add(self.rules.score_prediction(prediction, fixture));
            }
        }
        Some(tally)
    }

    /// Entry for every player in the store, including those with no predictions
    pub fn leaderboard(&self) -> BTreeMap<String, LeaderboardEntry> {
        self.store
            .players()
            .map(|(player, record)| {
                let mut entry = LeaderboardEntry::default();
                for tally in record
                    .iter()
                    .filter_map(|(&round, predictions)| self.score_round(round, predictions))
                {
                    entry.total_points += tally.points;
                    entry.exact_scores += tally.exact_scores;
                    entry.correct_results += tally.correct_results;
                }
                (player.to_string(), entry)
            })
            .collect()
    }

    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank_leaderboard(self.leaderboard())
    }

    /// Points per scored round. Unknown players get an empty breakdown.
    pub fn player_breakdown(&self, player: &str) -> PlayerBreakdown {
        let mut breakdown = PlayerBreakdown::default();
        let Some(record) = self.store.player(player) else {
            return breakdown;
        };

        for (&round, predictions) in record {
            if let Some(tally) = self.score_round(round, predictions) {
                breakdown.rounds.insert(round, tally.points);
                breakdown.total_points += tally.points;
            }
        }
        breakdown
    }

    /// Per-fixture view of a player's predictions for one round
    pub fn prediction_details(&self, player: &str, round: RoundNumber) -> Vec<PredictionDetail> {
        let Some(predictions) = self.store.round_predictions(player, round) else {
            return Vec::new();
        };

        predictions
            .iter()
            .map(|(&index, prediction)| {
                let fixture = self.catalog.get(FixtureKey::new(round, index));
                let result = fixture.and_then(|f| f.result());

                let (points, status) = match (fixture, result) {
                    (None, _) => (None, DetailStatus::NotFound),
                    (Some(_), None) => (None, DetailStatus::Pending),
                    (Some(f), Some(_)) => (
                        Some(self.rules.score_prediction(prediction, f).points),
                        DetailStatus::Scored,
                    ),
                };

                PredictionDetail {
                    index,
                    home_team: fixture.map(|f| f.home_team.clone()),
                    away_team: fixture.map(|f| f.away_team.clone()),
                    predicted_home: prediction.home,
                    predicted_away: prediction.away,
                    actual_home: result.map(|r| r.0),
                    actual_away: result.map(|r| r.1),
                    points,
                    status,
                }
            })
            .collect()
    }
}

pub fn build_leaderboard(
    catalog: &FixtureCatalog,
    store: &PredictionStore,
) -> BTreeMap<String, LeaderboardEntry> {
    Aggregator::new(catalog, store).leaderboard()
}

/// Order by total points, then exact scores (both descending), then player
/// name. Ranks are 1-based positions in that order.
pub fn rank_leaderboard(board: BTreeMap<String, LeaderboardEntry>) -> Vec<RankedEntry> {
    let mut rows: Vec<(String, LeaderboardEntry)> = board.into_iter().collect();
    rows.sort_by(|(name_a, a), (name_b, b)| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.exact_scores.cmp(&a.exact_scores))
            .then_with(|| name_a.cmp(name_b))
    });

    rows.into_iter()
        .enumerate()
        .map(|(idx, (player, entry))| RankedEntry {
            rank: idx + 1,
            player,
            exact_scores: entry.exact_scores,
            correct_results: entry.correct_results,
            total_points: entry.total_points,
        })
        .collect()
}
