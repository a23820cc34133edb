use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;

use crate::catalog::FixtureCatalog;
use crate::domain::{RoundNumber, RoundPredictions};
use crate::scoring::{earliest_kickoff, is_locked};
use crate::store::{FileStore, PredictionStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// The player's set for the round was replaced and persisted
    #[serde(rename_all = "camelCase")]
    Accepted { round: RoundNumber, fixtures: usize },
    /// Nothing was written; the round's first match has started
    #[serde(rename_all = "camelCase")]
    Locked {
        round: RoundNumber,
        locked_since: NaiveDateTime,
    },
    /// Nothing was written; a goal count is out of range or missing
    #[serde(rename_all = "camelCase")]
    Invalid { round: RoundNumber, reason: String },
}

/// Kickoff that locked `round`, if it is locked at `now`
pub fn locked_since(
    catalog: &FixtureCatalog,
    round: RoundNumber,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let fixtures = catalog.round_fixtures(round);
    if is_locked(fixtures.iter().copied(), now) {
        earliest_kickoff(fixtures)
    } else {
        None
    }
}

/// Reject goal counts outside `0..=max_goals` and half-filled scorelines
pub fn validate_goals(predictions: &RoundPredictions, max_goals: i64) -> Result<()> {
    for (index, prediction) in predictions {
        let (Some(home), Some(away)) = (prediction.home, prediction.away) else {
            bail!("Prediction for fixture {} is missing a score", index);
        };
        for goals in [home, away] {
            if !(0..=max_goals).contains(&goals) {
                bail!(
                    "Prediction for fixture {} has {} goals, expected 0 to {}",
                    index,
                    goals,
                    max_goals
                );
            }
        }
    }
    Ok(())
}

/// Replace `player`'s predictions for `round` unless the round is locked.
///
/// The lock is checked before the goal counts, so a locked round reports
/// `Locked` whatever the body holds. Returns the outcome and, when accepted,
/// the store as persisted.
pub fn submit(
    catalog: &FixtureCatalog,
    file: &FileStore,
    player: &str,
    round: RoundNumber,
    predictions: RoundPredictions,
    now: NaiveDateTime,
    max_goals: i64,
) -> Result<(SubmissionOutcome, Option<PredictionStore>)> {
    if let Some(since) = locked_since(catalog, round, now) {
        info!("Rejected {} for round {}: locked since {}", player, round, since);
        return Ok((
            SubmissionOutcome::Locked {
                round,
                locked_since: since,
            },
            None,
        ));
    }

    if let Err(e) = validate_goals(&predictions, max_goals) {
        info!("Rejected {} for round {}: {}", player, round, e);
        return Ok((
            SubmissionOutcome::Invalid {
                round,
                reason: e.to_string(),
            },
            None,
        ));
    }
    warn_unknown_fixtures(catalog, round, &predictions);

    let fixtures = predictions.len();
    let (_, store) = file.update(|store| store.replace_round(player, round, predictions))?;
    info!("Saved {} predictions for {} in round {}", fixtures, player, round);

    Ok((SubmissionOutcome::Accepted { round, fixtures }, Some(store)))
}

fn warn_unknown_fixtures(
    catalog: &FixtureCatalog,
    round: RoundNumber,
    predictions: &RoundPredictions,
) {
    let known: Vec<_> = catalog
        .round_fixtures(round)
        .iter()
        .map(|f| f.index())
        .collect();
    for index in predictions.keys().filter(|idx| !known.contains(idx)) {
        warn!(
            "Fixture {} is not part of round {}; it will never score",
            index, round
        );
    }
}
