use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDateTime};
use log::info;
use serde::Serialize;

use super::submission::{self, SubmissionOutcome};
use crate::catalog::FixtureCatalog;
use crate::config::AppConfig;
use crate::domain::{Fixture, PlayerBreakdown, RankedEntry, RoundNumber, RoundPredictions};
use crate::scoring::{
    Aggregator, PredictionDetail, ScoringRules, default_round, earliest_kickoff, is_locked,
};
use crate::store::{FileStore, PredictionStore};

/// Wall clock used for lock decisions
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Loaded fixtures and predictions for one process
pub struct Session {
    pub catalog: FixtureCatalog,
    pub predictions: PredictionStore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatus {
    pub round: RoundNumber,
    pub locked: bool,
    pub first_kickoff: Option<NaiveDateTime>,
    pub has_results: bool,
}

/// Application state passed explicitly to every query and submission.
///
/// The catalog and store are cached after the first load; `reload` is the
/// only way to pick up changes made outside this process.
pub struct AppContext {
    config: AppConfig,
    file: FileStore,
    session: RwLock<Session>,
}

impl AppContext {
    /// Fails when the fixture catalog cannot be loaded
    pub fn load(config: AppConfig) -> Result<Self> {
        let file = FileStore::new(&config.storage.predictions_path);
        let session = load_session(&config, &file)?;
        Ok(Self::from_parts(config, file, session))
    }

    pub fn from_parts(config: AppConfig, file: FileStore, session: Session) -> Self {
        Self {
            config,
            file,
            session: RwLock::new(session),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rules(&self) -> ScoringRules {
        ScoringRules::from(&self.config.scoring)
    }

    pub fn session(&self) -> Result<RwLockReadGuard<'_, Session>> {
        self.session
            .read()
            .map_err(|_| anyhow!("Session state lock poisoned"))
    }

    fn session_mut(&self) -> Result<RwLockWriteGuard<'_, Session>> {
        self.session
            .write()
            .map_err(|_| anyhow!("Session state lock poisoned"))
    }

    /// Drop the cached catalog and store and read both again
    pub fn reload(&self) -> Result<()> {
        let fresh = load_session(&self.config, &self.file)?;
        *self.session_mut()? = fresh;
        info!("Session reloaded");
        Ok(())
    }

    pub fn leaderboard(&self) -> Result<Vec<RankedEntry>> {
        let session = self.session()?;
        Ok(self.aggregator(&session).ranked())
    }

    pub fn player_breakdown(&self, player: &str) -> Result<PlayerBreakdown> {
        let session = self.session()?;
        Ok(self.aggregator(&session).player_breakdown(player))
    }

    pub fn prediction_details(
        &self,
        player: &str,
        round: RoundNumber,
    ) -> Result<Vec<PredictionDetail>> {
        let session = self.session()?;
        Ok(self.aggregator(&session).prediction_details(player, round))
    }

    pub fn rounds(&self, now: NaiveDateTime) -> Result<Vec<RoundStatus>> {
        let session = self.session()?;
        Ok(session
            .catalog
            .rounds()
            .into_iter()
            .map(|round| round_status(&session.catalog, round, now))
            .collect())
    }

    pub fn round_status(&self, round: RoundNumber, now: NaiveDateTime) -> Result<RoundStatus> {
        let session = self.session()?;
        Ok(round_status(&session.catalog, round, now))
    }

    pub fn round_fixtures(&self, round: RoundNumber) -> Result<Vec<Fixture>> {
        let session = self.session()?;
        Ok(session
            .catalog
            .round_fixtures(round)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn default_round(&self, now: NaiveDateTime) -> Result<Option<RoundNumber>> {
        let session = self.session()?;
        Ok(default_round(&session.catalog, now))
    }

    pub fn player_round(
        &self,
        player: &str,
        round: RoundNumber,
    ) -> Result<Option<RoundPredictions>> {
        let session = self.session()?;
        Ok(session.predictions.round_predictions(player, round).cloned())
    }

    /// Validate, lock-check and persist one player's round. The session
    /// write lock is held throughout so in-process submissions serialise.
    pub fn submit(
        &self,
        player: &str,
        round: RoundNumber,
        predictions: RoundPredictions,
        now: NaiveDateTime,
    ) -> Result<SubmissionOutcome> {
        let mut session = self.session_mut()?;
        let (outcome, store) = submission::submit(
            &session.catalog,
            &self.file,
            player,
            round,
            predictions,
            now,
            self.config.scoring.max_predicted_goals,
        )?;
        if let Some(store) = store {
            session.predictions = store;
        }
        Ok(outcome)
    }

    fn aggregator<'a>(&self, session: &'a Session) -> Aggregator<'a> {
        Aggregator::with_rules(&session.catalog, &session.predictions, self.rules())
    }
}

fn load_session(config: &AppConfig, file: &FileStore) -> Result<Session> {
    Ok(Session {
        catalog: FixtureCatalog::load(&config.storage.fixtures_path)?,
        predictions: file.load()?,
    })
}

fn round_status(catalog: &FixtureCatalog, round: RoundNumber, now: NaiveDateTime) -> RoundStatus {
    let fixtures = catalog.round_fixtures(round);
    let first_kickoff = earliest_kickoff(fixtures.iter().copied());
    RoundStatus {
        round,
        locked: is_locked(fixtures.iter().copied(), now),
        first_kickoff,
        has_results: fixtures.iter().any(|f| f.is_played()),
    }
}
