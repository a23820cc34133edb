//! Read-only fixture table, loaded once per session.

pub mod dates;
pub mod json;
pub mod rows;
pub mod sqlite;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};
use log::info;

use crate::domain::{Fixture, FixtureKey, RoundNumber};

/// Fixtures indexed by identity and grouped by round
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    fixtures: BTreeMap<FixtureKey, Fixture>,
}

impl FixtureCatalog {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self {
            fixtures: fixtures.into_iter().map(|f| (f.key, f)).collect(),
        }
    }

    /// Load from a `.json` row export or a SQLite database (`.db`, `.sqlite`, `.sqlite3`)
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Fixture catalog not found: {}", path.display());
        }

        let table = match extension(path).as_deref() {
            Some("json") => json::load_rows(path)?,
            Some("db" | "sqlite" | "sqlite3") => sqlite::load_rows(&sqlite::open(path)?)?,
            _ => bail!("Unsupported fixture catalog format: {}", path.display()),
        };

        let catalog = Self::new(rows::fixtures_from_rows(&table)?);
        info!(
            "Loaded {} fixtures in {} rounds from {}",
            catalog.len(),
            catalog.rounds().len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn get(&self, key: FixtureKey) -> Option<&Fixture> {
        self.fixtures.get(&key)
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.values()
    }

    /// Distinct round numbers, ascending
    pub fn rounds(&self) -> Vec<RoundNumber> {
        let mut rounds: Vec<RoundNumber> = self.fixtures.keys().map(|k| k.round).collect();
        rounds.dedup();
        rounds
    }

    /// Fixtures of one round in table order
    pub fn round_fixtures(&self, round: RoundNumber) -> Vec<&Fixture> {
        self.fixtures
            .range(FixtureKey::new(round, 0)..=FixtureKey::new(round, usize::MAX))
            .map(|(_, f)| f)
            .collect()
    }

    pub fn has_results(&self, round: RoundNumber) -> bool {
        self.round_fixtures(round).iter().any(|f| f.is_played())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
