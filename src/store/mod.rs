//! Player predictions keyed by player, round and fixture.

pub mod file;
pub mod record;

use std::collections::BTreeMap;

use crate::domain::{PlayerRecord, RoundNumber, RoundPredictions};

pub use file::FileStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionStore {
    players: BTreeMap<String, PlayerRecord>,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> impl Iterator<Item = (&str, &PlayerRecord)> {
        self.players.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn player(&self, player: &str) -> Option<&PlayerRecord> {
        self.players.get(player)
    }

    pub fn round_predictions(&self, player: &str, round: RoundNumber) -> Option<&RoundPredictions> {
        self.player(player)?.get(&round)
    }

    pub fn insert_player(&mut self, player: impl Into<String>, record: PlayerRecord) {
        self.players.insert(player.into(), record);
    }

    /// Replace the player's whole set for `round`. Fixtures left out of
    /// `predictions` are dropped, not kept from the previous submission.
    pub fn replace_round(
        &mut self,
        player: &str,
        round: RoundNumber,
        predictions: RoundPredictions,
    ) -> Option<RoundPredictions> {
        self.players
            .entry(player.to_string())
            .or_default()
            .insert(round, predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Prediction;

    fn round_of(entries: &[(usize, i64, i64)]) -> RoundPredictions {
        entries
            .iter()
            .map(|&(idx, h, a)| (idx, Prediction::new(h, a)))
            .collect()
    }

    #[test]
    fn first_submission_creates_player() {
        let mut store = PredictionStore::new();
        assert!(store.replace_round("Shezza", 1, round_of(&[(0, 1, 0)])).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.round_predictions("Shezza", 1).is_some());
    }

    #[test]
    fn resubmission_replaces_instead_of_merging() {
        let mut store = PredictionStore::new();
        store.replace_round("Shezza", 1, round_of(&[(0, 1, 0), (1, 2, 2), (2, 0, 3)]));
        let previous = store.replace_round("Shezza", 1, round_of(&[(1, 1, 1)]));

        assert_eq!(previous.map(|p| p.len()), Some(3));
        let round = store.round_predictions("Shezza", 1).unwrap();
        assert_eq!(round.len(), 1);
        assert_eq!(round[&1], Prediction::new(1, 1));
        assert!(!round.contains_key(&0));
    }

    #[test]
    fn other_rounds_are_untouched() {
        let mut store = PredictionStore::new();
        store.replace_round("Shezza", 1, round_of(&[(0, 1, 0)]));
        store.replace_round("Shezza", 2, round_of(&[(5, 2, 0)]));
        store.replace_round("Shezza", 2, round_of(&[(6, 0, 0)]));

        assert_eq!(store.round_predictions("Shezza", 1), Some(&round_of(&[(0, 1, 0)])));
        assert_eq!(store.round_predictions("Shezza", 2), Some(&round_of(&[(6, 0, 0)])));
    }
}
