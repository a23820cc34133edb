use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use super::PredictionStore;
use crate::domain::keys::{index_to_text, parse_index, parse_round, round_to_text};
use crate::domain::{PlayerRecord, Prediction, RoundPredictions};

/// Shape of the record file: player -> "round" -> "fixture index" -> {home, away}
pub type StoreRecord = BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>>;

pub fn to_record(store: &PredictionStore) -> StoreRecord {
    store
        .players()
        .map(|(player, record)| (player.to_string(), player_to_record(record)))
        .collect()
}

fn player_to_record(record: &PlayerRecord) -> BTreeMap<String, BTreeMap<String, Value>> {
    record
        .iter()
        .map(|(&round, predictions)| {
            let fixtures = predictions
                .iter()
                .map(|(&index, prediction)| (index_to_text(index), prediction_to_value(prediction)))
                .collect();
            (round_to_text(round), fixtures)
        })
        .collect()
}

fn prediction_to_value(prediction: &Prediction) -> Value {
    serde_json::to_value(prediction).unwrap_or(Value::Null)
}

/// Rebuild the in-memory store, dropping entries whose keys are not integers
pub fn from_record(record: StoreRecord) -> PredictionStore {
    let mut store = PredictionStore::new();

    for (player, rounds) in record {
        let mut player_record = PlayerRecord::new();

        for (round_text, fixtures) in rounds {
            let round = match parse_round(&round_text) {
                Ok(round) => round,
                Err(e) => {
                    warn!("Dropping predictions of {} for round {:?}: {}", player, round_text, e);
                    continue;
                }
            };

            let mut predictions = RoundPredictions::new();
            for (index_text, value) in fixtures {
                match parse_index(&index_text) {
                    Ok(index) => {
                        predictions.insert(index, prediction_from_value(value));
                    }
                    Err(e) => warn!(
                        "Dropping prediction of {} in round {}: {}",
                        player, round, e
                    ),
                }
            }
            player_record.insert(round, predictions);
        }

        store.insert_player(player, player_record);
    }

    store
}

/// Unreadable leaves become a prediction with both sides missing
fn prediction_from_value(value: Value) -> Prediction {
    serde_json::from_value(value).unwrap_or(Prediction {
        home: None,
        away: None,
    })
}
