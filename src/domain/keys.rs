//! Text form of fixture identities as written to the prediction record file.
//!
//! The record file keys rounds and fixtures by decimal strings; everything in
//! memory uses [`FixtureKey`]. These are the only conversions between the two.

use anyhow::{Context, Result};

use super::models::{FixtureIndex, FixtureKey, RoundNumber};

pub fn round_to_text(round: RoundNumber) -> String {
    round.to_string()
}

pub fn index_to_text(index: FixtureIndex) -> String {
    index.to_string()
}

pub fn parse_round(text: &str) -> Result<RoundNumber> {
    text.trim()
        .parse::<RoundNumber>()
        .with_context(|| format!("Invalid round key: {:?}", text))
}

pub fn parse_index(text: &str) -> Result<FixtureIndex> {
    text.trim()
        .parse::<FixtureIndex>()
        .with_context(|| format!("Invalid fixture key: {:?}", text))
}

impl FixtureKey {
    pub fn to_record_keys(&self) -> (String, String) {
        (round_to_text(self.round), index_to_text(self.index))
    }

    pub fn from_record_keys(round: &str, index: &str) -> Result<Self> {
        Ok(Self::new(parse_round(round)?, parse_index(index)?))
    }
}
