pub mod engine;
pub mod leaderboard;
pub mod lock;

pub use engine::{FixtureScore, Outcome, ScoringRules, score};
pub use leaderboard::{
    Aggregator, DetailStatus, PredictionDetail, build_leaderboard, rank_leaderboard,
};
pub use lock::{default_round, earliest_kickoff, is_locked, is_round_locked};
