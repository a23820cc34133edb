use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{FixtureIndex, Prediction, RoundNumber};

#[derive(Parser, Debug)]
#[command(author, version, about = "score prediction game")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the ranked leaderboard
    Leaderboard,
    /// Print a player's points per round
    Breakdown {
        /// Player name
        player: String,
    },
    /// List rounds with their lock state
    Rounds,
    /// Show the fixtures of a round, optionally with a player's predictions
    Round {
        /// Round number
        round: RoundNumber,
        /// Player whose predictions to show
        #[arg(long)]
        player: Option<String>,
    },
    /// Submit a player's predictions, replacing their whole round
    Submit {
        /// Player name
        player: String,
        /// Round number
        round: RoundNumber,
        /// Predictions as INDEX=HOME-AWAY, e.g. 3=2-1
        #[arg(required = true, value_parser = parse_prediction_arg)]
        predictions: Vec<(FixtureIndex, Prediction)>,
    },
    /// Copy a JSON fixture table into a new SQLite fixture database
    Import {
        /// JSON array of fixture rows
        source: PathBuf,
        /// Database file to create
        database: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse `INDEX=HOME-AWAY`
pub fn parse_prediction_arg(arg: &str) -> Result<(FixtureIndex, Prediction), String> {
    let (index, score) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=HOME-AWAY, got {:?}", arg))?;
    let (home, away) = score
        .split_once('-')
        .ok_or_else(|| format!("expected HOME-AWAY after '=', got {:?}", score))?;

    let index = index
        .trim()
        .parse::<FixtureIndex>()
        .map_err(|e| format!("invalid fixture index {:?}: {}", index, e))?;
    let home = parse_goals(home)?;
    let away = parse_goals(away)?;

    Ok((index, Prediction::new(home, away)))
}

fn parse_goals(text: &str) -> Result<i64, String> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid goal count {:?}: {}", text, e))
}
