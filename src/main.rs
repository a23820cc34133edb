use anyhow::Result;

use score_predictor::cli::Command;
use score_predictor::{
    handle_breakdown, handle_completions, handle_import, handle_leaderboard, handle_round,
    handle_rounds, handle_serve, handle_submit, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Leaderboard => handle_leaderboard(),
        Command::Breakdown { player } => handle_breakdown(player),
        Command::Rounds => handle_rounds(),
        Command::Round { round, player } => handle_round(*round, player.as_deref()),
        Command::Submit {
            player,
            round,
            predictions,
        } => handle_submit(player, *round, predictions),
        Command::Import { source, database } => handle_import(source, database),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
