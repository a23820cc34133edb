pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod report;
pub mod scoring;
pub mod services;
pub mod store;

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::{FixtureIndex, Prediction, RoundNumber, RoundPredictions};
use crate::services::context::{AppContext, local_now};
use crate::services::server::ServerService;
use crate::services::submission::SubmissionOutcome;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn load_context() -> Result<AppContext> {
    AppContext::load(AppConfig::new())
}

pub fn handle_serve(port: u16) -> Result<()> {
    let context = AppContext::load(AppConfig::new().with_port(port))?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(context);
        service.run().await
    })
}

pub fn handle_leaderboard() -> Result<()> {
    let context = load_context()?;
    report::print_leaderboard(&context.leaderboard()?);
    Ok(())
}

pub fn handle_breakdown(player: &str) -> Result<()> {
    let context = load_context()?;
    report::print_breakdown(player, &context.player_breakdown(player)?);
    Ok(())
}

pub fn handle_rounds() -> Result<()> {
    let context = load_context()?;
    let now = local_now();
    report::print_rounds(&context.rounds(now)?, context.default_round(now)?);
    Ok(())
}

pub fn handle_round(round: RoundNumber, player: Option<&str>) -> Result<()> {
    let context = load_context()?;
    let fixtures = context.round_fixtures(round)?;
    if fixtures.is_empty() {
        anyhow::bail!("Round {} has no fixtures", round);
    }

    report::print_round(&context.round_status(round, local_now())?, &fixtures);
    if let Some(player) = player {
        println!();
        let details = context.prediction_details(player, round)?;
        report::print_prediction_details(player, round, &details);
    }
    Ok(())
}

pub fn handle_submit(
    player: &str,
    round: RoundNumber,
    predictions: &[(FixtureIndex, Prediction)],
) -> Result<()> {
    let context = load_context()?;
    let predictions: RoundPredictions = predictions.iter().copied().collect();
    match context.submit(player, round, predictions, local_now())? {
        SubmissionOutcome::Invalid { round, reason } => {
            anyhow::bail!("Round {} was not saved: {}", round, reason)
        }
        outcome => report::print_submission(player, &outcome),
    }
    Ok(())
}

/// Copy a JSON fixture table into a new SQLite database, row for row
pub fn handle_import(source: &Path, database: &Path) -> Result<()> {
    let rows = catalog::json::load_rows(source)?;
    let fixtures = catalog::rows::fixtures_from_rows(&rows)?;

    let mut conn = catalog::sqlite::create(database)?;
    let imported = catalog::sqlite::import_rows(&mut conn, &rows)?;
    println!(
        "Imported {} rows ({} fixtures) into {}",
        imported,
        fixtures.len(),
        database.display()
    );
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
