//! Terminal rendering for the CLI commands.

use colored::Colorize;

use crate::domain::{Fixture, PlayerBreakdown, RankedEntry, RoundNumber};
use crate::scoring::{DetailStatus, PredictionDetail};
use crate::services::{RoundStatus, SubmissionOutcome};

pub fn print_leaderboard(entries: &[RankedEntry]) {
    if entries.is_empty() {
        println!("No predictions submitted yet.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<24} {:>6} {:>8} {:>7}",
            "Rank", "Player", "Exact", "Correct", "Points"
        )
        .bold()
    );
    for entry in entries {
        let line = format!(
            "{:>4}  {:<24} {:>6} {:>8} {:>7}",
            entry.rank, entry.player, entry.exact_scores, entry.correct_results, entry.total_points
        );
        if entry.rank == 1 {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_breakdown(player: &str, breakdown: &PlayerBreakdown) {
    println!(
        "{}",
        format!("{} - Total: {} points", player, breakdown.total_points).bold()
    );
    if breakdown.rounds.is_empty() {
        println!("  No scored rounds yet.");
    }
    for (round, points) in &breakdown.rounds {
        println!("  Round {:>3}: {:>3} points", round, points);
    }
}

pub fn print_rounds(rounds: &[RoundStatus], default_round: Option<RoundNumber>) {
    for status in rounds {
        let kickoff = status
            .first_kickoff
            .map(|k| k.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "no date".to_string());
        let state = if status.locked {
            "locked".red()
        } else {
            "open".green()
        };
        let marker = if Some(status.round) == default_round { "*" } else { " " };
        let results = if status.has_results { "results in" } else { "" };

        println!(
            "{} Round {:>3}  {:<16} {:<7} {}",
            marker, status.round, kickoff, state, results
        );
    }
}

pub fn print_round(status: &RoundStatus, fixtures: &[Fixture]) {
    let state = if status.locked {
        "locked".red()
    } else {
        "open".green()
    };
    println!("{} ({})", format!("Round {} Fixtures", status.round).bold(), state);

    for fixture in fixtures {
        let kickoff = fixture
            .kickoff
            .map(|k| k.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "no date".to_string());
        let result = fixture
            .result()
            .map(|(h, a)| format!("{} - {}", h, a))
            .unwrap_or_else(|| "v".to_string());

        println!(
            "  [{:>3}] {} {} {}   ({} | {})",
            fixture.index(),
            fixture.home_team,
            result,
            fixture.away_team,
            fixture.location,
            kickoff
        );
    }
}

pub fn print_prediction_details(player: &str, round: RoundNumber, details: &[PredictionDetail]) {
    println!("{}", format!("{} - Round {}", player, round).bold());
    if details.is_empty() {
        println!("  No predictions for this round.");
    }

    for detail in details {
        let teams = match (&detail.home_team, &detail.away_team) {
            (Some(home), Some(away)) => format!("{} vs {}", home, away),
            _ => format!("fixture {}", detail.index),
        };
        let predicted = format!(
            "{} - {}",
            show_goals(detail.predicted_home),
            show_goals(detail.predicted_away)
        );

        let verdict = match (detail.status, detail.points) {
            (DetailStatus::Scored, Some(points)) if points > 0 => {
                format!("{} points", points).green()
            }
            (DetailStatus::Scored, _) => "0 points".red(),
            (DetailStatus::Pending, _) => "Match not played yet".yellow(),
            (DetailStatus::NotFound, _) => "Match not found".yellow(),
        };

        println!("  [{:>3}] {:<40} {:<8} {}", detail.index, teams, predicted, verdict);
    }
}

pub fn print_submission(player: &str, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Accepted { round, fixtures } => println!(
            "{}",
            format!(
                "Predictions submitted for {} - Round {} ({} fixtures)",
                player, round, fixtures
            )
            .green()
        ),
        SubmissionOutcome::Locked {
            round,
            locked_since,
        } => println!(
            "{}",
            format!(
                "Round {} is locked. The first match started at {}.",
                round, locked_since
            )
            .red()
        ),
        SubmissionOutcome::Invalid { round, reason } => println!(
            "{}",
            format!("Round {} was not saved: {}", round, reason).red()
        ),
    }
}

fn show_goals(goals: Option<i64>) -> String {
    goals.map(|g| g.to_string()).unwrap_or_else(|| "?".to_string())
}
