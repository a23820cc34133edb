use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use super::{AppState, blocking, internal_error};
use crate::api::models::{PlayerRoundResponse, SubmissionRequest};
use crate::domain::RoundNumber;
use crate::services::context::local_now;
use crate::services::submission::SubmissionOutcome;

pub async fn get_player_round(
    State(state): State<AppState>,
    Path((player, round)): Path<(String, RoundNumber)>,
) -> impl IntoResponse {
    let name = player.clone();
    let loaded = blocking(&state, move |context| {
        let predictions = context.prediction_details(&name, round)?;
        let breakdown = context.player_breakdown(&name)?;
        Ok((predictions, breakdown.rounds.get(&round).copied()))
    })
    .await;

    match loaded {
        Ok((predictions, round_points)) => Json(PlayerRoundResponse {
            player,
            round,
            round_points,
            predictions,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn put_player_round(
    State(state): State<AppState>,
    Path((player, round)): Path<(String, RoundNumber)>,
    Json(request): Json<SubmissionRequest>,
) -> impl IntoResponse {
    let predictions = request.into_round();
    let submitted = blocking(&state, move |context| {
        context.submit(&player, round, predictions, local_now())
    })
    .await;

    match submitted {
        Ok(outcome @ SubmissionOutcome::Accepted { .. }) => Json(outcome).into_response(),
        Ok(outcome @ SubmissionOutcome::Locked { .. }) => {
            (StatusCode::LOCKED, Json(outcome)).into_response()
        }
        Ok(outcome @ SubmissionOutcome::Invalid { .. }) => {
            (StatusCode::BAD_REQUEST, Json(outcome)).into_response()
        }
        Err(e) => internal_error(e),
    }
}
