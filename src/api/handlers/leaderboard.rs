use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use super::{AppState, blocking, internal_error};
use crate::api::models::{LeaderboardResponse, PlayerBreakdownResponse};

pub async fn get_leaderboard(State(state): State<AppState>) -> impl IntoResponse {
    let items = match blocking(&state, |context| context.leaderboard()).await {
        Ok(items) => items,
        Err(e) => return internal_error(e),
    };

    Json(LeaderboardResponse {
        total: items.len(),
        items,
    })
    .into_response()
}

pub async fn get_player_breakdown(
    State(state): State<AppState>,
    Path(player): Path<String>,
) -> impl IntoResponse {
    let name = player.clone();
    match blocking(&state, move |context| context.player_breakdown(&name)).await {
        Ok(breakdown) => Json(PlayerBreakdownResponse {
            player,
            total_points: breakdown.total_points,
            rounds: breakdown.rounds,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}
