use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    AppState,
    admin::reload,
    leaderboard::{get_leaderboard, get_player_breakdown},
    predictions::{get_player_round, put_player_round},
    rounds::{get_round, get_rounds},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/players/:player/breakdown", get(get_player_breakdown))
        .route(
            "/api/players/:player/rounds/:round",
            get(get_player_round).put(put_player_round),
        )
        .route("/api/rounds", get(get_rounds))
        .route("/api/rounds/:round", get(get_round))
        .route("/api/reload", post(reload))
        .with_state(state)
}
