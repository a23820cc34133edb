use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use super::{AppState, blocking, internal_error};
use crate::api::models::{FixtureView, RoundDetailResponse, RoundsResponse};
use crate::domain::RoundNumber;
use crate::services::context::local_now;

pub async fn get_rounds(State(state): State<AppState>) -> impl IntoResponse {
    let now = local_now();
    let loaded = blocking(&state, move |context| {
        Ok((context.rounds(now)?, context.default_round(now)?))
    })
    .await;

    match loaded {
        Ok((rounds, default_round)) => Json(RoundsResponse {
            rounds,
            default_round,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn get_round(
    State(state): State<AppState>,
    Path(round): Path<RoundNumber>,
) -> impl IntoResponse {
    let loaded = blocking(&state, move |context| {
        let fixtures = context.round_fixtures(round)?;
        let status = context.round_status(round, local_now())?;
        Ok((fixtures, status))
    })
    .await;

    let (fixtures, status) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => return internal_error(e),
    };
    if fixtures.is_empty() {
        return (StatusCode::NOT_FOUND, format!("Round {} not found", round)).into_response();
    }

    Json(RoundDetailResponse {
        status,
        fixtures: fixtures.into_iter().map(FixtureView::from).collect(),
    })
    .into_response()
}
