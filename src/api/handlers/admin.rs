use axum::{extract::State, http::StatusCode, response::IntoResponse};
use log::info;

use super::{AppState, blocking, internal_error};

/// Re-read the fixture catalog and prediction store from disk
pub async fn reload(State(state): State<AppState>) -> impl IntoResponse {
    info!("Reload requested");
    match blocking(&state, |context| context.reload()).await {
        Ok(()) => (StatusCode::OK, "Reloaded").into_response(),
        Err(e) => internal_error(e),
    }
}
