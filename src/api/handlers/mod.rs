use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::services::context::AppContext;

pub mod admin;
pub mod leaderboard;
pub mod predictions;
pub mod rounds;

pub type AppState = Arc<AppContext>;

/// Run a context call on the blocking pool.
///
/// Context calls wait on the session lock and the store's file lock and
/// touch the filesystem, so they stay off the async workers.
async fn blocking<T, F>(state: &AppState, call: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&AppContext) -> Result<T> + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || call(&state))
        .await
        .context("Context task panicked")?
}

fn internal_error(e: anyhow::Error) -> Response {
    error!("Request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal Error: {}", e)).into_response()
}
