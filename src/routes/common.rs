//! Operational endpoints. Same envelope as the book API.

use crate::response::{self, success, success_empty};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// Liveness only; never touches the store.
async fn health() -> impl IntoResponse {
    success_empty(StatusCode::OK, "service is healthy")
}

async fn ready(State(state): State<AppState>) -> axum::response::Response {
    match state.books.ping().await {
        Ok(()) => success_empty(StatusCode::OK, "store is reachable").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            response::error(StatusCode::SERVICE_UNAVAILABLE, "store is unavailable").into_response()
        }
    }
}

async fn version() -> impl IntoResponse {
    success(
        StatusCode::OK,
        "build info",
        BuildInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// GET /health, GET /ready (pings the store), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
