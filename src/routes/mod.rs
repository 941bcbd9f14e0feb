//! Route table: binds method and path to handlers and applies the HTTP layers.

mod book;
mod common;
pub use book::book_routes;
pub use common::common_routes_with_ready;

use crate::config::Settings;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

/// Full application router: common routes at the root, book routes under [`API_PREFIX`].
/// The body cap is enforced by the extractors, so oversized bodies still get the envelope.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, book_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(settings.body_limit_bytes)),
        )
}
