//! HTTP routing configuration
//!
//! Routes:
//! - GET  /              - liveness probe
//! - POST /ai/get-review - generate a code review
//!
//! Layers: CORS (origin from configuration, permissive when unset),
//! request tracing, and a 30 second request timeout. Neither upstream call
//! is cancelled by a client disconnect; the timeout bounds the inbound
//! request as a whole.

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{handlers, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the complete router with all routes and middleware configured.
///
/// `allowed_origin` restricts cross-origin browser access to one exact
/// origin; `None` allows any origin.
pub fn create_router(state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let origin = match allowed_origin {
        Some(value) => AllowOrigin::exact(value),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/ai/get-review", post(handlers::get_review))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
