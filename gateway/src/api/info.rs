//! Health and version endpoints.
//!
//! - `/health` – liveness probe, always `200 OK`.
//! - `/version` – cargo package name and version.
//!
//! The endpoints include a `Cache-Control: no-cache` header to prevent
//! caching of responses.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::GatewayState;

/// Create a router containing the info endpoints.
pub(crate) fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn version() -> impl IntoResponse {
    (
        StatusCode::OK,
        concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")),
    )
}
