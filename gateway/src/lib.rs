#![deny(missing_docs)]
//! JSON-RPC 2.0 gateway fronting an NHB blockchain node.
//!
//! The gateway accepts authenticated client requests over HTTP(S) and a
//! finality WebSocket, validates them, enforces per-source rate limits
//! and duplicate-transaction detection, dispatches to the node services
//! behind it, and serialises results and typed errors back to callers.
//! The main entry point is the [`GatewayBuilder`].
//!
//! Hosting applications construct a [`config::GatewayConfig`] (usually
//! via `clap`), implement the node-service traits in
//! [`services::node`], and either mount [`Gateway::router`] into a
//! larger `axum` server or call [`Gateway::serve`] directly. `serve`
//! binds plain TCP, or TLS 1.2+ when both certificate and key paths are
//! configured; one without the other is rejected at build time.
//!
//! All gateway caches (the rate limiter, the duplicate-transaction set)
//! are process-local and best-effort: they belong to the server
//! instance, never to the process, and do not survive restarts.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{any, post};
use axum_server::tls_rustls::RustlsConfig;
use eyre::Context as _;
use parking_lot::Mutex;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

pub(crate) mod api;
pub mod codec;
pub mod config;
pub(crate) mod handlers;
pub mod metrics;
pub mod services;
pub(crate) mod state;

pub use config::GatewayConfig;
pub use services::node::NodeServices;

use crate::state::GatewayState;

/// Builds a [`Gateway`] from its configuration and node services.
pub struct GatewayBuilder {
    config: GatewayConfig,
    node: NodeServices,
}

impl GatewayBuilder {
    /// Pairs a configuration with the node services to dispatch into.
    pub fn new(config: GatewayConfig, node: NodeServices) -> Self {
        Self { config, node }
    }

    /// Validates the configuration and builds the gateway.
    ///
    /// The method table is frozen here; the caches are created empty.
    ///
    /// # Errors
    ///
    /// Fails when only one of the two TLS paths is configured.
    pub fn build(mut self) -> eyre::Result<Gateway> {
        self.config.tls_paths()?;
        let token = self.config.auth_token.take();
        let state = Arc::new(GatewayState::new(&self.config, token, self.node));
        let router = Router::new()
            .route("/", post(api::ingress::rpc_endpoint))
            .route("/ws/posFinality", any(api::stream::finality_endpoint))
            .merge(api::info::routes())
            .layer(TraceLayer::new_for_http())
            .with_state(state);
        Ok(Gateway {
            router,
            config: self.config,
            shutdown: Mutex::new(None),
        })
    }
}

/// A built gateway: a router plus the serving machinery around it.
pub struct Gateway {
    router: Router,
    config: GatewayConfig,
    shutdown: Mutex<Option<axum_server::Handle>>,
}

impl Gateway {
    /// Returns the `axum` router to mount into a larger server.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serves the gateway on `addr` until shut down.
    ///
    /// Binds plain TCP, or TLS when the certificate and key paths are
    /// configured. The configured server timeouts are applied here: the
    /// header-read and idle timeouts on the connection, the body-read
    /// and handling timeouts on the request.
    pub async fn serve(&self, addr: SocketAddr) -> eyre::Result<()> {
        let handle = axum_server::Handle::new();
        *self.shutdown.lock() = Some(handle.clone());

        let app = self
            .router
            .clone()
            .layer(TimeoutLayer::new(self.config.write_timeout))
            .layer(RequestBodyTimeoutLayer::new(self.config.read_timeout));
        let make_service = app.into_make_service_with_connect_info::<SocketAddr>();

        tracing::info!("gateway listening on {addr}");
        match self.config.tls_paths()? {
            Some((cert, key)) => {
                let tls = RustlsConfig::from_pem_file(&cert, &key)
                    .await
                    .context("while loading TLS material")?;
                let mut server = axum_server::bind_rustls(addr, tls).handle(handle);
                server
                    .http_builder()
                    .http1()
                    .header_read_timeout(self.config.read_header_timeout);
                server
                    .http_builder()
                    .http2()
                    .keep_alive_interval(Some(self.config.idle_timeout));
                server.serve(make_service).await?;
            }
            None => {
                let mut server = axum_server::bind(addr).handle(handle);
                server
                    .http_builder()
                    .http1()
                    .header_read_timeout(self.config.read_header_timeout);
                server
                    .http_builder()
                    .http2()
                    .keep_alive_interval(Some(self.config.idle_timeout));
                server.serve(make_service).await?;
            }
        }
        Ok(())
    }

    /// Initiates a graceful shutdown of a running [`Gateway::serve`].
    ///
    /// With a grace period, connections still open afterwards are torn
    /// down hard; without one the server waits indefinitely.
    pub fn shutdown(&self, grace: Option<Duration>) {
        if let Some(handle) = self.shutdown.lock().as_ref() {
            handle.graceful_shutdown(grace);
        }
    }
}
