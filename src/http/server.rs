//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the two facade routes
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener and serve with graceful shutdown
//!
//! No authentication, no rate limiting, no body sanitization beyond JSON
//! deserialization. The facade is deliberately permissive.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::contract::ContractGateway;
use crate::http::handlers;

/// Application state injected into handlers. The gateway is the only shared
/// state and is read-only.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ContractGateway>,
}

/// HTTP server for the mint facade.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an initialized gateway.
    pub fn new(config: GatewayConfig, gateway: Arc<ContractGateway>) -> Self {
        let state = AppState { gateway };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// No request-timeout layer: a mint suspends its request until the
    /// transaction is mined, which can take tens of seconds.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/mint", post(handlers::mint))
            .route("/token_uri/{token_id}", get(handlers::token_uri))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
