//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all faucet handlers
//! - Wire up middleware (tracing, CORS, metrics)
//! - Bind server to listener with graceful shutdown
//!
//! There is intentionally no request timeout layer: the combined claim
//! blocks through two broadcasts plus a fixed pause, and the only waits the
//! service configures are the ones the chain client applies itself.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chain::Chain;
use crate::config::FaucetConfig;
use crate::http::handlers;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FaucetConfig>,
    pub chain: Arc<dyn Chain>,
}

/// Build the faucet router for the given configuration and chain client.
pub fn app(config: Arc<FaucetConfig>, chain: Arc<dyn Chain>) -> Router {
    let state = AppState {
        config: config.clone(),
        chain,
    };

    let mut router = Router::new()
        .route("/", get(handlers::health))
        .route("/faucet/ui", get(handlers::ui))
        .route("/faucet/available", get(handlers::available))
        .route("/faucet/last-claim", get(handlers::last_claim))
        .route(
            "/faucet/token/{address}/{subaccount_number}/{amount}",
            get(handlers::token_grant),
        )
        .route("/faucet/native-token/{address}", get(handlers::native_token_grant))
        .route("/faucet/claim/{address}", get(handlers::claim));

    if config.server.enable_swagger {
        router = router.route("/openapi.json", get(handlers::openapi));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        // The claim page may be served from any origin.
        .layer(CorsLayer::permissive())
}

/// HTTP server for the faucet.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: Arc<FaucetConfig>, chain: Arc<dyn Chain>) -> Self {
        Self {
            router: app(config, chain),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record per-endpoint request metrics using the matched route template, so
/// addresses and amounts don't explode label cardinality.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    metrics::record_request(&endpoint, response.status().as_u16(), start);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
