//! HTTP Server
//!
//! Binds the listener, layers tracing and CORS over the routes and serves
//! until a shutdown signal arrives.

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{MultiverseError, Result};

use super::routes;

/// HTTP server for Multiverse
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// The full application: routes plus middleware
    pub fn app(&self) -> Router {
        routes(Arc::clone(&self.engine))
            .layer(cors_layer(&self.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(self.config.listen_addr.as_str())
            .await
            .map_err(|e| {
                MultiverseError::Network(format!(
                    "Failed to bind {}: {}",
                    self.config.listen_addr, e
                ))
            })?;

        tracing::info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| MultiverseError::Network(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Allow any origin unless the config names specific ones
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    match &config.cors_allowed_origins {
        None => cors.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok())
                .collect();
            cors.allow_origin(origins)
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}
