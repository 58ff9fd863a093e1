//! HTTP server for the query service

pub mod routes;
pub mod state;

use axum::http::{HeaderValue, Method};
use axum::Router;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Query HTTP server
pub struct CompassServer {
    config: AppConfig,
    state: AppState,
}

impl CompassServer {
    /// Create a new server, initializing all external clients
    pub async fn new(config: AppConfig) -> Result<Self> {
        let state = AppState::new(config.clone()).await?;
        Ok(Self { config, state })
    }

    /// Build the CORS layer from the configured origin allow-list.
    ///
    /// Only the listed origins may call the API; methods and headers
    /// are unrestricted for those origins.
    fn cors_layer(&self) -> Result<CorsLayer> {
        let origins = self
            .config
            .server
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| Error::config(format!("Invalid CORS origin: {}", origin)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any))
    }

    /// Build the router with all routes and middleware
    fn build_router(&self) -> Result<Router> {
        let cors = self.cors_layer()?;

        Ok(routes::routes()
            .with_state(self.state.clone())
            // Middleware layers (order matters - applied bottom to top)
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(cors))
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| Error::config(format!("Invalid address: {}", e)))?;

        let router = self.build_router()?;

        tracing::info!("Starting query server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::config(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}
