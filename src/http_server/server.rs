//! # HTTP Server
//!
//! Assembles the routers over a store and serves them. The router can be
//! built over any [`TalkerStore`], which is how the tests drive the full
//! HTTP surface against an in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::service::TalkerService;
use crate::store::{JsonFileStore, TalkerStore};

use super::config::HttpServerConfig;
use super::login_routes::login_routes;
use super::status_routes::status_routes;
use super::talker_routes::{talker_routes, TalkerState};

/// HTTP server for the talker registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the file store named in the config
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
        let router = build_router(store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::info(
            "SERVER_START",
            &[
                ("addr", &addr.to_string()),
                ("store", &self.config.store_path.display().to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::with_config(HttpServerConfig::default())
    }
}

/// Build the full router over an injected store.
pub fn build_router(store: Arc<dyn TalkerStore>) -> Router {
    let state = Arc::new(TalkerState::new(TalkerService::new(store)));

    // Permissive CORS; the service carries no browser credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(status_routes())
        .merge(login_routes())
        .merge(talker_routes(state))
        .layer(cors)
}
