//! HTTP API server module
//!
//! Provides the REST surface for the todo collection: router, shared state,
//! and the listener loop.

pub mod handlers;
mod routes;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::store::TodoStore;

pub use routes::create_router;

/// Shared application state for HTTP handlers
pub struct AppState<S> {
    /// Todo record store backing every handler
    pub store: S,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Start the HTTP API server
///
/// Binds to the configured host and port and serves until the process
/// exits or the listener fails.
///
/// SECURITY: Setting TODO_API_HOST=0.0.0.0 exposes the server to the
/// network. The API carries no authentication.
pub async fn start_server<S: TodoStore>(config: &Config, store: S) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(store));

    // Configure CORS for cross-origin requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(state).layer(cors);

    let addr = config.bind_addr();

    // Security warning for network exposure
    if config.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0, accessible from the network");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP API server listening on http://{addr}");

    axum::serve(listener, app).await
}
