//! HTTP transport for the phase-change diagram calculator.
//!
//! Exposes one route, `GET /phase-change-diagram?pressure=<value>`, backed by
//! an immutable [`pcd_model::PhaseCalculator`] shared across requests.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use state::AppState;

pub const PHASE_CHANGE_DIAGRAM_PATH: &str = "/phase-change-diagram";

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PHASE_CHANGE_DIAGRAM_PATH, get(api::phase_change_diagram))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the listener fails.
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
