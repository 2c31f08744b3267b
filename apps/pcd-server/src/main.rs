//! Phase-change diagram HTTP server

use pcd_server::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pcd_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting phase-change diagram server");

    let result = match ServerConfig::from_env() {
        Ok(config) => pcd_server::serve(config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        tracing::error!(%err, "server stopped");
        std::process::exit(1);
    }
}
