//! External initiator API server binary entrypoint.

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use initiator_common::config::AppConfig;
use initiator_common::db::create_pool;
use initiator_store::{MemorySubscriptionStore, PgSubscriptionStore};

use initiator_api::routes::create_router;
use initiator_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("initiator_api=debug,initiator_store=debug,tower_http=debug")
        }))
        .json()
        .init();

    tracing::info!("Starting external initiator API server...");

    let config = AppConfig::from_env()?;

    let state = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url, config.db_max_connections).await?;
            sqlx::migrate!("../../migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
            AppState::new(PgSubscriptionStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, subscriptions are kept in memory only");
            AppState::new(MemorySubscriptionStore::new())
        }
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    tracing::info!("External initiator API server stopped.");
    Ok(())
}
