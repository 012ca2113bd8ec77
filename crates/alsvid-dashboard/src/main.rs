//! Alsvid Dashboard binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alsvid_dashboard::{AppState, DashboardConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alsvid_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = DashboardConfig::default();
    if let Ok(bind) = std::env::var("ALSVID_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid ALSVID_BIND address '{bind}': {e}"))?;
    }
    let bind_addr = config.bind_address;

    // Create application state
    let state = Arc::new(AppState::with_config(config));

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting Alsvid Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
