//! Nexus API Server
//!
//! Main entry point for the Nexus business manager backend.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_api::{AppState, create_router};
use nexus_insight::{DisabledInsights, GeminiClient, InsightProvider};
use nexus_shared::AppConfig;
use nexus_store::BusinessStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Seed the in-memory store
    let store = BusinessStore::seeded();
    {
        let data = store.read().await;
        info!(
            accounts = data.chart_of_accounts.len(),
            transactions = data.transactions.len(),
            employees = data.employees.len(),
            "Business store seeded"
        );
    }

    // Create the insight collaborator
    let insights: Arc<dyn InsightProvider> = if config.insight.api_key().is_some() {
        info!(model = %config.insight.model, "Gemini insights enabled");
        Arc::new(GeminiClient::from_config(&config.insight)?)
    } else {
        warn!("No Gemini API key configured; insights disabled");
        Arc::new(DisabledInsights)
    };

    // Create router
    let app = create_router(AppState::new(store, insights));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
