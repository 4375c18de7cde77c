use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
use activities::shell::config::{AppConfig, DEFAULT_LOG_FILTER};
use activities::shell::graphql::GRAPHQL_PATH;
use activities::shell::http;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(activities = catalog.len(), "activity directory seeded");

    // In-memory directory; state lives for the process lifetime only
    let directory = Arc::new(InMemoryActivityDirectory::seeded(catalog));
    let state = AppState::in_memory(directory);

    let app = http::app(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Activities API: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
