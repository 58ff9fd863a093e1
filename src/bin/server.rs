//! Query server binary
//!
//! Run with: cargo run --bin health-compass-server

use health_compass::{config::AppConfig, server::CompassServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_compass=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing API keys abort startup here
    let config = AppConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.embedding.model);
    tracing::info!(
        "  - Vector collection: {} @ {}",
        config.vector_db.collection,
        config.vector_db.base_url
    );
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Web search depth: {}", config.search.depth);

    // Client initialization failures (unreachable index, bad keys) are fatal
    let server = CompassServer::new(config).await?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /query  - Ask a health question");
    println!("  GET  /       - Liveness message");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
