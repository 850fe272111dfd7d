// Main entry point for the query API server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use engine::{Advisor, Dataset, NoopAdvisor, OpenAiAdvisor, QueryService};
use server_core::{build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting real-estate query API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Load the listing dataset (read-only for the process lifetime)
    let dataset = Arc::new(
        Dataset::from_csv_path(&config.dataset_path).context("Failed to load listing dataset")?,
    );

    // Wire the advisory gateway
    let advisor: Arc<dyn Advisor> = match &config.openai_api_key {
        Some(api_key) => {
            let advisor = match &config.openai_model {
                Some(model) => OpenAiAdvisor::with_model(api_key.clone(), model.clone()),
                None => OpenAiAdvisor::new(api_key.clone()),
            }
            .context("Failed to build OpenAI advisor")?;
            tracing::info!("Advisory gateway: OpenAI");
            Arc::new(advisor)
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, advisory suggestions will use the fallback");
            Arc::new(NoopAdvisor)
        }
    };

    let service = Arc::new(
        QueryService::new(dataset, advisor)
            .with_advisor_timeout(Duration::from_secs(config.advisor_timeout_secs)),
    );

    // Build application
    let app = build_app(service);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Query endpoint: http://localhost:{}/query", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
