//! CX Sentiment Analyzer PT-BR — Binary Entrypoint
//! Boots the Axum HTTP shell around the pure analysis pipeline.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cx_sentiment_analyzer::api;
use cx_sentiment_analyzer::config::ShellConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cx_sentiment_analyzer=info,cx=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = ShellConfig::from_env();
    let addr = config.bind_addr.clone();
    let router = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "cx-sentiment-analyzer listening");
    axum::serve(listener, router).await?;

    Ok(())
}
