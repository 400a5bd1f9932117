//! Concierge binary: load configuration, start the gateway.

use {
    anyhow::{Context, Result},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use {
    concierge_config::BotConfig,
    concierge_gateway::{AppContext, router},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Populate the environment from .env before anything reads it.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env().context("loading configuration")?;
    let port = config.port;
    let app = router(AppContext::new(config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding port {port}"))?;
    info!(port, "concierge is running");
    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
