//! vbump server binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let listen = std::env::var("VBUMP_LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let data_dir = std::env::var("VBUMP_DATA_DIR")
        .context("VBUMP_DATA_DIR must point at the version data directory")?;

    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address {listen:?}"))?;

    tracing::info!("starting vbump v{}", env!("CARGO_PKG_VERSION"));
    vbump_server::run_server(addr, data_dir.into()).await?;

    Ok(())
}
