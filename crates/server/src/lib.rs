//! vbump HTTP server.
//!
//! Exposes the version store over a small text-in/text-out route table:
//! bump endpoints per semver element, transient bumps that persist
//! nothing, force-set/get, a health check, and Prometheus metrics.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::trace::TraceLayer;
use vbump_application::VersionStore;
use vbump_infrastructure::FileVersionRepository;

pub mod error;
mod handlers;

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    /// The version store engine.
    pub store: Arc<VersionStore<FileVersionRepository>>,
    /// Renders the Prometheus exposition for `GET /metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Creates server state from a store and a metrics handle.
    pub fn new(store: VersionStore<FileVersionRepository>, metrics: PrometheusHandle) -> Self {
        Self {
            store: Arc::new(store),
            metrics,
        }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::on_health))
        .route("/major/{project}", post(handlers::on_major))
        .route("/minor/{project}", post(handlers::on_minor))
        .route("/patch/{project}", post(handlers::on_patch))
        .route(
            "/transient/minor/{version}",
            post(handlers::on_transient_minor),
        )
        .route(
            "/transient/patch/{version}",
            post(handlers::on_transient_patch),
        )
        .route(
            "/version/{project}/{version}",
            post(handlers::on_set_version),
        )
        .route("/version/{project}", get(handlers::on_get_version))
        .route("/metrics", get(handlers::on_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Installs the Prometheus recorder and serves the router until the
/// process is stopped.
///
/// # Errors
/// Returns an error if the metrics recorder cannot be installed or the
/// listener cannot bind.
pub async fn run_server(addr: SocketAddr, data_dir: PathBuf) -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;
    metrics::describe_counter!(
        handlers::BUMPS_TOTAL,
        "Number of bumps tracked by vbump, labelled with project name and semver element"
    );

    let repository = FileVersionRepository::new(data_dir);
    let state = AppState::new(VersionStore::new(repository), handle);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("server is ready to handle requests at {addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
