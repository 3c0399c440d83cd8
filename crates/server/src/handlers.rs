//! Route handlers.
//!
//! Success bodies are the bare canonical version string; failures are
//! mapped to JSON error responses by [`crate::error::ApiError`].

use axum::extract::{Path, State};
use metrics::counter;
use tracing::info;
use vbump_application::{bump_transient_minor, bump_transient_patch};

use crate::AppState;
use crate::error::ApiResult;

/// Counter of persistent bumps, labelled with project and element.
pub(crate) const BUMPS_TOTAL: &str = "vbump_bumps_total";

/// `GET /` — health check.
pub(crate) async fn on_health() -> &'static str {
    "hello from vbump!"
}

/// `POST /major/{project}` — bump the major version of a project.
pub(crate) async fn on_major(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> ApiResult<String> {
    let version = state.store.bump_major(&project).await?;
    counter!(BUMPS_TOTAL, "project" => project.clone(), "element" => "major").increment(1);
    info!("bump major version to {version} on project {project}");
    Ok(version.to_string())
}

/// `POST /minor/{project}` — bump the minor version of a project.
pub(crate) async fn on_minor(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> ApiResult<String> {
    let version = state.store.bump_minor(&project).await?;
    counter!(BUMPS_TOTAL, "project" => project.clone(), "element" => "minor").increment(1);
    info!("bump minor version to {version} on project {project}");
    Ok(version.to_string())
}

/// `POST /patch/{project}` — bump the patch version of a project.
pub(crate) async fn on_patch(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> ApiResult<String> {
    let version = state.store.bump_patch(&project).await?;
    counter!(BUMPS_TOTAL, "project" => project.clone(), "element" => "patch").increment(1);
    info!("bump patch version to {version} on project {project}");
    Ok(version.to_string())
}

/// `POST /version/{project}/{version}` — force-set a project's version.
pub(crate) async fn on_set_version(
    State(state): State<AppState>,
    Path((project, version)): Path<(String, String)>,
) -> ApiResult<String> {
    let version = state.store.set_version(&project, &version).await?;
    info!("set version explicitly to {version} on project {project}");
    Ok(version.to_string())
}

/// `GET /version/{project}` — read a project's current version.
pub(crate) async fn on_get_version(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> ApiResult<String> {
    let version = state.store.get_version(&project).await?;
    info!("get version from project {project}");
    Ok(version.to_string())
}

/// `POST /transient/minor/{version}` — stateless minor bump.
pub(crate) async fn on_transient_minor(Path(version): Path<String>) -> ApiResult<String> {
    let bumped = bump_transient_minor(&version)?;
    info!("bump transient minor version to {bumped}");
    Ok(bumped.to_string())
}

/// `POST /transient/patch/{version}` — stateless patch bump.
pub(crate) async fn on_transient_patch(Path(version): Path<String>) -> ApiResult<String> {
    let bumped = bump_transient_patch(&version)?;
    info!("bump transient patch version to {bumped}");
    Ok(bumped.to_string())
}

/// `GET /metrics` — Prometheus exposition.
pub(crate) async fn on_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
