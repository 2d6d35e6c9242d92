//! Service identity endpoints: liveness and build identification
//!
//! Both answer from compile-time data only; they never touch the catalog.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

const MODULE: &str = "fvm-travel";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness answer
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
}

/// Build identification for the site footer (stamped by build.rs)
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        version: VERSION,
        git_hash: env!("GIT_HASH"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        build_profile: env!("BUILD_PROFILE"),
    };
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        module: MODULE,
        version: VERSION,
    })
}

/// GET /api/buildinfo
pub async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo::CURRENT)
}

/// `/health` and `/api/buildinfo`
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/buildinfo", get(build_info))
}
