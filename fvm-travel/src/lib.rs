//! fvm-travel library - travel video directory service
//!
//! Read-only JSON API over the travel catalog for the site's directory page.

use std::sync::Arc;

use axum::Router;
use fvm_common::Catalog;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog, read-only for the life of the process
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let travel = Router::new()
        .route("/api/travel", get(api::get_travel_view))
        .route("/api/travel/search", get(api::search_travel))
        .route("/api/travel/countries", get(api::get_countries))
        .route("/api/travel/stats", get(api::get_stats))
        .route("/api/travel/videos/:index", get(api::get_video_detail));

    let site = Router::new()
        .route("/api/nav/tab", get(api::get_active_tab))
        .merge(api::service_routes());

    Router::new()
        .merge(travel)
        .merge(site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
