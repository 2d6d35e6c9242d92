//! Navigation tab lookup
//!
//! Lets the site header resolve its active tab from the current path on
//! first render, before any client-side navigation happens.

use axum::{extract::Query, Json};
use fvm_common::nav::{active_tab, TabRoute, TABS};
use serde::{Deserialize, Serialize};

/// Query parameters for tab lookup
#[derive(Debug, Deserialize)]
pub struct TabQuery {
    /// Current browser path; missing means the site root
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

/// Active tab for a path
#[derive(Debug, Serialize)]
pub struct TabResponse {
    pub path: String,
    pub index: usize,
    pub tab: TabRoute,
}

/// GET /api/nav/tab?path=/travel/world-map
pub async fn get_active_tab(Query(query): Query<TabQuery>) -> Json<TabResponse> {
    let index = active_tab(&query.path, &TABS);
    Json(TabResponse {
        path: query.path,
        index,
        tab: TABS[index],
    })
}
