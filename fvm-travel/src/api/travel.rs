//! Travel directory endpoints
//!
//! Every request recomputes its view from the shared catalog; nothing is
//! cached between requests. Views borrow from the catalog, so responses are
//! serialized before the handler returns.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fvm_common::travel::query::{all_countries_list, count_total_countries, search_result};
use fvm_common::travel::{video_detail, CatalogStats, SortBy, VideoGroup};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::AppState;

/// Query parameters for the directory view
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    /// Sort selection, case-insensitive; unknown values fall back to Newest
    #[serde(rename = "SortBy")]
    pub sort_by: Option<String>,
}

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

/// Grouped directory view
#[derive(Debug, Serialize)]
pub struct ViewResponse<'a> {
    pub sort_by: SortBy,
    pub total_videos: usize,
    pub groups: Vec<VideoGroup<'a>>,
}

/// Search results
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub term: String,
    pub total_results: usize,
    pub groups: Vec<VideoGroup<'a>>,
}

/// Country suggestions for the search box
#[derive(Debug, Serialize)]
pub struct CountriesResponse<'a> {
    pub countries: Vec<&'a str>,
    /// Distinct countries after manual deductions
    pub total_countries: i64,
}

fn video_count(groups: &[VideoGroup<'_>]) -> usize {
    groups.iter().map(|g| g.grouping.len()).sum()
}

/// GET /api/travel?SortBy=Best
///
/// Returns the directory grouped and ordered by the requested selection.
pub async fn get_travel_view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let sort_by = SortBy::from_param(query.sort_by.as_deref());
    debug!("Directory view requested: {:?} -> {}", query.sort_by, sort_by);

    let groups = sort_by.view(&state.catalog);
    Json(ViewResponse {
        sort_by,
        total_videos: video_count(&groups),
        groups,
    })
    .into_response()
}

/// GET /api/travel/search?term=paris
///
/// Case-insensitive match on title, tags and countries.
pub async fn search_travel(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, TravelError> {
    if query.term.trim().is_empty() {
        return Err(TravelError::EmptyTerm);
    }

    let groups = search_result(&state.catalog, &query.term);
    let total_results = video_count(&groups);
    debug!("Search '{}' matched {} videos", query.term, total_results);

    Ok(Json(SearchResponse {
        term: query.term,
        total_results,
        groups,
    })
    .into_response())
}

/// GET /api/travel/countries
pub async fn get_countries(State(state): State<AppState>) -> Response {
    Json(CountriesResponse {
        countries: all_countries_list(&state.catalog).into_iter().collect(),
        total_countries: count_total_countries(&state.catalog),
    })
    .into_response()
}

/// GET /api/travel/stats
///
/// Video and country counts shown above the directory
pub async fn get_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(CatalogStats::for_catalog(&state.catalog))
}

/// GET /api/travel/videos/:index
///
/// Detail panel for the video at a catalog position.
pub async fn get_video_detail(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response, TravelError> {
    let detail = video_detail(&state.catalog, index)?;
    Ok(Json(detail).into_response())
}

/// Travel endpoint errors
#[derive(Debug)]
pub enum TravelError {
    EmptyTerm,
    NotFound(String),
    Internal(String),
}

impl From<fvm_common::Error> for TravelError {
    fn from(e: fvm_common::Error) -> Self {
        match e {
            fvm_common::Error::NotFound(msg) => TravelError::NotFound(msg),
            other => TravelError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for TravelError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TravelError::EmptyTerm => {
                (StatusCode::BAD_REQUEST, "Empty search term".to_string())
            }
            TravelError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            TravelError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
