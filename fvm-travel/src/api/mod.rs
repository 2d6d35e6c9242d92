//! HTTP API handlers for fvm-travel

pub mod nav;
pub mod service;
pub mod travel;

pub use nav::get_active_tab;
pub use service::service_routes;
pub use travel::{get_countries, get_stats, get_travel_view, get_video_detail, search_travel};
