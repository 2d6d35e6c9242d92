//! Travel video directory
//!
//! Catalog model, the embedded catalog, and the query service that derives
//! grouped, ranked and searched views from it.

pub mod catalog;
pub mod detail;
pub mod model;
pub mod query;
pub mod sort;

pub use catalog::Catalog;
pub use detail::{video_detail, CatalogStats, VideoDetail};
pub use model::{Advisory, Extras, Scorecard, VideoRecord};
pub use query::VideoGroup;
pub use sort::SortBy;
