//! # FVM Common Library
//!
//! Shared code for the Franklin V Moon site services including:
//! - Travel video catalog model and the embedded catalog
//! - Query service (grouped, ranked and searched views)
//! - Sort selector parsing
//! - Navigation tab resolution
//! - Configuration loading
//! - Timecode formatting

pub mod config;
pub mod error;
pub mod nav;
pub mod timecode;
pub mod travel;

pub use error::{Error, Result};
pub use travel::{Catalog, SortBy, VideoGroup, VideoRecord};
