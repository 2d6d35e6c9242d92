//! Static travel video catalog
//!
//! The catalog ships inside the binary and is decoded once at startup.
//! After that it is only ever read; services share it behind an `Arc`.

use std::path::Path;

use tracing::{debug, info};

use super::model::VideoRecord;
use crate::Result;

/// Catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/travel_videos.json");

/// Ordered, read-only collection of travel videos
///
/// Catalog order is insertion order and is the tie-break for every ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
}

impl Catalog {
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        Self { videos }
    }

    /// Decode the catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        info!("Loaded embedded travel catalog ({} videos)", catalog.len());
        Ok(catalog)
    }

    /// Decode a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let videos: Vec<VideoRecord> = serde_json::from_str(json)?;
        debug!("Decoded {} catalog records", videos.len());
        Ok(Self { videos })
    }

    /// Read and decode a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded travel catalog from {} ({} videos)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Record at a catalog position
    pub fn get(&self, index: usize) -> Option<&VideoRecord> {
        self.videos.get(index)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_catalog_decodes() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_embedded_years_are_four_digits() {
        let catalog = Catalog::embedded().unwrap();
        for video in catalog.videos() {
            assert!(
                (1000..=9999).contains(&video.year),
                "{} has year {}",
                video.title,
                video.year
            );
        }
    }

    #[test]
    fn test_embedded_titles_unique() {
        let catalog = Catalog::embedded().unwrap();
        let titles: HashSet<&str> = catalog.videos().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = Catalog::from_json(r#"[{"title": "No year"}]"#);
        assert!(matches!(result, Err(crate::Error::Catalog(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::default();
        assert!(catalog.get(0).is_none());
        assert_eq!(catalog.len(), 0);
    }
}
