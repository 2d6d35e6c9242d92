//! Directory header statistics and per-video detail panels

use serde::Serialize;

use super::catalog::Catalog;
use super::model::{VideoRecord, SCORE_CATEGORIES};
use super::query::count_total_countries;
use crate::timecode::format_timecode;
use crate::{Error, Result};

/// Counts shown in the directory header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub videos: usize,
    pub countries: i64,
}

impl CatalogStats {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            videos: catalog.len(),
            countries: count_total_countries(catalog),
        }
    }
}

/// Highlight with its timecode ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightLabel {
    pub title: String,
    pub timecode: u32,
    pub label: String,
}

/// Mean rating of one scorecard category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub mean: f64,
}

/// Advisory level with its display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryLabel {
    pub level: u8,
    pub text: &'static str,
    pub link: String,
}

/// A video plus the derived fields its detail panel displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDetail<'a> {
    pub index: usize,
    pub video: &'a VideoRecord,
    pub advisory: Option<AdvisoryLabel>,
    pub highlights: Vec<HighlightLabel>,
    pub category_scores: Vec<CategoryScore>,
}

/// Build the detail panel for the video at a catalog position
pub fn video_detail(catalog: &Catalog, index: usize) -> Result<VideoDetail<'_>> {
    let video = catalog
        .get(index)
        .ok_or_else(|| Error::NotFound(format!("No video at position {}", index)))?;

    let extras = video.extras.as_ref();

    let advisory = extras
        .and_then(|e| e.travel_advisory.as_ref())
        .map(|a| AdvisoryLabel {
            level: a.advice.level(),
            text: a.advice.text(),
            link: a.link.clone(),
        });

    let highlights: Vec<HighlightLabel> = extras
        .and_then(|e| e.highlights.as_ref())
        .map(|highlights| {
            highlights
                .iter()
                .map(|h| HighlightLabel {
                    title: h.title.clone(),
                    timecode: h.timecode,
                    label: format_timecode(h.timecode),
                })
                .collect()
        })
        .unwrap_or_default();

    let category_scores: Vec<CategoryScore> = video
        .scorecard()
        .map(|card| {
            SCORE_CATEGORIES
                .iter()
                .filter_map(|&category| {
                    card.mean(category).map(|mean| CategoryScore { category, mean })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(VideoDetail {
        index,
        video,
        advisory,
        highlights,
        category_scores,
    })
}
