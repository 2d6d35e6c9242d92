//! Travel video record types
//!
//! The catalog is authored as JSON with camelCase keys. Every optional
//! member in the authored data is an `Option` (or a defaulted collection)
//! here, so a record missing a field simply has nothing to rank by.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One travel video in the catalog
///
/// Records have no identity beyond their position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,

    /// Four-digit release year; the only grouping key
    pub year: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_link: Option<String>,

    pub link: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_link: Option<String>,

    /// Age or region restricted on the upstream host
    #[serde(default)]
    pub restricted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reel_links: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_links: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newest_video: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previously_watched: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

impl VideoRecord {
    /// Countries visited in this video (empty when not recorded)
    pub fn countries(&self) -> &[String] {
        self.extras
            .as_ref()
            .and_then(|e| e.countries.as_deref())
            .unwrap_or_default()
    }

    /// Free-form tags (empty when not recorded)
    pub fn tags(&self) -> &[String] {
        self.extras
            .as_ref()
            .and_then(|e| e.tags.as_deref())
            .unwrap_or_default()
    }

    pub fn final_score(&self) -> Option<f64> {
        self.extras.as_ref().and_then(|e| e.final_score)
    }

    pub fn scorecard(&self) -> Option<&Scorecard> {
        self.extras.as_ref().and_then(|e| e.scorecard.as_ref())
    }

    /// Manual correction applied to the distinct country total
    pub fn deduct_country_count(&self) -> u32 {
        self.extras
            .as_ref()
            .and_then(|e| e.deduct_country_count)
            .unwrap_or(0)
    }
}

/// Optional structured metadata attached to a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduct_country_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorecard: Option<Scorecard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dos: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<Advice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_advisory: Option<TravelAdvisory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itineraries: Option<Vec<Itinerary>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Vec<TitledLink>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_links: Option<Vec<TitledLink>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_videos: Option<Vec<ExtraVideo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Scorecard category names, in display order
pub const SCORE_CATEGORIES: [&str; 7] = [
    "beauty",
    "affordability",
    "food",
    "hospitality",
    "safety",
    "accessibility",
    "video",
];

/// Per-category ratings; each category holds one or more sub-scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    #[serde(default)]
    pub beauty: Vec<f64>,
    #[serde(default)]
    pub affordability: Vec<f64>,
    #[serde(default)]
    pub food: Vec<f64>,
    #[serde(default)]
    pub hospitality: Vec<f64>,
    #[serde(default)]
    pub safety: Vec<f64>,
    #[serde(default)]
    pub accessibility: Vec<f64>,
    #[serde(default)]
    pub video: Vec<f64>,
}

impl Scorecard {
    /// Sub-scores for a category by name
    pub fn category(&self, name: &str) -> Option<&[f64]> {
        let scores = match name {
            "beauty" => &self.beauty,
            "affordability" => &self.affordability,
            "food" => &self.food,
            "hospitality" => &self.hospitality,
            "safety" => &self.safety,
            "accessibility" => &self.accessibility,
            "video" => &self.video,
            _ => return None,
        };
        Some(scores)
    }

    /// Mean of a category's sub-scores, `None` when the category is empty
    pub fn mean(&self, name: &str) -> Option<f64> {
        let scores = self.category(name)?;
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// Trip-planning facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub travel_length: String,
    pub currency: String,
    pub season: String,
    pub daily_budget: String,
}

/// Government travel advisory attached to a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelAdvisory {
    pub link: String,
    pub advice: Advisory,
}

/// Four-level travel safety classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Advisory {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl Advisory {
    /// Fixed display text for the level
    pub fn text(self) -> &'static str {
        match self {
            Advisory::Level1 => "Exercise normal safety precautions",
            Advisory::Level2 => "Exercise a high degree of caution",
            Advisory::Level3 => "Reconsider your need to travel",
            Advisory::Level4 => "Do not travel",
        }
    }

    /// Numeric level, 1 through 4
    pub fn level(self) -> u8 {
        match self {
            Advisory::Level1 => 1,
            Advisory::Level2 => 2,
            Advisory::Level3 => 3,
            Advisory::Level4 => 4,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Jump point inside a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    /// Offset from the start of the video, in seconds
    pub timecode: u32,
}

/// Day-by-day trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub title: String,
    pub length: String,
    pub description: String,
    pub map_image: String,
    #[serde(default)]
    pub steps: Vec<ItineraryStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStep {
    pub step_title: String,
    pub days: String,
    #[serde(default)]
    pub details: Vec<ItineraryDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDetail {
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_warning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recommendation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Link with a display title (soundtrack credits, further reading)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraVideo {
    pub title: String,
    pub hosted_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_deserializes() {
        let json = r#"{"title":"Iceland","year":2021,"link":"https://youtu.be/x","restricted":false}"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.year, 2021);
        assert!(record.extras.is_none());
        assert!(record.countries().is_empty());
        assert!(record.tags().is_empty());
        assert_eq!(record.final_score(), None);
        assert_eq!(record.deduct_country_count(), 0);
    }

    #[test]
    fn test_camel_case_extras() {
        let json = r#"{
            "title": "Balkans",
            "year": 2022,
            "link": "https://youtu.be/y",
            "restricted": true,
            "newestVideo": true,
            "extras": {
                "countries": ["Serbia", "Kosovo"],
                "deductCountryCount": 1,
                "finalScore": 7.5,
                "travelAdvisory": { "link": "https://example.org", "advice": "Level3" },
                "highlights": [{ "title": "Border", "timecode": 95 }]
            }
        }"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.newest_video, Some(true));
        assert_eq!(record.countries(), ["Serbia", "Kosovo"]);
        assert_eq!(record.deduct_country_count(), 1);
        assert_eq!(record.final_score(), Some(7.5));
        let advisory = record.extras.unwrap().travel_advisory.unwrap();
        assert_eq!(advisory.advice, Advisory::Level3);
    }

    #[test]
    fn test_scorecard_mean() {
        let card = Scorecard {
            food: vec![8.0, 6.0, 7.0],
            ..Default::default()
        };

        assert_eq!(card.mean("food"), Some(7.0));
        assert_eq!(card.mean("safety"), None);
        assert_eq!(card.mean("nonsense"), None);
    }

    #[test]
    fn test_advisory_text() {
        assert_eq!(Advisory::Level1.to_string(), "Exercise normal safety precautions");
        assert_eq!(Advisory::Level4.text(), "Do not travel");
        assert_eq!(Advisory::Level2.level(), 2);
    }
}
