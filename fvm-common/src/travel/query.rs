//! Derived views over the travel catalog
//!
//! Every function here is a pure function of the catalog and its arguments.
//! Views borrow records from the catalog and never modify it. A record
//! lacking the key a ranking needs is left out of that ranking; no score
//! is ever substituted for a missing one.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::catalog::Catalog;
use super::model::VideoRecord;

/// Heading of the single group returned by a search
pub const SEARCH_HEADING: &str = "Tags";

/// Tag marking a video for the funniest view
pub const FUNNY_TAG: &str = "Funny";

pub const BEST_HEADING: &str = "Best Rated";
pub const WORST_HEADING: &str = "Lowest Rated";
pub const FOOD_HEADING: &str = "Best Food";
pub const DANGER_HEADING: &str = "Safety";
pub const FUNNIEST_HEADING: &str = "Funniest";

/// A headed run of videos, as rendered by the directory page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoGroup<'a> {
    /// Year for chronological views, otherwise a fixed label
    pub heading: String,
    pub grouping: Vec<&'a VideoRecord>,
}

impl<'a> VideoGroup<'a> {
    fn new(heading: impl Into<String>, grouping: Vec<&'a VideoRecord>) -> Self {
        Self {
            heading: heading.into(),
            grouping,
        }
    }
}

fn group_by_year(catalog: &Catalog) -> BTreeMap<u16, Vec<&VideoRecord>> {
    let mut years: BTreeMap<u16, Vec<&VideoRecord>> = BTreeMap::new();
    for video in catalog.videos() {
        years.entry(video.year).or_default().push(video);
    }
    years
}

/// All videos grouped by year, most recent year first
pub fn all_newest_first(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    group_by_year(catalog)
        .into_iter()
        .rev()
        .map(|(year, videos)| VideoGroup::new(year.to_string(), videos))
        .collect()
}

/// All videos grouped by year, earliest year first
pub fn all_oldest_first(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    group_by_year(catalog)
        .into_iter()
        .map(|(year, videos)| VideoGroup::new(year.to_string(), videos))
        .collect()
}

/// Stable ranking of the records that have a key; `descending` puts the
/// largest key first. Equal keys keep catalog order.
fn ranked<'a, F>(catalog: &'a Catalog, key: F, descending: bool) -> Vec<&'a VideoRecord>
where
    F: Fn(&VideoRecord) -> Option<f64>,
{
    let mut scored: Vec<(f64, &VideoRecord)> = catalog
        .videos()
        .iter()
        .filter_map(|video| key(video).map(|score| (score, video)))
        .collect();

    scored.sort_by(|(a, _), (b, _)| {
        let order = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        if descending {
            order.reverse()
        } else {
            order
        }
    });

    scored.into_iter().map(|(_, video)| video).collect()
}

fn single_group<'a>(heading: &str, videos: Vec<&'a VideoRecord>) -> Vec<VideoGroup<'a>> {
    vec![VideoGroup::new(heading, videos)]
}

/// Scored videos, highest final score first
pub fn all_by_best(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    single_group(BEST_HEADING, ranked(catalog, VideoRecord::final_score, true))
}

/// Scored videos, lowest final score first
pub fn all_by_worst(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    single_group(WORST_HEADING, ranked(catalog, VideoRecord::final_score, false))
}

fn category_mean(video: &VideoRecord, category: &str) -> Option<f64> {
    video.scorecard().and_then(|card| card.mean(category))
}

/// Videos with a food rating, best food first
pub fn all_by_food(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    let videos = ranked(catalog, |v| category_mean(v, "food"), true);
    single_group(FOOD_HEADING, videos)
}

/// Videos with a safety rating, highest safety mean first
pub fn all_by_danger(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    let videos = ranked(catalog, |v| category_mean(v, "safety"), true);
    single_group(DANGER_HEADING, videos)
}

/// Videos tagged as funny, in catalog order
pub fn funniest_only(catalog: &Catalog) -> Vec<VideoGroup<'_>> {
    let videos = catalog
        .videos()
        .iter()
        .filter(|video| video.tags().iter().any(|tag| tag == FUNNY_TAG))
        .collect();
    single_group(FUNNIEST_HEADING, videos)
}

/// Every distinct country visited across the catalog, sorted
pub fn all_countries_list(catalog: &Catalog) -> BTreeSet<&str> {
    catalog
        .videos()
        .iter()
        .flat_map(|video| video.countries())
        .map(String::as_str)
        .collect()
}

/// Distinct countries minus the per-video manual deductions
///
/// Signed: deductions larger than the distinct count give a negative total
/// rather than hiding the data error.
pub fn count_total_countries(catalog: &Catalog) -> i64 {
    let deducted: i64 = catalog
        .videos()
        .iter()
        .map(|video| i64::from(video.deduct_country_count()))
        .sum();
    all_countries_list(catalog).len() as i64 - deducted
}

/// Case-insensitive substring search over titles, tags and countries
///
/// Matches come back in catalog order under the [`SEARCH_HEADING`] group.
/// No matches yields an empty result.
pub fn search_result<'a>(catalog: &'a Catalog, term: &str) -> Vec<VideoGroup<'a>> {
    let needle = term.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    let matches: Vec<&VideoRecord> = catalog
        .videos()
        .iter()
        .filter(|video| {
            contains(&video.title)
                || video.tags().iter().any(|tag| contains(tag))
                || video.countries().iter().any(|country| contains(country))
        })
        .collect();

    if matches.is_empty() {
        return Vec::new();
    }
    single_group(SEARCH_HEADING, matches)
}
