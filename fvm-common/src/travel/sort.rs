//! Sort selector for the travel directory
//!
//! The directory page accepts an optional `SortBy` request parameter.
//! Matching is case-insensitive and anything unrecognised falls back to
//! [`SortBy::Newest`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::catalog::Catalog;
use super::query::{self, VideoGroup};
use crate::Error;

/// Directory ordering selected by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortBy {
    /// A search term is active; the UI shows search results instead of a view
    Searching,
    #[default]
    Newest,
    Oldest,
    Best,
    Worst,
    Food,
    Danger,
    Funniest,
}

impl SortBy {
    pub const ALL: [SortBy; 8] = [
        SortBy::Searching,
        SortBy::Newest,
        SortBy::Oldest,
        SortBy::Best,
        SortBy::Worst,
        SortBy::Food,
        SortBy::Danger,
        SortBy::Funniest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Searching => "Searching",
            SortBy::Newest => "Newest",
            SortBy::Oldest => "Oldest",
            SortBy::Best => "Best",
            SortBy::Worst => "Worst",
            SortBy::Food => "Food",
            SortBy::Danger => "Danger",
            SortBy::Funniest => "Funniest",
        }
    }

    /// Resolve the initial selection from a request parameter
    ///
    /// Absent or unrecognised values give `Newest`. `Searching` has no view
    /// of its own, so it also gives `Newest`.
    pub fn from_param(param: Option<&str>) -> SortBy {
        match param.map(str::parse::<SortBy>) {
            Some(Ok(SortBy::Searching)) | Some(Err(_)) | None => SortBy::Newest,
            Some(Ok(sort)) => sort,
        }
    }

    /// Compute the grouped view for this selection
    ///
    /// `Searching` is answered with the default view; callers showing
    /// search results use [`query::search_result`] instead.
    pub fn view(self, catalog: &Catalog) -> Vec<VideoGroup<'_>> {
        let compute: fn(&Catalog) -> Vec<VideoGroup<'_>> = match self {
            SortBy::Searching | SortBy::Newest => query::all_newest_first,
            SortBy::Oldest => query::all_oldest_first,
            SortBy::Best => query::all_by_best,
            SortBy::Worst => query::all_by_worst,
            SortBy::Food => query::all_by_food,
            SortBy::Danger => query::all_by_danger,
            SortBy::Funniest => query::funniest_only,
        };
        compute(catalog)
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown sort selection: {}", s)))
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("best".parse::<SortBy>().unwrap(), SortBy::Best);
        assert_eq!("DANGER".parse::<SortBy>().unwrap(), SortBy::Danger);
        assert_eq!("FuNnIeSt".parse::<SortBy>().unwrap(), SortBy::Funniest);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!("bogus".parse::<SortBy>(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_param_fallback() {
        assert_eq!(SortBy::from_param(None), SortBy::Newest);
        assert_eq!(SortBy::from_param(Some("bogus")), SortBy::Newest);
        assert_eq!(SortBy::from_param(Some("")), SortBy::Newest);
        assert_eq!(SortBy::from_param(Some("searching")), SortBy::Newest);
        assert_eq!(SortBy::from_param(Some("oldest")), SortBy::Oldest);
    }

    #[test]
    fn test_display_round_trips() {
        for sort in SortBy::ALL {
            assert_eq!(sort.to_string().parse::<SortBy>().unwrap(), sort);
        }
    }

    #[test]
    fn test_searching_view_is_newest() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(SortBy::Searching.view(&catalog), SortBy::Newest.view(&catalog));
    }
}
