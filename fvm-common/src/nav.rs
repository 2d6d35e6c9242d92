//! Navigation tab resolution
//!
//! The site header shows one tab per top-level section. The active tab is
//! derived from the current path: the root route only matches exactly,
//! every other route matches as a path prefix, and the first match wins.
//! Paths matching nothing select the home tab.

use serde::Serialize;

/// One navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabRoute {
    pub route: &'static str,
    /// Visible label; the home tab is icon-only
    pub label: Option<&'static str>,
    /// Page description, also used as the hidden page heading
    pub page_description: &'static str,
    /// Tab indicator colour
    pub color: &'static str,
    /// Logotype gradient class for this section
    pub gradient: &'static str,
    /// Display order in the header
    pub order: u8,
    /// Disabled tabs keep their index but are not rendered
    pub disabled: bool,
}

/// Site tabs, in index order
pub const TABS: [TabRoute; 4] = [
    TabRoute {
        route: "/",
        label: None,
        page_description: "Franklin Von Moon, software engineer and traveller. Biography and project portfolio.",
        color: "#4fc3f7",
        gradient: "blueGradient",
        order: 0,
        disabled: false,
    },
    TabRoute {
        route: "/projects",
        label: Some("PROJECTS"),
        page_description: "Software projects, case studies and open source work by Franklin Von Moon.",
        color: "#ab47bc",
        gradient: "purpleGradient",
        order: 1,
        disabled: false,
    },
    TabRoute {
        route: "/travel",
        label: Some("TRAVEL"),
        page_description: "Travel videos from around the world with ratings, itineraries and travel advice.",
        color: "#ffeb3b",
        gradient: "yellowGradient",
        order: 2,
        disabled: false,
    },
    TabRoute {
        route: "/contact",
        label: Some("CONTACT"),
        page_description: "Get in touch with Franklin Von Moon.",
        color: "#66bb6a",
        gradient: "greenGradient",
        order: 3,
        disabled: true,
    },
];

/// Index of the tab matching `path`
///
/// Index 0 is the root route and only matches exactly. The remaining
/// routes match by prefix in order. No match gives 0.
pub fn active_tab(path: &str, routes: &[TabRoute]) -> usize {
    match routes.first() {
        Some(home) if home.route == path => return 0,
        None => return 0,
        _ => {}
    }

    routes
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, tab)| path.starts_with(tab.route))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Header tab selection kept in step with the browser location
#[derive(Debug, Clone)]
pub struct TabState<'a> {
    routes: &'a [TabRoute],
    index: usize,
}

impl<'a> TabState<'a> {
    /// Start with the tab for the current path
    pub fn new(routes: &'a [TabRoute], current_path: &str) -> Self {
        Self {
            routes,
            index: active_tab(current_path, routes),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a TabRoute> {
        self.routes.get(self.index)
    }

    /// Optimistically select a clicked tab
    ///
    /// Returns the route to navigate to, or `None` if `index` is out of
    /// range (selection unchanged).
    pub fn select(&mut self, index: usize) -> Option<&'a str> {
        let tab = self.routes.get(index)?;
        self.index = index;
        Some(tab.route)
    }

    /// Recompute the selection after a route change
    pub fn sync(&mut self, current_path: &str) -> usize {
        self.index = active_tab(current_path, self.routes);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_exactly() {
        assert_eq!(active_tab("/", &TABS), 0);
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(active_tab("/travel", &TABS), 2);
        assert_eq!(active_tab("/travel/world-map", &TABS), 2);
        assert_eq!(active_tab("/projects/site", &TABS), 1);
    }

    #[test]
    fn test_disabled_tab_still_resolves() {
        assert_eq!(active_tab("/contact", &TABS), 3);
    }

    #[test]
    fn test_unmatched_defaults_to_home() {
        assert_eq!(active_tab("/nowhere", &TABS), 0);
        assert_eq!(active_tab("", &TABS), 0);
        assert_eq!(active_tab("/anything", &[]), 0);
    }

    #[test]
    fn test_first_prefix_wins() {
        let mut routes = TABS;
        routes[1].route = "/tr";
        assert_eq!(active_tab("/travel", &routes), 1);
    }

    #[test]
    fn test_tab_state_select_and_sync() {
        let mut state = TabState::new(&TABS, "/travel/world-map");
        assert_eq!(state.index(), 2);

        assert_eq!(state.select(1), Some("/projects"));
        assert_eq!(state.index(), 1);
        assert_eq!(state.current().map(|t| t.route), Some("/projects"));

        assert_eq!(state.select(99), None);
        assert_eq!(state.index(), 1);

        assert_eq!(state.sync("/"), 0);
        assert_eq!(state.current().and_then(|t| t.label), None);
    }
}
