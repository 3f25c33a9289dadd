//! Per-visitor route selection.

use tracing::warn;

use crate::domain::{RouteBook, RouteConfig};

/// Which route the visitor is looking at.
///
/// Exactly one route is selected at any time. The selection is carried in
/// the page URL (`?route=<key>`), so each render rebuilds it from the request
/// and nothing is shared between visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSession {
    selected: String,
}

impl BoardSession {
    /// A fresh session on the default route.
    pub fn new(routes: &RouteBook) -> Self {
        Self {
            selected: routes.default_route().key.clone(),
        }
    }

    /// Rebuild the session from the requested route key.
    ///
    /// Missing or unknown keys fall back to the default route.
    pub fn from_request(requested: Option<&str>, routes: &RouteBook) -> Self {
        Self::new(routes).select(requested.unwrap_or_default(), routes)
    }

    /// Switch to another route. Unknown keys leave the selection unchanged.
    pub fn select(self, key: &str, routes: &RouteBook) -> Self {
        if key.is_empty() {
            return self;
        }

        match routes.get(key) {
            Some(route) => Self {
                selected: route.key.clone(),
            },
            None => {
                warn!(route = key, "ignoring unknown route");
                self
            }
        }
    }

    pub fn selected_key(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected == key
    }

    /// The selected route's configuration.
    pub fn route<'a>(&self, routes: &'a RouteBook) -> &'a RouteConfig {
        routes
            .get(&self.selected)
            .unwrap_or_else(|| routes.default_route())
    }
}
