//! Askama templates for the board page.

use askama::Template;
use chrono::Duration;

use crate::board::SelectedTrip;
use crate::domain::{RouteBook, RouteConfig};

use super::session::BoardSession;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The departure board: route toggles and the next catchable train.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub toggles: Vec<RouteToggleView>,
    pub route_name: String,
    pub walk_to: String,
    pub walk_minutes: i64,
    pub trip: Option<TripView>,
}

impl BoardTemplate {
    pub fn new(
        session: &BoardSession,
        routes: &RouteBook,
        walk: Duration,
        trip: Option<&SelectedTrip>,
    ) -> Self {
        let route = session.route(routes);

        Self {
            toggles: routes
                .iter()
                .map(|r| RouteToggleView::from_route(r, session))
                .collect(),
            route_name: route.name.clone(),
            walk_to: route.walk_to.clone(),
            walk_minutes: walk.num_minutes(),
            trip: trip.map(|t| TripView::from_selected(t, walk)),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A route selection button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteToggleView {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

impl RouteToggleView {
    pub fn from_route(route: &RouteConfig, session: &BoardSession) -> Self {
        Self {
            key: route.key.clone(),
            label: route.label.clone(),
            selected: session.is_selected(&route.key),
        }
    }

    /// CSS class for the button.
    pub fn kind(&self) -> &'static str {
        if self.selected { "primary" } else { "secondary" }
    }
}

/// The train to catch, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripView {
    /// "HH:MM" the user has to leave by.
    pub leave_by: String,
    pub departure: String,
    pub arrival: String,
    pub line: String,
    pub destination: String,
}

impl TripView {
    pub fn from_selected(trip: &SelectedTrip, walk: Duration) -> Self {
        Self {
            leave_by: trip.leave_by(walk).format("%H:%M").to_string(),
            departure: trip.departure.clone(),
            arrival: trip.arrival.clone(),
            line: trip.line.clone(),
            destination: trip.destination.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn selected() -> SelectedTrip {
        SelectedTrip {
            departure: "08:20".into(),
            arrival: "08:28".into(),
            line: "Re 4512".into(),
            destination: "Hellerup St.".into(),
            departs_at: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(8, 20, 0)
                .unwrap(),
        }
    }

    #[test]
    fn trip_view_leave_by() {
        let view = TripView::from_selected(&selected(), Duration::minutes(12));
        assert_eq!(view.leave_by, "08:08");
        assert_eq!(view.departure, "08:20");
        assert_eq!(view.arrival, "08:28");
    }

    #[test]
    fn toggles_follow_session() {
        let routes = RouteBook::default();
        let session = BoardSession::from_request(Some("gersonsvej"), &routes);
        let page = BoardTemplate::new(&session, &routes, Duration::minutes(12), None);

        assert_eq!(page.toggles.len(), 2);
        assert_eq!(page.toggles[0].kind(), "secondary");
        assert_eq!(page.toggles[1].kind(), "primary");
        assert_eq!(page.route_name, "Gersonsvej 59");
        assert_eq!(page.walk_to, "Hellerup St.");
    }

    #[test]
    fn render_trip() {
        let routes = RouteBook::default();
        let session = BoardSession::new(&routes);
        let trip = selected();
        let html = BoardTemplate::new(&session, &routes, Duration::minutes(12), Some(&trip))
            .render()
            .unwrap();

        assert!(html.contains("Kjeld Langes Gade 1 → Hellerup St."));
        assert!(html.contains("08:08"));
        assert!(html.contains("Walk 12 min to Nørreport St."));
        assert!(html.contains("Train departs 08:20"));
        assert!(html.contains("Re 4512"));
        assert!(!html.contains("Could not find train"));
    }

    #[test]
    fn render_no_trip() {
        let routes = RouteBook::default();
        let session = BoardSession::new(&routes);
        let html = BoardTemplate::new(&session, &routes, Duration::minutes(12), None)
            .render()
            .unwrap();

        assert!(html.contains("Could not find train"));
        assert!(html.contains("Kjeld Langes Gade"));
        assert!(html.contains("Gersonsvej"));
    }

    #[test]
    fn render_error() {
        let html = ErrorTemplate {
            title: "Upstream error".into(),
            message: "<b>bad</b>".into(),
            details: Some("more".into()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Upstream error"));
        assert!(html.contains("&lt;b&gt;bad"));
        assert!(!html.contains("<b>bad"));
        assert!(html.contains("more"));
    }
}
