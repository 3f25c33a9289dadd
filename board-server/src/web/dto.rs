//! Data transfer objects for web requests and responses.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::board::SelectedTrip;
use crate::domain::RouteConfig;

/// Query string for the board and the JSON endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Key of the route to show (defaults to the first configured route)
    pub route: Option<String>,
}

/// Response for `GET /api/next`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NextTrainResponse {
    /// Key of the route that was evaluated
    pub route: String,

    /// Display name of the route
    pub route_name: String,

    /// Station the user walks to
    pub walk_to: String,

    /// Walking time in minutes
    pub walk_minutes: i64,

    /// The train to catch, or null when none is catchable
    pub trip: Option<TripResult>,
}

impl NextTrainResponse {
    pub fn new(route: &RouteConfig, walk: Duration, trip: Option<&SelectedTrip>) -> Self {
        Self {
            route: route.key.clone(),
            route_name: route.name.clone(),
            walk_to: route.walk_to.clone(),
            walk_minutes: walk.num_minutes(),
            trip: trip.map(|t| TripResult::from_selected(t, walk)),
        }
    }
}

/// A catchable train.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripResult {
    /// Latest time to leave, "HH:MM"
    pub leave_by: String,

    /// Departure time as reported by the planner
    pub departure: String,

    /// Arrival time as reported by the planner
    pub arrival: String,

    /// Line or train name
    pub line: String,

    /// Where the train leg ends
    pub destination: String,

    /// Departure with date, "YYYY-MM-DDTHH:MM:SS" in network local time
    pub departs_at: String,
}

impl TripResult {
    pub fn from_selected(trip: &SelectedTrip, walk: Duration) -> Self {
        Self {
            leave_by: trip.leave_by(walk).format("%H:%M").to_string(),
            departure: trip.departure.clone(),
            arrival: trip.arrival.clone(),
            line: trip.line.clone(),
            destination: trip.destination.clone(),
            departs_at: trip.departs_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
