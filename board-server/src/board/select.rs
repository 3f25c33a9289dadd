//! Picking the next train the user can still walk to.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info};

use crate::domain::{TimeError, TripCandidate, anchor_to_day, parse_clock_time};

/// Line name shown when the planner omits one.
pub const UNKNOWN_LINE: &str = "Unknown";

/// The first train leg of the trip the user should take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTrip {
    /// Departure time of day as reported by the planner.
    pub departure: String,
    /// Arrival time of day as reported by the planner.
    pub arrival: String,
    /// Line or train name.
    pub line: String,
    /// Where the train leg ends.
    pub destination: String,
    /// Departure anchored to a calendar day.
    pub departs_at: NaiveDateTime,
}

impl SelectedTrip {
    /// The latest time the user can leave and still make the train.
    pub fn leave_by(&self, walk: Duration) -> NaiveDateTime {
        self.departs_at - walk
    }
}

/// Find the first trip whose first train leg departs at least `walk` after
/// `now`.
///
/// Trips are taken in the order given; a later trip is never preferred over an
/// earlier catchable one. Trips without a train leg are skipped. Returns
/// `Ok(None)` when nothing is catchable, and an error only when a departure
/// time that has to be examined is malformed or missing.
pub fn select_catchable(
    trips: &[TripCandidate],
    walk: Duration,
    now: NaiveDateTime,
) -> Result<Option<SelectedTrip>, TimeError> {
    for (i, trip) in trips.iter().enumerate() {
        let Some(leg) = trip.first_journey_leg() else {
            debug!(trip = i, "skipping trip without a train leg");
            continue;
        };

        let departure = leg.origin.time().ok_or_else(TimeError::missing)?;
        let departs_at = anchor_to_day(parse_clock_time(departure)?, now);
        let until = departs_at - now;

        if until >= walk {
            info!(
                trip = i,
                departure,
                minutes_until = until.num_minutes(),
                "found catchable trip"
            );
            return Ok(Some(SelectedTrip {
                departure: departure.to_string(),
                arrival: leg.destination.time().unwrap_or_default().to_string(),
                line: leg
                    .line
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_LINE.to_string()),
                destination: leg.destination.name.clone(),
                departs_at,
            }));
        }

        debug!(
            trip = i,
            departure,
            minutes_until = until.num_minutes(),
            "trip departs too soon to walk to"
        );
    }

    info!(candidates = trips.len(), "no catchable trip");
    Ok(None)
}
