//! Catchable-trip selection.
//!
//! Given the planner's trip list and the time it takes to walk to the
//! station, decide which train to aim for and when to leave.

mod clock;
mod select;

pub use clock::{Clock, FixedClock, ZonedClock};
pub use select::{SelectedTrip, UNKNOWN_LINE, select_catchable};
