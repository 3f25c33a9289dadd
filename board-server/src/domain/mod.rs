//! Domain types for the departure board.
//!
//! Routes are validated when configuration is loaded and trips when the
//! planner response is decoded, so code receiving these types can rely on
//! their shape.

mod route;
mod time;
mod trip;

pub use route::{
    HELLERUP_ID, InvalidStationId, NORREPORT_ID, Origin, RouteBook, RouteBookError, RouteConfig,
    StationId,
};
pub use time::{ROLLOVER_GRACE_HOURS, TimeError, anchor_to_day, parse_clock_time};
pub use trip::{Leg, LegKind, LegStop, TripCandidate};
