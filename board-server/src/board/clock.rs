//! Wall-clock access for the board.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of "now" for trip selection.
///
/// Leg times from the planner are local to the transit network, so "now" must
/// be expressed in the same timezone.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The real clock, read in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
