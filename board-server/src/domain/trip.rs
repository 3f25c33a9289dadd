//! Trip candidates as returned by the trip planner.

/// What a leg of a trip consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegKind {
    /// Riding a vehicle ("JNY").
    Journey,
    /// Walking between stops ("WALK").
    Walk,
    /// Any other leg type the planner reports (transfers, bike, ...).
    Other,
}

impl LegKind {
    /// Map a Rejseplanen leg type tag to a kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "JNY" => LegKind::Journey,
            "WALK" => LegKind::Walk,
            _ => LegKind::Other,
        }
    }
}

/// One end of a leg: a stop name and the raw scheduled time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegStop {
    pub name: String,
    /// Time of day exactly as the planner reported it ("HH:MM" or "HH:MM:SS").
    /// `None` when the planner left it out.
    pub time: Option<String>,
}

impl LegStop {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: Some(time.into()),
        }
    }

    /// A stop the planner gave no time for.
    pub fn untimed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: None,
        }
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }
}

/// A single segment of a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub kind: LegKind,
    pub origin: LegStop,
    pub destination: LegStop,
    /// Line or train name, only present for vehicle legs.
    pub line: Option<String>,
}

impl Leg {
    /// Returns true if this leg rides a vehicle.
    pub fn is_journey(&self) -> bool {
        self.kind == LegKind::Journey
    }
}

/// One trip option from the planner: an ordered list of legs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripCandidate {
    pub legs: Vec<Leg>,
}

impl TripCandidate {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// The first vehicle leg, skipping any leading walks.
    pub fn first_journey_leg(&self) -> Option<&Leg> {
        self.legs.iter().find(|leg| leg.is_journey())
    }
}
