//! Route definitions: where the user walks from and which train they take.

use std::fmt;

use serde::Deserialize;

/// A Rejseplanen station identifier (e.g. "8600646" for Nørreport).
///
/// Identifiers are opaque strings; the only requirement is that they are
/// non-empty once surrounding whitespace is removed.
#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct StationId(String);

/// Error returned when a station identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("station identifier must not be empty")]
pub struct InvalidStationId;

impl StationId {
    /// Parse a station identifier, trimming whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a trip starts: a known station or a raw coordinate pair.
///
/// In YAML this is written either as `{ station: "8600646" }` or
/// `{ lat: 55.683, lon: 12.571 }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Origin {
    Station { station: StationId },
    Coordinate { lat: f64, lon: f64 },
}

impl Origin {
    pub fn station(id: StationId) -> Self {
        Origin::Station { station: id }
    }
}

/// A fixed route the board can show.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteConfig {
    /// Short identifier used in URLs (`?route=kjeld`).
    pub key: String,
    /// Text on the toggle button.
    pub label: String,
    /// Heading shown above the result, usually the starting address.
    pub name: String,
    pub origin: Origin,
    pub destination: StationId,
    /// The station the user walks to, shown in captions.
    pub walk_to: String,
}

/// Error returned when a set of routes is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteBookError {
    #[error("at least one route must be configured")]
    Empty,

    #[error("route key must not be empty")]
    EmptyKey,

    #[error("duplicate route key: {0}")]
    DuplicateKey(String),
}

/// The configured routes, in display order.
///
/// Always holds at least one route and route keys are unique, so there is
/// always a well-defined default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBook {
    routes: Vec<RouteConfig>,
}

impl RouteBook {
    pub fn new(routes: Vec<RouteConfig>) -> Result<Self, RouteBookError> {
        if routes.is_empty() {
            return Err(RouteBookError::Empty);
        }

        for (i, route) in routes.iter().enumerate() {
            if route.key.trim().is_empty() {
                return Err(RouteBookError::EmptyKey);
            }
            if routes[..i].iter().any(|r| r.key == route.key) {
                return Err(RouteBookError::DuplicateKey(route.key.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// The route selected when nothing else has been chosen.
    pub fn default_route(&self) -> &RouteConfig {
        &self.routes[0]
    }

    pub fn get(&self, key: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|r| r.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteConfig> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Nørreport St.
pub const NORREPORT_ID: &str = "8600646";

/// Hellerup St.
pub const HELLERUP_ID: &str = "8600655";

impl Default for RouteBook {
    /// The two commuting routes between Kjeld Langes Gade and Gersonsvej.
    fn default() -> Self {
        let norreport = StationId(NORREPORT_ID.to_string());
        let hellerup = StationId(HELLERUP_ID.to_string());

        Self {
            routes: vec![
                RouteConfig {
                    key: "kjeld".to_string(),
                    label: "Kjeld Langes Gade".to_string(),
                    name: "Kjeld Langes Gade 1".to_string(),
                    origin: Origin::station(norreport.clone()),
                    destination: hellerup.clone(),
                    walk_to: "Nørreport St.".to_string(),
                },
                RouteConfig {
                    key: "gersonsvej".to_string(),
                    label: "Gersonsvej".to_string(),
                    name: "Gersonsvej 59".to_string(),
                    origin: Origin::station(hellerup),
                    destination: norreport,
                    walk_to: "Hellerup St.".to_string(),
                },
            ],
        }
    }
}
