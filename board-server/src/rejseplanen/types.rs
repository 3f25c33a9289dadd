//! Rejseplanen trip API response DTOs.
//!
//! These mirror the JSON rendering of the `trip` service. Only the fields the
//! board needs are declared; everything else in the response is ignored.
//! Below the `Trip` list every field is optional, so one odd leg never fails
//! the whole response.

use serde::Deserialize;

/// Top-level response of the `trip` service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripResponse {
    /// Trip options, earliest first. Absent when nothing was found.
    #[serde(rename = "Trip", default)]
    pub trips: Vec<TripDto>,
}

/// A single trip option.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    #[serde(rename = "LegList", default)]
    pub leg_list: LegListDto,
}

/// Wrapper around the legs of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegListDto {
    #[serde(rename = "Leg", default)]
    pub legs: OneOrMany<LegDto>,
}

/// Some renderings collapse single-element lists into a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }
}

/// One leg of a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Leg type: "JNY" for a vehicle, "WALK" for walking, others possible.
    #[serde(rename = "type", default)]
    pub leg_type: String,

    /// Line or train name (e.g. "Re 4512", "Bx"). Journey legs only.
    pub name: Option<String>,

    #[serde(rename = "Origin", default)]
    pub origin: StopDto,

    #[serde(rename = "Destination", default)]
    pub destination: StopDto,
}

/// A stop at either end of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopDto {
    #[serde(default)]
    pub name: String,

    /// Scheduled time of day, "HH:MM" or "HH:MM:SS".
    pub time: Option<String>,
}
