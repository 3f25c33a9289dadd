//! Rejseplanen trip planner client.
//!
//! This module provides an HTTP client for the Danish national journey
//! planner's `trip` service.
//!
//! Key characteristics of the service:
//! - Authentication is a bearer token
//! - Leg times are bare "HH:MM" or "HH:MM:SS" strings
//! - Trips come back earliest first; an empty search has no `Trip` key at all

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, MAX_RESULTS, TripClient, TripClientConfig, TripQuery};
pub use convert::convert_trip_response;
pub use error::RejseplanenError;
pub use types::{LegDto, LegListDto, OneOrMany, StopDto, TripDto, TripResponse};
