//! Rejseplanen trip API HTTP client.
//!
//! One request per call: no retries, no caching. Authentication is a static
//! bearer token attached to every request.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::{Origin, StationId, TripCandidate};

use super::convert::convert_trip_response;
use super::error::RejseplanenError;
use super::types::TripResponse;

/// Default endpoint of the trip service.
pub const DEFAULT_BASE_URL: &str = "https://www.rejseplanen.dk/api/trip";

/// Upper bound the trip service accepts for `numF`.
pub const MAX_RESULTS: u8 = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unexpected response body is kept in errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the trip client.
#[derive(Clone)]
pub struct TripClientConfig {
    /// Bearer token for authentication
    pub api_key: String,
    /// Endpoint URL (defaults to production Rejseplanen)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TripClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl std::fmt::Debug for TripClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// A request for trips from an origin to a destination station.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub origin: Origin,
    pub destination: StationId,
    /// Number of trips to ask for (1-5).
    pub num_results: u8,
}

impl TripQuery {
    pub fn new(origin: Origin, destination: StationId, num_results: u8) -> Self {
        Self {
            origin,
            destination,
            num_results,
        }
    }

    /// Build the query string parameters for the trip service.
    pub fn to_params(&self) -> Result<Vec<(&'static str, String)>, RejseplanenError> {
        if self.num_results == 0 || self.num_results > MAX_RESULTS {
            return Err(RejseplanenError::InvalidQuery("number of results must be 1-5"));
        }

        let mut params = Vec::with_capacity(5);

        match &self.origin {
            Origin::Station { station } => params.push(("originId", station.to_string())),
            Origin::Coordinate { lat, lon } => {
                if !lat.is_finite() || !lon.is_finite() {
                    return Err(RejseplanenError::InvalidQuery(
                        "origin coordinates must be finite",
                    ));
                }
                params.push(("originCoordLat", lat.to_string()));
                params.push(("originCoordLong", lon.to_string()));
            }
        }

        params.push(("destId", self.destination.to_string()));
        params.push(("format", "json".to_string()));
        params.push(("numF", self.num_results.to_string()));

        Ok(params)
    }
}

/// Rejseplanen trip API client.
#[derive(Debug, Clone)]
pub struct TripClient {
    http: reqwest::Client,
    base_url: String,
}

impl TripClient {
    /// Create a new trip client with the given configuration.
    pub fn new(config: TripClientConfig) -> Result<Self, RejseplanenError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| RejseplanenError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search for trips.
    ///
    /// Returns the candidates in the order the planner sent them. A response
    /// without a `Trip` list is an empty result, not an error.
    pub async fn search_trips(
        &self,
        query: &TripQuery,
    ) -> Result<Vec<TripCandidate>, RejseplanenError> {
        let response = self.search_trips_raw(query).await?;
        Ok(convert_trip_response(&response))
    }

    /// Search for trips, returning the decoded response (for debugging/testing).
    pub async fn search_trips_raw(
        &self,
        query: &TripQuery,
    ) -> Result<TripResponse, RejseplanenError> {
        let params = query.to_params()?;

        debug!(url = %self.base_url, ?params, "requesting trips");

        let response = self.http.get(&self.base_url).query(&params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RejseplanenError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RejseplanenError::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        let body = response.text().await?;

        let decoded: TripResponse =
            serde_json::from_str(&body).map_err(|e| RejseplanenError::Json {
                message: e.to_string(),
                body: Some(excerpt(&body)),
            })?;

        debug!(trips = decoded.trips.len(), "decoded trip response");

        Ok(decoded)
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
