//! Board configuration.
//!
//! Settings come from an optional YAML file; the API key may also come from
//! the `REJSEPLANEN_API_KEY` environment variable. Everything is validated
//! before the server starts, so a missing credential stops the program
//! before any request is made.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

use chrono::Duration;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::{RouteBook, RouteConfig};
use crate::rejseplanen::{DEFAULT_BASE_URL, MAX_RESULTS, TripClientConfig};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "REJSEPLANEN_API_KEY";

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "BOARD_CONFIG";

/// Config file used when `BOARD_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "board.yaml";

/// Errors while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REJSEPLANEN_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// The config file as written on disk. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Secret store entry for the API key; takes precedence over the
    /// environment.
    pub api_key: Option<String>,
    pub walk_minutes: Option<i64>,
    pub num_results: Option<u8>,
    pub timezone: Option<String>,
    pub bind: Option<SocketAddr>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub routes: Option<Vec<RouteConfig>>,
}

impl FileConfig {
    /// Read a config file. A missing file yields `None`.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Read(format!("{}: {e}", path.display()))),
        };

        Self::parse(&content).map(Some)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// A bearer token that never shows up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Validated settings for the board.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    /// Minutes it takes to walk to the departure station.
    pub walk_minutes: i64,
    /// Trips requested per render (1-5).
    pub num_results: u8,
    /// Timezone of the transit network's timetable.
    pub timezone: Tz,
    pub bind: SocketAddr,
    pub base_url: String,
    pub timeout_secs: u64,
    pub routes: RouteBook,
}

impl Settings {
    pub const DEFAULT_WALK_MINUTES: i64 = 12;
    /// Longest walk the board accepts: one day.
    pub const MAX_WALK_MINUTES: i64 = 24 * 60;
    pub const DEFAULT_NUM_RESULTS: u8 = 5;
    pub const DEFAULT_TIMEZONE: &'static str = "Europe/Copenhagen";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Load settings from the file named by `BOARD_CONFIG` (or
    /// `board.yaml`) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = match FileConfig::load(&path)? {
            Some(file) => {
                tracing::info!(path = %path, "loaded config file");
                file
            }
            None => {
                tracing::warn!(path = %path, "config file not found, using built-in routes");
                FileConfig::default()
            }
        };

        Self::resolve(file, std::env::var(API_KEY_ENV).ok())
    }

    /// Combine a config file with the environment's API key and validate.
    ///
    /// The file's `api_key` wins over `env_key`; empty keys count as missing.
    pub fn resolve(file: FileConfig, env_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = file
            .api_key
            .filter(|k| !k.trim().is_empty())
            .or(env_key.filter(|k| !k.trim().is_empty()))
            .map(|k| ApiKey(k.trim().to_string()))
            .ok_or(ConfigError::MissingApiKey)?;

        let walk_minutes = file.walk_minutes.unwrap_or(Self::DEFAULT_WALK_MINUTES);
        if !(0..=Self::MAX_WALK_MINUTES).contains(&walk_minutes) {
            return Err(ConfigError::Invalid(format!(
                "walk_minutes must be 0-{}",
                Self::MAX_WALK_MINUTES
            )));
        }

        let num_results = file.num_results.unwrap_or(Self::DEFAULT_NUM_RESULTS);
        if num_results == 0 || num_results > MAX_RESULTS {
            return Err(ConfigError::Invalid(format!(
                "num_results must be 1-{MAX_RESULTS}"
            )));
        }

        let tz_name = file
            .timezone
            .unwrap_or_else(|| Self::DEFAULT_TIMEZONE.to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown timezone: {tz_name}")))?;

        let routes = match file.routes {
            Some(routes) => {
                RouteBook::new(routes).map_err(|e| ConfigError::Invalid(e.to_string()))?
            }
            None => RouteBook::default(),
        };

        Ok(Self {
            api_key,
            walk_minutes,
            num_results,
            timezone,
            bind: file
                .bind
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000))),
            base_url: file.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: file.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS),
            routes,
        })
    }

    /// Walking time as a Duration.
    pub fn walk(&self) -> Duration {
        Duration::try_minutes(self.walk_minutes.clamp(0, Self::MAX_WALK_MINUTES))
            .unwrap_or_else(Duration::zero)
    }

    /// Configuration for the trip client.
    pub fn client_config(&self) -> TripClientConfig {
        TripClientConfig::new(self.api_key.expose())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Origin, StationId};
    use std::io::Write;

    fn key() -> Option<String> {
        Some("env-key".to_string())
    }

    #[test]
    fn defaults_without_file() {
        let settings = Settings::resolve(FileConfig::default(), key()).unwrap();

        assert_eq!(settings.api_key.expose(), "env-key");
        assert_eq!(settings.walk_minutes, 12);
        assert_eq!(settings.walk(), Duration::minutes(12));
        assert_eq!(settings.num_results, 5);
        assert_eq!(settings.timezone, chrono_tz::Europe::Copenhagen);
        assert_eq!(settings.bind, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.routes, RouteBook::default());
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Settings::resolve(FileConfig::default(), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "REJSEPLANEN_API_KEY environment variable not set"
        );
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let file = FileConfig {
            api_key: Some("  ".to_string()),
            ..FileConfig::default()
        };
        let err = Settings::resolve(file, Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn file_key_takes_precedence() {
        let file = FileConfig {
            api_key: Some("secret-key".to_string()),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(file, key()).unwrap();
        assert_eq!(settings.api_key.expose(), "secret-key");
    }

    #[test]
    fn api_key_is_redacted() {
        let settings = Settings::resolve(FileConfig::default(), key()).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("env-key"));
    }

    #[test]
    fn rejects_bad_values() {
        let file = FileConfig {
            walk_minutes: Some(-1),
            ..FileConfig::default()
        };
        assert!(matches!(
            Settings::resolve(file, key()),
            Err(ConfigError::Invalid(_))
        ));

        for minutes in [Settings::MAX_WALK_MINUTES + 1, 1_000_000_000_000_000, i64::MAX] {
            let file = FileConfig {
                walk_minutes: Some(minutes),
                ..FileConfig::default()
            };
            assert!(matches!(
                Settings::resolve(file, key()),
                Err(ConfigError::Invalid(_))
            ));
        }

        let file = FileConfig {
            num_results: Some(9),
            ..FileConfig::default()
        };
        assert!(matches!(
            Settings::resolve(file, key()),
            Err(ConfigError::Invalid(_))
        ));

        let file = FileConfig {
            timezone: Some("Mars/Olympus_Mons".to_string()),
            ..FileConfig::default()
        };
        assert!(matches!(
            Settings::resolve(file, key()),
            Err(ConfigError::Invalid(_))
        ));

        let file = FileConfig {
            routes: Some(vec![]),
            ..FileConfig::default()
        };
        assert!(matches!(
            Settings::resolve(file, key()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn parse_full_file() {
        let yaml = r#"
walk_minutes: 8
num_results: 3
timezone: Europe/Copenhagen
bind: 0.0.0.0:8080
timeout_secs: 10
routes:
  - key: office
    label: Office
    name: Office, Vesterbrogade
    origin: { station: "8600626" }
    destination: "8600655"
    walk_to: København H
  - key: park
    label: Park
    name: Fælledparken
    origin: { lat: 55.6997, lon: 12.5696 }
    destination: "8600646"
    walk_to: Trianglen
"#;
        let file = FileConfig::parse(yaml).unwrap();
        let settings = Settings::resolve(file, key()).unwrap();

        assert_eq!(settings.walk_minutes, 8);
        assert_eq!(settings.num_results, 3);
        assert_eq!(settings.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(settings.timeout_secs, 10);
        assert_eq!(settings.routes.len(), 2);
        assert_eq!(settings.routes.default_route().key, "office");

        let park = settings.routes.get("park").unwrap();
        assert_eq!(
            park.origin,
            Origin::Coordinate {
                lat: 55.6997,
                lon: 12.5696
            }
        );
        assert_eq!(park.destination, StationId::parse("8600646").unwrap());
    }

    #[test]
    fn shipped_config_matches_builtin_routes() {
        let file = FileConfig::parse(include_str!("../board.yaml")).unwrap();
        let settings = Settings::resolve(file, key()).unwrap();

        assert_eq!(settings.routes, RouteBook::default());
        assert_eq!(settings.walk_minutes, Settings::DEFAULT_WALK_MINUTES);
    }

    #[test]
    fn longest_walk_is_accepted() {
        let file = FileConfig {
            walk_minutes: Some(Settings::MAX_WALK_MINUTES),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(file, key()).unwrap();
        assert_eq!(settings.walk(), Duration::days(1));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(matches!(
            FileConfig::parse("walk_minuets: 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_station() {
        let yaml = r#"
routes:
  - key: a
    label: A
    name: A
    origin: { station: "" }
    destination: "8600646"
    walk_to: Somewhere
"#;
        assert!(FileConfig::parse(yaml).is_err());
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FileConfig::load(dir.path().join("nope.yaml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "walk_minutes: 15\napi_key: from-file").unwrap();

        let loaded = FileConfig::load(file.path()).unwrap().unwrap();
        assert_eq!(loaded.walk_minutes, Some(15));

        let settings = Settings::resolve(loaded, None).unwrap();
        assert_eq!(settings.api_key.expose(), "from-file");
    }

    #[test]
    fn client_config_carries_settings() {
        let file = FileConfig {
            base_url: Some("http://localhost:9999/trip".to_string()),
            timeout_secs: Some(3),
            ..FileConfig::default()
        };
        let config = Settings::resolve(file, key()).unwrap().client_config();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "http://localhost:9999/trip");
        assert_eq!(config.timeout_secs, 3);
    }
}
