//! Configuration Management
//!
//! Client configuration, supplied once at construction. The command-line
//! front end can also read it from a JSON file in the user config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default lifetime of a cached response (1,000,000 seconds, about 11.5 days)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(1_000_000);

/// Default page size for list requests
pub const DEFAULT_LIMIT: u32 = 100_000;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    /// URL scheme, without `://`
    pub protocol: String,
    /// Host name, optionally with a port
    pub host_name: String,
    /// API version prefix, e.g. `/api/v2/`
    pub version_path: String,
    /// Per-request timeout handed to the HTTP client
    #[serde(rename = "timeout_ms", with = "duration_ms")]
    pub timeout: Duration,
    /// Whether responses are read from and written to the cache
    pub cache: bool,
    /// Lifetime of a cached response
    #[serde(rename = "cache_ttl_ms", with = "duration_ms")]
    pub cache_ttl: Duration,
    /// Default list offset
    pub offset: u32,
    /// Default list page size
    pub limit: u32,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            host_name: "pokeapi.co".to_string(),
            version_path: "/api/v2/".to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache: true,
            cache_ttl: DEFAULT_CACHE_TTL,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PokedexConfig {
    /// Root URL every resource path is joined onto, always ending in `/`
    pub fn base_url(&self) -> String {
        let trimmed = self.version_path.trim_matches('/');
        let version_path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        };

        format!("{}://{}{}", self.protocol, self.host_name, version_path)
    }

    /// Point the client at a different origin, e.g. a local mirror
    ///
    /// Accepts `http://host:port` or a bare `host:port`.
    pub fn with_origin(mut self, origin: &str) -> Self {
        match origin.split_once("://") {
            Some((scheme, host)) => {
                self.protocol = scheme.to_string();
                self.host_name = host.trim_end_matches('/').to_string();
            }
            None => self.host_name = origin.trim_end_matches('/').to_string(),
        }
        self
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pokedex").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Durations stored as whole milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_base_url() {
        let config = PokedexConfig::default();
        assert_eq!(config.base_url(), "https://pokeapi.co/api/v2/");
    }

    #[test]
    fn test_base_url_normalises_version_path() {
        let config = PokedexConfig {
            version_path: "api/v2".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://pokeapi.co/api/v2/");

        let config = PokedexConfig {
            version_path: String::new(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://pokeapi.co/");
    }

    #[test]
    fn test_with_origin_splits_scheme() {
        let config = PokedexConfig::default().with_origin("http://127.0.0.1:8080/");
        assert_eq!(config.protocol, "http");
        assert_eq!(config.host_name, "127.0.0.1:8080");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/api/v2/");

        let config = PokedexConfig::default().with_origin("localhost:9000");
        assert_eq!(config.protocol, "https");
        assert_eq!(config.host_name, "localhost:9000");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"limit": 20, "cache": false, "timeout_ms": 1500}}"#).unwrap();

        let config = PokedexConfig::load_from(file.path());
        assert_eq!(config.limit, 20);
        assert!(!config.cache);
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.offset, 0);
        assert_eq!(config.host_name, "pokeapi.co");
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert_eq!(PokedexConfig::load_from(file.path()), PokedexConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/pokedex/config.json");
        assert_eq!(PokedexConfig::load_from(path), PokedexConfig::default());
    }

    #[test]
    fn test_durations_serialise_as_millis() {
        let json = serde_json::to_value(PokedexConfig::default()).unwrap();
        assert_eq!(json["timeout_ms"], 20_000);
        assert_eq!(json["cache_ttl_ms"], 1_000_000_000u64);
    }

    #[test]
    fn test_oversized_duration_saturates() {
        let config = PokedexConfig {
            cache_ttl: Duration::MAX,
            ..Default::default()
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["cache_ttl_ms"], u64::MAX);
    }
}
