//! Client configuration.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::client::{ClientOptions, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use crate::error::ChargifyError;

/// Secrets files tried, in order, by [`ChargifyConfig::from_env`].
const SECRET_PATHS: [&str; 2] = [".secrets/chargify.json", "../.secrets/chargify.json"];

/// Connection settings for a Chargify site.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ChargifyConfig {
    /// Site subdomain (`acme` for `https://acme.chargify.com`).
    #[serde(default)]
    pub subdomain: Option<String>,

    /// API key.
    pub api_key: String,

    /// Explicit base URL; takes precedence over `subdomain`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Connect timeout in milliseconds (default: 5000).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl fmt::Debug for ChargifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargifyConfig")
            .field("subdomain", &self.subdomain)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .finish()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_millis() as u64
}

#[allow(clippy::cast_possible_truncation)]
fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT.as_millis() as u64
}

impl ChargifyConfig {
    /// Configuration for a subdomain with default timeouts.
    #[must_use]
    pub fn new(subdomain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            subdomain: Some(subdomain.into()),
            api_key: api_key.into(),
            base_url: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }

    /// Load configuration from a secrets file or environment variables.
    ///
    /// `.secrets/chargify.json` and `../.secrets/chargify.json` are tried
    /// first. Otherwise `CHARGIFY_SUBDOMAIN`, `CHARGIFY_API_KEY`,
    /// `CHARGIFY_BASE_URL`, `CHARGIFY_CONNECT_TIMEOUT_MS` and
    /// `CHARGIFY_READ_TIMEOUT_MS` are read.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::Configuration`] if no API key is available, or
    /// if neither a subdomain nor a base URL is set.
    pub fn from_env() -> Result<Self, ChargifyError> {
        for path in &SECRET_PATHS {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        tracing::info!(path = %path, "Loaded Chargify secrets from file");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path, error = %e, "Ignoring unreadable Chargify secrets file");
                    }
                }
            }
        }

        tracing::debug!("Chargify secrets file not found, using environment variables");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::Configuration`] if the file cannot be read or
    /// parsed, or if the loaded values are incomplete.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChargifyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChargifyError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            ChargifyError::Configuration(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()
    }

    /// Build configuration from a variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChargifyError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("CHARGIFY_API_KEY")
            .ok_or_else(|| ChargifyError::Configuration("CHARGIFY_API_KEY is not set".into()))?;

        let config = Self {
            subdomain: non_empty("CHARGIFY_SUBDOMAIN"),
            api_key,
            base_url: non_empty("CHARGIFY_BASE_URL"),
            connect_timeout_ms: parse_millis(
                "CHARGIFY_CONNECT_TIMEOUT_MS",
                non_empty("CHARGIFY_CONNECT_TIMEOUT_MS"),
                default_connect_timeout_ms(),
            )?,
            read_timeout_ms: parse_millis(
                "CHARGIFY_READ_TIMEOUT_MS",
                non_empty("CHARGIFY_READ_TIMEOUT_MS"),
                default_read_timeout_ms(),
            )?,
        };
        config.validate()
    }

    fn validate(self) -> Result<Self, ChargifyError> {
        if self.api_key.trim().is_empty() {
            return Err(ChargifyError::Configuration("API key is empty".into()));
        }
        self.base_url()?;
        Ok(self)
    }

    /// The base URL requests are sent to.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::Configuration`] if neither a base URL nor a
    /// subdomain is set.
    pub fn base_url(&self) -> Result<String, ChargifyError> {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.trim_end_matches('/').to_string());
        }
        match self.subdomain.as_deref().map(str::trim) {
            Some(subdomain) if !subdomain.is_empty() => {
                Ok(format!("https://{subdomain}.chargify.com"))
            }
            _ => Err(ChargifyError::Configuration(
                "either a subdomain or a base URL is required".into(),
            )),
        }
    }

    /// HTTP options derived from the configured timeouts.
    #[must_use]
    pub fn options(&self) -> ClientOptions {
        ClientOptions {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            read_timeout: Duration::from_millis(self.read_timeout_ms),
        }
    }
}

fn parse_millis(name: &str, value: Option<String>, default: u64) -> Result<u64, ChargifyError> {
    value.map_or(Ok(default), |v| {
        v.trim()
            .parse()
            .map_err(|_| ChargifyError::Configuration(format!("{name} must be a number, got {v:?}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn env_defaults() {
        let config = ChargifyConfig::from_lookup(lookup(&[
            ("CHARGIFY_SUBDOMAIN", "acme"),
            ("CHARGIFY_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.read_timeout_ms, 30_000);
        assert_eq!(config.base_url().unwrap(), "https://acme.chargify.com");
        assert_eq!(config.options(), ClientOptions::default());
    }

    #[test]
    fn env_overrides() {
        let config = ChargifyConfig::from_lookup(lookup(&[
            ("CHARGIFY_API_KEY", "key"),
            ("CHARGIFY_BASE_URL", "http://localhost:4010/"),
            ("CHARGIFY_CONNECT_TIMEOUT_MS", "250"),
            ("CHARGIFY_READ_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.base_url().unwrap(), "http://localhost:4010");
        assert_eq!(config.options().connect_timeout, Duration::from_millis(250));
        assert_eq!(config.options().read_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn env_requires_key_and_target() {
        let err = ChargifyConfig::from_lookup(lookup(&[("CHARGIFY_SUBDOMAIN", "acme")]))
            .unwrap_err();
        assert!(matches!(err, ChargifyError::Configuration(_)));

        let err =
            ChargifyConfig::from_lookup(lookup(&[("CHARGIFY_API_KEY", "key")])).unwrap_err();
        assert!(matches!(err, ChargifyError::Configuration(_)));

        let err = ChargifyConfig::from_lookup(lookup(&[
            ("CHARGIFY_SUBDOMAIN", "acme"),
            ("CHARGIFY_API_KEY", "key"),
            ("CHARGIFY_READ_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CHARGIFY_READ_TIMEOUT_MS"));
    }

    #[test]
    fn loads_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"subdomain": "acme", "api_key": "key", "read_timeout_ms": 10000}}"#
        )
        .unwrap();

        let config = ChargifyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.subdomain.as_deref(), Some("acme"));
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.read_timeout_ms, 10_000);
    }

    #[test]
    fn rejects_incomplete_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chargify.json");
        std::fs::write(&path, r#"{"api_key": "key"}"#).unwrap();
        assert!(ChargifyConfig::from_file(&path).is_err());

        std::fs::write(&path, "not json").unwrap();
        assert!(ChargifyConfig::from_file(&path).is_err());

        assert!(ChargifyConfig::from_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn debug_hides_api_key() {
        let config = ChargifyConfig::new("acme", "super-secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("acme"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super-secret-key"));
    }
}
