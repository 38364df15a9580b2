// Client configuration
//
// Configuration for the API client, loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use siteline_core::{Origins, Stage};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Timeout for ordinary JSON requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for multipart uploads
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub origins: Origins,
    pub stage: Stage,
    pub timeout: Duration,
    pub upload_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origins: Origins::default(),
            stage: Stage::default(),
            timeout: DEFAULT_TIMEOUT,
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Point every origin at one backend. Handy for tests and explicit overrides.
    pub fn for_origin(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origins: Origins {
                development: origin.clone(),
                production: origin.clone(),
                server_override: Some(origin),
            },
            ..Default::default()
        }
    }

    pub fn with_timeouts(mut self, timeout: Duration, upload_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.upload_timeout = upload_timeout;
        self
    }

    /// Create configuration from environment variables, reading `.env` first if present
    ///
    /// Environment variables:
    /// - `SITELINE_STAGE`: `dev` or `prod` (default: prod)
    /// - `SITELINE_DEV_ORIGIN`: development backend origin (default: http://localhost:5000)
    /// - `SITELINE_PROD_ORIGIN`: production backend origin
    /// - `SITELINE_SERVER_ORIGIN`: origin used on the server, overriding the stage
    /// - `SITELINE_TIMEOUT_SECS`: JSON request timeout (default: 30)
    /// - `SITELINE_UPLOAD_TIMEOUT_SECS`: multipart request timeout (default: 45)
    pub fn from_env() -> Result<Self> {
        log_dotenv(dotenvy::dotenv());
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Origins::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stage = match non_empty("SITELINE_STAGE") {
            Some(raw) => raw
                .parse::<Stage>()
                .map_err(|e| ClientError::config(format!("SITELINE_STAGE: {}", e)))?,
            None => Stage::default(),
        };

        let origins = Origins {
            development: non_empty("SITELINE_DEV_ORIGIN").unwrap_or(defaults.development),
            production: non_empty("SITELINE_PROD_ORIGIN").unwrap_or(defaults.production),
            server_override: non_empty("SITELINE_SERVER_ORIGIN"),
        };

        let timeout = parse_secs(non_empty("SITELINE_TIMEOUT_SECS"), "SITELINE_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT);
        let upload_timeout = parse_secs(
            non_empty("SITELINE_UPLOAD_TIMEOUT_SECS"),
            "SITELINE_UPLOAD_TIMEOUT_SECS",
        )?
        .unwrap_or(DEFAULT_UPLOAD_TIMEOUT);

        Ok(Self {
            origins,
            stage,
            timeout,
            upload_timeout,
        })
    }
}

/// Log where `.env` was loaded from. A missing file is not worth reporting.
fn log_dotenv(result: std::result::Result<PathBuf, dotenvy::Error>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded environment from .env");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable .env file");
            None
        }
    }
}

fn parse_secs(raw: Option<String>, key: &str) -> Result<Option<Duration>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ClientError::config(format!("{} must be greater than zero", key))),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        Err(_) => Err(ClientError::config(format!(
            "{} must be a whole number of seconds, got '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.upload_timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SITELINE_STAGE", "development"),
            ("SITELINE_DEV_ORIGIN", "http://localhost:4000"),
            ("SITELINE_PROD_ORIGIN", "https://api.example.com"),
            ("SITELINE_SERVER_ORIGIN", "http://backend:4000"),
            ("SITELINE_TIMEOUT_SECS", "10"),
            ("SITELINE_UPLOAD_TIMEOUT_SECS", "90"),
        ]))
        .unwrap();

        assert_eq!(config.stage, Stage::Dev);
        assert_eq!(config.origins.development, "http://localhost:4000");
        assert_eq!(config.origins.production, "https://api.example.com");
        assert_eq!(config.origins.server_override.as_deref(), Some("http://backend:4000"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.upload_timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("SITELINE_SERVER_ORIGIN", "  ")])).unwrap();
        assert!(config.origins.server_override.is_none());
    }

    #[test]
    fn test_dotenv_outcomes() {
        let dir = std::env::temp_dir();
        let load = |name: &str| {
            let path = dir.join(name);
            log_dotenv(dotenvy::from_path(&path).map(|()| path.clone()))
        };

        assert!(load(&format!("siteline-missing-{}.env", std::process::id())).is_none());

        let good = format!("siteline-good-{}.env", std::process::id());
        std::fs::write(dir.join(&good), "SITELINE_DOTENV_TEST_GOOD=1\n").unwrap();
        assert_eq!(load(&good), Some(dir.join(&good)));

        let bad = format!("siteline-bad-{}.env", std::process::id());
        std::fs::write(dir.join(&bad), "SITELINE_DOTENV_TEST_BAD='unterminated\n").unwrap();
        assert!(load(&bad).is_none());

        std::fs::remove_file(dir.join(&good)).unwrap();
        std::fs::remove_file(dir.join(&bad)).unwrap();
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = ClientConfig::from_lookup(lookup(&[("SITELINE_STAGE", "staging")])).unwrap_err();
        assert!(err.to_string().contains("SITELINE_STAGE"));

        let err =
            ClientConfig::from_lookup(lookup(&[("SITELINE_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("whole number"));

        assert!(
            ClientConfig::from_lookup(lookup(&[("SITELINE_UPLOAD_TIMEOUT_SECS", "0")])).is_err()
        );
    }
}
