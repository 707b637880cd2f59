//! Backend connection settings.
//!
//! Settings come from the environment:
//!
//! - `TE_CANVAS_URL` (required): base URL of the backend
//! - `TE_CANVAS_API_REVISION`: `current` (default) or `legacy`
//! - `TE_CANVAS_FETCH_LIMIT`: number of TE groups to list (default 100)

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tecanvas_core::TecanvasError;
use tecanvas_core::error::Result;

pub const URL_ENV: &str = "TE_CANVAS_URL";
pub const API_REVISION_ENV: &str = "TE_CANVAS_API_REVISION";
pub const FETCH_LIMIT_ENV: &str = "TE_CANVAS_FETCH_LIMIT";

pub const DEFAULT_FETCH_LIMIT: u32 = 100;

/// Which generation of the backend API to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiRevision {
    /// `/api/timeedit/objects`, `/api/timeedit/types`, `/api/canvas/courses`
    #[default]
    Current,
    /// `/api/timeedit`, `/api/canvas`; no group types
    Legacy,
}

impl FromStr for ApiRevision {
    type Err = TecanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "legacy" => Ok(Self::Legacy),
            other => Err(TecanvasError::config(format!(
                "unknown API revision '{}' (expected 'current' or 'legacy')",
                other
            ))),
        }
    }
}

impl fmt::Display for ApiRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// Settings for [`crate::HttpBackendClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    pub revision: ApiRevision,
    pub fetch_limit: u32,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Creates a config for `base_url` with default settings.
    ///
    /// A trailing `/` is dropped so paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            revision: ApiRevision::default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            timeout: None,
        }
    }

    /// Loads the config from environment variables.
    pub fn try_from_env() -> Result<Self> {
        let base_url = env::var(URL_ENV)
            .map_err(|_| TecanvasError::config(format!("{} is not set", URL_ENV)))?;
        if base_url.trim().is_empty() {
            return Err(TecanvasError::config(format!("{} is empty", URL_ENV)));
        }

        Self::new(base_url).with_env_overrides()
    }

    /// Applies `TE_CANVAS_API_REVISION` and `TE_CANVAS_FETCH_LIMIT` when set.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(revision) = env::var(API_REVISION_ENV) {
            self.revision = revision.parse()?;
        }

        if let Ok(limit) = env::var(FETCH_LIMIT_ENV) {
            self.fetch_limit = parse_fetch_limit(&limit)?;
        }

        Ok(self)
    }

    pub fn with_revision(mut self, revision: ApiRevision) -> Self {
        self.revision = revision;
        self
    }

    pub fn with_fetch_limit(mut self, fetch_limit: u32) -> Self {
        self.fetch_limit = fetch_limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_fetch_limit(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(TecanvasError::config(format!(
            "{} must be a positive integer, got '{}'",
            FETCH_LIMIT_ENV, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = BackendConfig::new("http://backend:5000/");
        assert_eq!(config.base_url(), "http://backend:5000");
        assert_eq!(
            config.url("/api/connection"),
            "http://backend:5000/api/connection"
        );
    }

    #[test]
    fn test_defaults() {
        let config = BackendConfig::new("http://backend");
        assert_eq!(config.revision, ApiRevision::Current);
        assert_eq!(config.fetch_limit, 100);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_builders() {
        let config = BackendConfig::new("http://backend")
            .with_revision(ApiRevision::Legacy)
            .with_fetch_limit(25)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.revision, ApiRevision::Legacy);
        assert_eq!(config.fetch_limit, 25);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_parse_fetch_limit() {
        assert_eq!(parse_fetch_limit("250").unwrap(), 250);
        assert!(parse_fetch_limit("0").unwrap_err().is_config());
        assert!(parse_fetch_limit("many").unwrap_err().is_config());
    }

    #[test]
    fn test_parse_api_revision() {
        assert_eq!("current".parse::<ApiRevision>().unwrap(), ApiRevision::Current);
        assert_eq!("Legacy".parse::<ApiRevision>().unwrap(), ApiRevision::Legacy);
        assert!("v3".parse::<ApiRevision>().unwrap_err().is_config());
    }
}
