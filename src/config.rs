// ⚙️ Configuration - Financing API location + timeouts
// Explicit value threaded into the client; no module-level base URL

use crate::error::{GalaxyError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_URL: &str = "GALAXY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "GALAXY_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the financing API, without trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        ApiConfig::default().with_base_url(base_url)
    }

    /// Builder pattern: replace the base URL
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Builder pattern: replace the timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(GalaxyError::invalid("timeout_secs", "must be greater than zero"));
        }
        self.timeout_secs = secs;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for an endpoint path such as `/apr`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GalaxyError::invalid("base_url", "is required"));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(GalaxyError::invalid(
            "base_url",
            format!("'{}' must start with http:// or https://", trimmed),
        ));
    }
    Ok(trimmed.to_string())
}
