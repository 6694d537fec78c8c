use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    MAX_UPSTREAM_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Configuration for the external backend the proxy routes forward to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Sent as `Authorization: Bearer` on proxied requests when set.
    /// Never logged.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_UPSTREAM_BASE_URL),
            api_token: None,
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::upstream("upstream.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::upstream(format!(
                "upstream.base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_UPSTREAM_TIMEOUT_SECS {
            return Err(ConfigError::upstream(format!(
                "upstream.timeout_secs must be 1-{}, got {}",
                MAX_UPSTREAM_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
