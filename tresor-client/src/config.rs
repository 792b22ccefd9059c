//! Client configuration

use std::time::Duration;

/// Environment variable holding the API base address.
pub const API_BASE_ENV: &str = "TRESOR_API_BASE";
/// API base address used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for [`HttpSecretApi`](crate::HttpSecretApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address, without trailing slash (e.g. `http://localhost:8080`)
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    /// Config for the given base address with default timeouts.
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read the base address from `TRESOR_API_BASE`, falling back to
    /// [`DEFAULT_API_BASE`] when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::with_base(base),
            _ => Self::default(),
        }
    }

    /// Full URL for an API path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ClientConfig::default().api_base, "http://localhost:8080");
    }

    #[test]
    fn trailing_slashes_trimmed() {
        let config = ClientConfig::with_base(" https://tresor.example.com// ");
        assert_eq!(config.api_base, "https://tresor.example.com");
        assert_eq!(
            config.url("/api/secrets"),
            "https://tresor.example.com/api/secrets"
        );
    }
}
