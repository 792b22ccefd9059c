//! REST implementation of [`SecretApi`](crate::SecretApi)

mod api;
mod http;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Secrets collection path
pub(crate) const SECRETS_PATH: &str = "/api/secrets";

/// Secret store backed by the REST API
pub struct HttpSecretApi {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
}

impl HttpSecretApi {
    /// Create a client with the timeouts from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    /// Base address this client talks to.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }
}
