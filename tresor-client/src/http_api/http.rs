//! HTTP request methods

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::redact_json;

use super::HttpSecretApi;

/// Request body keys that never reach the logs
const REDACTED_KEYS: &[&str] = &["encryptPassword", "password"];

impl HttpSecretApi {
    /// Execute a GET request and parse the JSON answer
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        let text = HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&text)
    }

    /// Execute a PUT request with a JSON body, ignoring the answer body
    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.config.url(path);
        let body_json = serde_json::to_value(body).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {}", redact_json(&body_json, REDACTED_KEYS));

        let request = self.client.put(&url).json(&body_json);
        HttpUtils::execute_request(request, "PUT", &url).await?;
        Ok(())
    }

    /// Execute a DELETE request, ignoring the answer body
    pub(crate) async fn delete_path(&self, path: &str) -> Result<()> {
        let url = self.config.url(path);
        HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
