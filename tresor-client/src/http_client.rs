//! Generic HTTP client tools
//!
//! One request flow for every endpoint: send, log, read the body, and turn
//! non-success statuses into [`ClientError::Http`].

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::{describe_body, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text of a 2xx answer
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logs)
    /// * `url` - request URL (for logs)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a success response
    /// * `Err(ClientError::Http)` - non-2xx status, message from the body or the status line
    /// * `Err(ClientError::NetworkError | ClientError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            // A body that cannot be read counts as empty
            let body = response.text().await.unwrap_or_default();
            log::debug!("Error Body: {}", truncate_for_log(&body));
            return Err(ClientError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        // Success bodies carry secret payloads in plain text
        log::debug!("Response Body: {}", describe_body(&response_text));

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", describe_body(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
