//! Wire types of the secret store API

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned secret identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretId(pub i64);

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SecretId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A secret record as returned by `GET /api/secrets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRecord {
    /// Secret ID
    pub id: SecretId,
    /// Owning user ID (display only)
    pub user_id: i64,
    /// Raw payload: a JSON object string or an opaque string
    pub content: String,
}

/// Structured secret content sent on update.
///
/// Empty fields are omitted from the serialized object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretContent {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl SecretContent {
    /// Whether no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.user_name.is_empty() && self.password.is_empty()
    }
}

/// Body of `PUT /api/secrets/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecretRequest {
    /// Email of the logged-in user
    pub email: String,
    /// Encryption password, forwarded as an opaque credential
    pub encrypt_password: String,
    /// New content
    pub content: SecretContent,
}
