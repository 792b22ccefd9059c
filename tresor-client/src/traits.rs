use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SecretId, SecretRecord, UpdateSecretRequest};

/// Secret store API Trait
///
/// Implementations:
/// - [`HttpSecretApi`](crate::HttpSecretApi): the REST backend
/// - test mocks in downstream crates
#[async_trait]
pub trait SecretApi: Send + Sync {
    /// List all secrets of a user
    ///
    /// # Arguments
    /// * `email` - email of the logged-in user
    async fn list_for_user(&self, email: &str) -> Result<Vec<SecretRecord>>;

    /// Replace the content of a secret
    ///
    /// # Arguments
    /// * `id` - Secret ID
    /// * `request` - credentials and the new content
    async fn update(&self, id: SecretId, request: &UpdateSecretRequest) -> Result<()>;

    /// Delete a secret
    ///
    /// # Arguments
    /// * `id` - Secret ID
    async fn delete(&self, id: SecretId) -> Result<()>;
}
