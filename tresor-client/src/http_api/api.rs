//! `SecretApi` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::SecretApi;
use crate::types::{SecretId, SecretRecord, UpdateSecretRequest};

use super::{HttpSecretApi, SECRETS_PATH};

#[async_trait]
impl SecretApi for HttpSecretApi {
    async fn list_for_user(&self, email: &str) -> Result<Vec<SecretRecord>> {
        let path = format!("{SECRETS_PATH}?email={}", urlencoding::encode(email));
        // The backend answers `null` for users without secrets
        let records: Option<Vec<SecretRecord>> = self.get_json(&path).await?;
        let records = records.unwrap_or_default();
        log::debug!("Loaded {} secrets for {email}", records.len());
        Ok(records)
    }

    async fn update(&self, id: SecretId, request: &UpdateSecretRequest) -> Result<()> {
        self.put_json(&format!("{SECRETS_PATH}/{id}"), request).await
    }

    async fn delete(&self, id: SecretId) -> Result<()> {
        self.delete_path(&format!("{SECRETS_PATH}/{id}")).await
    }
}
