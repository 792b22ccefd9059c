//! Core service
//!
//! Wraps `tresor-core`'s `SecretLifecycleService` for the synchronous UI loop.
//! Form edits are applied before returning; store calls run as tasks on the
//! runtime and show up in the next snapshot.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;
use tresor_client::HttpSecretApi;
use tresor_core::{
    Confirmed, CoreResult, DraftField, SecretId, SecretLifecycleService, SecretRecord,
    SecretsState, ServiceContext, SessionIdentity,
};

use super::AppConfig;

/// TUI core service
pub struct CoreService {
    secrets: Arc<SecretLifecycleService>,
    runtime: Handle,
}

impl CoreService {
    /// Create the service against the configured secret store
    pub fn new(config: &AppConfig, runtime: Handle) -> Result<Self> {
        let api = Arc::new(HttpSecretApi::new(config.client_config())?);
        log::info!("Secret store at {}", api.api_base());

        let ctx = Arc::new(ServiceContext::new(api));
        let secrets = Arc::new(SecretLifecycleService::new(ctx, config.identity()));
        Ok(Self { secrets, runtime })
    }

    // ========== Reads ==========

    pub fn snapshot(&self) -> SecretsState {
        self.runtime.block_on(self.secrets.snapshot())
    }

    pub fn identity(&self) -> SessionIdentity {
        self.runtime.block_on(self.secrets.identity())
    }

    // ========== Form edits ==========

    pub fn begin_edit(&self, record: &SecretRecord) {
        self.runtime.block_on(self.secrets.begin_edit(record));
    }

    pub fn cancel_edit(&self) {
        self.runtime.block_on(self.secrets.cancel_edit());
    }

    pub fn set_draft_field(&self, field: DraftField, value: String) {
        self.runtime
            .block_on(self.secrets.set_draft_field(field, value));
    }

    pub fn set_encryption_password(&self, value: String) {
        self.runtime
            .block_on(self.secrets.set_encryption_password_draft(value));
    }

    // ========== Store calls ==========

    /// Initial load
    pub fn mount(&self) {
        self.spawn("Initial load", |secrets| async move { secrets.mount().await });
    }

    pub fn reload(&self) {
        self.spawn("Reload", |secrets| async move { secrets.reload().await });
    }

    pub fn save(&self, id: SecretId) {
        self.spawn("Save", move |secrets| async move { secrets.save_edit(id).await });
    }

    /// Delete after the confirmation modal was accepted
    pub fn delete(&self, id: SecretId) {
        self.spawn("Delete", move |secrets| async move {
            secrets.delete_record(id, &Confirmed(true)).await
        });
    }

    /// Run `op` in the background; its outcome lands in the service state
    fn spawn<F, Fut>(&self, label: &'static str, op: F)
    where
        F: FnOnce(Arc<SecretLifecycleService>) -> Fut,
        Fut: Future<Output = CoreResult<()>> + Send + 'static,
    {
        let task = op(Arc::clone(&self.secrets));
        self.runtime.spawn(async move {
            if let Err(e) = task.await {
                log::debug!("{label} finished with: {e}");
            }
        });
    }
}
