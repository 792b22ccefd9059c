//! Test helpers
//!
//! Provides a mock secret store and convenient factory methods.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tresor_client::{ClientError, Result as ClientResult};

use crate::services::{SecretLifecycleService, ServiceContext};
use crate::traits::SecretApi;
use crate::types::{SecretId, SecretRecord, SessionIdentity, UpdateSecretRequest};

// ===== MockSecretApi =====

/// In-memory secret store
///
/// Successful updates and deletes change the stored records, so a reload sees them.
#[derive(Default)]
pub struct MockSecretApi {
    records: RwLock<Vec<SecretRecord>>,
    updates: RwLock<Vec<(SecretId, UpdateSecretRequest)>>,
    last_list_email: RwLock<Option<String>>,
    list_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    /// If Some, the matching call returns this error
    list_error: RwLock<Option<ClientError>>,
    update_error: RwLock<Option<ClientError>>,
    delete_error: RwLock<Option<ClientError>>,
    /// If Some, updates wait for a notification before answering
    update_gate: RwLock<Option<Arc<Notify>>>,
    /// If Some, the next list call answers with the records of its start, after a notification
    list_gate: RwLock<Option<Arc<Notify>>>,
}

impl MockSecretApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_records(&self, records: Vec<SecretRecord>) {
        *self.records.write().await = records;
    }

    pub async fn fail_list(&self, err: Option<ClientError>) {
        *self.list_error.write().await = err;
    }

    pub async fn fail_update(&self, err: Option<ClientError>) {
        *self.update_error.write().await = err;
    }

    pub async fn fail_delete(&self, err: Option<ClientError>) {
        *self.delete_error.write().await = err;
    }

    /// Keep updates pending until the returned handle is notified
    pub async fn hold_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.update_gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    /// Keep the next list call pending until the returned handle is notified
    pub async fn hold_next_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.list_gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub async fn updates(&self) -> Vec<(SecretId, UpdateSecretRequest)> {
        self.updates.read().await.clone()
    }

    pub async fn last_list_email(&self) -> Option<String> {
        self.last_list_email.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretApi for MockSecretApi {
    async fn list_for_user(&self, email: &str) -> ClientResult<Vec<SecretRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list_email.write().await = Some(email.to_string());
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        let records = self.records.read().await.clone();

        let gate = self.list_gate.write().await.take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(records)
    }

    async fn update(&self, id: SecretId, request: &UpdateSecretRequest) -> ClientResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updates.write().await.push((id, request.clone()));

        let gate = self.update_gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }
        let content = serde_json::to_string(&request.content).map_err(|e| {
            ClientError::SerializationError {
                detail: e.to_string(),
            }
        })?;
        if let Some(record) = self.records.write().await.iter_mut().find(|r| r.id == id) {
            record.content = content;
        }
        Ok(())
    }

    async fn delete(&self, id: SecretId) -> ClientResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.delete_error.read().await.clone() {
            return Err(err);
        }
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }
}

// ===== Factory =====

pub fn record(id: i64, user_id: i64, content: &str) -> SecretRecord {
    SecretRecord {
        id: SecretId(id),
        user_id,
        content: content.to_string(),
    }
}

/// Service over a fresh [`MockSecretApi`]; the mock is returned for assertions
pub fn create_test_service(
    identity: SessionIdentity,
) -> (SecretLifecycleService, Arc<MockSecretApi>) {
    let api = Arc::new(MockSecretApi::new());
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (SecretLifecycleService::new(ctx, identity), api)
}
