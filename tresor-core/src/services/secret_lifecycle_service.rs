//! Secret list lifecycle: load → edit → save/delete → reload
//!
//! One service instance backs one secret list view. The edit slot and the busy
//! slot are shared by the whole list: at most one secret is edited and at most one
//! save/delete is in flight at a time. Mutations never patch `records`; every
//! successful mutation is followed by a full reload.

use std::sync::Arc;

use tokio::sync::RwLock;
use tresor_client::{SecretId, SecretRecord, UpdateSecretRequest};

use crate::codec;
use crate::error::{CoreError, CoreResult};
use crate::services::{log_failure, ServiceContext};
use crate::traits::ConfirmAction;
use crate::types::{DraftField, SecretsState, SessionIdentity};

/// Question asked before a delete
pub const DELETE_CONFIRM_PROMPT: &str = "Really delete this secret?";
/// Shown when a load error has no message
pub const LOAD_FAILED: &str = "Failed to load secrets.";
/// Shown when an update error has no message
pub const UPDATE_FAILED: &str = "Update failed.";
/// Shown when a delete error has no message
pub const DELETE_FAILED: &str = "Delete failed.";

struct Inner {
    identity: SessionIdentity,
    /// Bumped when the identity's email changes; results of older requests are dropped
    generation: u64,
    /// Bumped by every load; only the latest one may write the list
    load_seq: u64,
    state: SecretsState,
}

/// Secret lifecycle service
pub struct SecretLifecycleService {
    ctx: Arc<ServiceContext>,
    inner: RwLock<Inner>,
}

impl SecretLifecycleService {
    /// Create the service for a session. Nothing is loaded until [`mount`](Self::mount).
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, identity: SessionIdentity) -> Self {
        Self {
            ctx,
            inner: RwLock::new(Inner {
                identity,
                generation: 0,
                load_seq: 0,
                state: SecretsState::default(),
            }),
        }
    }

    /// Copy of the current state for rendering
    pub async fn snapshot(&self) -> SecretsState {
        self.inner.read().await.state.clone()
    }

    /// Current session identity
    pub async fn identity(&self) -> SessionIdentity {
        self.inner.read().await.identity.clone()
    }

    /// Initial load when the list is first shown
    pub async fn mount(&self) -> CoreResult<()> {
        log::info!("Mounting secret list");
        self.reload().await
    }

    /// Replace the session identity
    ///
    /// A different email discards records and edit state and reloads. Requests
    /// still in flight for the previous email finish without touching the state.
    pub async fn set_identity(&self, identity: SessionIdentity) -> CoreResult<()> {
        let email_changed = {
            let mut inner = self.inner.write().await;
            let changed = inner.identity.email() != identity.email();
            inner.identity = identity;
            if changed {
                inner.generation += 1;
                inner.state = SecretsState::default();
            }
            changed
        };

        if email_changed {
            log::info!("Session changed, reloading secrets");
            self.reload().await
        } else {
            Ok(())
        }
    }

    /// Load all secrets of the logged-in user, replacing the current snapshot
    ///
    /// When loads overlap only the one started last is applied. An edit form
    /// whose secret is missing from the new list is closed.
    pub async fn reload(&self) -> CoreResult<()> {
        let (email, generation, seq) = {
            let mut inner = self.inner.write().await;
            inner.load_seq += 1;
            inner.state.loading = true;
            inner.state.error_message.clear();

            let Some(email) = inner.identity.email().map(str::to_string) else {
                let err = CoreError::MissingEmail;
                log_failure("Loading secrets", &err);
                inner.state.error_message = err.to_string();
                inner.state.records.clear();
                inner.state.loading = false;
                return Err(err);
            };
            (email, inner.generation, inner.load_seq)
        };

        let result = self
            .ctx
            .secret_api
            .list_for_user(&email)
            .await
            .map_err(CoreError::from);

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            log::debug!("Dropping secret list loaded for a previous session");
            return result.map(|_| ());
        }
        if inner.load_seq != seq {
            log::debug!("Dropping secret list superseded by a newer load");
            return result.map(|_| ());
        }

        inner.state.loading = false;
        match result {
            Ok(records) => {
                log::debug!("Loaded {} secrets", records.len());
                inner.state.records = records;
                if let Some(id) = inner.state.editing_id {
                    if inner.state.find(id).is_none() {
                        log::info!("Secret {id} is gone, closing its edit form");
                        inner.state.clear_edit();
                    }
                }
                Ok(())
            }
            Err(err) => {
                log_failure("Loading secrets", &err);
                inner.state.error_message = err.user_message(LOAD_FAILED);
                inner.state.records.clear();
                Err(err)
            }
        }
    }

    /// Put a secret in edit mode, seeding the form from its decoded content
    ///
    /// An unsaved draft of another secret is dropped.
    pub async fn begin_edit(&self, record: &SecretRecord) {
        let draft = codec::decode(&record.content).draft();

        let mut inner = self.inner.write().await;
        if let Some(previous) = inner.state.editing_id.filter(|id| *id != record.id) {
            log::debug!("Discarding unsaved draft of secret {previous}");
        }
        let password = inner
            .identity
            .encrypt_password()
            .unwrap_or_default()
            .to_string();
        inner.state.edit_draft = draft;
        inner.state.encryption_password_draft = password;
        inner.state.editing_id = Some(record.id);
    }

    /// Leave edit mode without saving
    pub async fn cancel_edit(&self) {
        self.inner.write().await.state.clear_edit();
    }

    /// Change one field of the edit form. Ignored outside edit mode.
    pub async fn set_draft_field(&self, field: DraftField, value: impl Into<String>) {
        let mut inner = self.inner.write().await;
        if inner.state.editing_id.is_some() {
            inner.state.edit_draft.set(field, value);
        }
    }

    /// Change the encryption password typed into the form. Ignored outside edit mode.
    pub async fn set_encryption_password_draft(&self, value: impl Into<String>) {
        let mut inner = self.inner.write().await;
        if inner.state.editing_id.is_some() {
            inner.state.encryption_password_draft = value.into();
        }
    }

    /// Send the edit form of secret `id`, then reload and leave edit mode
    ///
    /// On failure the form stays open with the error shown.
    pub async fn save_edit(&self, id: SecretId) -> CoreResult<()> {
        let (request, generation) = {
            let mut inner = self.inner.write().await;
            Self::ensure_idle(&mut inner.state)?;
            if inner.state.editing_id != Some(id) {
                return Err(Self::reject(&mut inner.state, CoreError::NotEditing(id)));
            }

            let Some(email) = inner.identity.email().map(str::to_string) else {
                return Err(Self::reject(&mut inner.state, CoreError::MissingEmail));
            };
            let encrypt_password = inner
                .identity
                .encrypt_password()
                .map(str::to_string)
                .or_else(|| {
                    Some(inner.state.encryption_password_draft.clone()).filter(|p| !p.is_empty())
                });
            let Some(encrypt_password) = encrypt_password else {
                return Err(Self::reject(
                    &mut inner.state,
                    CoreError::MissingEncryptionPassword,
                ));
            };

            inner.state.busy_id = Some(id);
            inner.state.error_message.clear();

            let request = UpdateSecretRequest {
                email,
                encrypt_password,
                content: inner.state.edit_draft.to_content(),
            };
            (request, inner.generation)
        };

        log::info!("Updating secret {id}");
        let result = self.ctx.secret_api.update(id, &request).await;

        let outcome = match result {
            Ok(()) => {
                // Reload failures land in the state; the save itself succeeded
                if self.reload().await.is_err() {
                    log::debug!("Reload after updating secret {id} failed");
                }
                let mut inner = self.inner.write().await;
                if inner.generation == generation {
                    inner.state.clear_edit();
                }
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                log_failure("Updating secret", &err);
                let mut inner = self.inner.write().await;
                if inner.generation == generation {
                    inner.state.error_message = err.user_message(UPDATE_FAILED);
                }
                Err(err)
            }
        };

        self.release(id, generation).await;
        outcome
    }

    /// Delete secret `id` after the user confirmed, then reload
    ///
    /// Declining is a no-op.
    pub async fn delete_record(&self, id: SecretId, confirm: &dyn ConfirmAction) -> CoreResult<()> {
        Self::ensure_idle(&mut self.inner.write().await.state)?;

        if !confirm.confirm(DELETE_CONFIRM_PROMPT) {
            log::debug!("Deletion of secret {id} declined");
            return Ok(());
        }

        let generation = {
            let mut inner = self.inner.write().await;
            Self::ensure_idle(&mut inner.state)?;
            inner.state.busy_id = Some(id);
            inner.state.error_message.clear();
            inner.generation
        };

        log::info!("Deleting secret {id}");
        let outcome = match self.ctx.secret_api.delete(id).await {
            Ok(()) => {
                if self.reload().await.is_err() {
                    log::debug!("Reload after deleting secret {id} failed");
                }
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                log_failure("Deleting secret", &err);
                let mut inner = self.inner.write().await;
                if inner.generation == generation {
                    inner.state.error_message = err.user_message(DELETE_FAILED);
                }
                Err(err)
            }
        };

        self.release(id, generation).await;
        outcome
    }

    /// Reject a mutation while another one holds the busy slot
    fn ensure_idle(state: &mut SecretsState) -> CoreResult<()> {
        match state.busy_id {
            Some(busy) => Err(Self::reject(state, CoreError::ActionInProgress(busy))),
            None => Ok(()),
        }
    }

    /// Record a failed precondition and hand the error back
    fn reject(state: &mut SecretsState, err: CoreError) -> CoreError {
        log_failure("Rejected action", &err);
        state.error_message = err.to_string();
        err
    }

    /// Free the busy slot taken for `id` under `generation`
    async fn release(&self, id: SecretId, generation: u64) {
        let mut inner = self.inner.write().await;
        if inner.generation == generation && inner.state.busy_id == Some(id) {
            inner.state.busy_id = None;
        }
    }
}
