//! Secret list state

use serde::Serialize;
use tresor_client::{SecretId, SecretRecord};

use super::EditDraft;

/// Everything the secret list shows
///
/// Owned by [`SecretLifecycleService`](crate::services::SecretLifecycleService);
/// front-ends render from a [`snapshot`](crate::services::SecretLifecycleService::snapshot).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsState {
    /// Snapshot from the last load
    pub records: Vec<SecretRecord>,
    /// A load is running
    pub loading: bool,
    /// Most recent error, empty when none
    pub error_message: String,
    /// Secret in edit mode
    pub editing_id: Option<SecretId>,
    /// Form values of the secret in edit mode
    pub edit_draft: EditDraft,
    /// Encryption password typed into the form when the session has none
    #[serde(skip)]
    pub encryption_password_draft: String,
    /// Secret with a save/delete in flight
    pub busy_id: Option<SecretId>,
}

impl SecretsState {
    pub fn is_editing(&self, id: SecretId) -> bool {
        self.editing_id == Some(id)
    }

    pub fn is_busy(&self, id: SecretId) -> bool {
        self.busy_id == Some(id)
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn find(&self, id: SecretId) -> Option<&SecretRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Leave edit mode and forget the draft
    pub(crate) fn clear_edit(&mut self) {
        self.editing_id = None;
        self.edit_draft = EditDraft::default();
        self.encryption_password_draft.clear();
    }
}
