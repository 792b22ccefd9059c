//! View-model of the secret list
//!
//! [`present`] turns a state snapshot into what a front-end draws: a header, one card
//! per secret, and which actions are enabled. Front-ends add no logic of their own.

use serde::Serialize;
use tresor_client::SecretId;

use crate::codec::{self, DecodedContent};
use crate::types::{DraftField, EditDraft, SecretsState, SessionIdentity};

pub const TITLE: &str = "My Secrets";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No secrets available";
/// Label of raw payloads
pub const FALLBACK_LABEL: &str = "Encrypted";
pub const ENCRYPTION_PASSWORD_LABEL: &str = "Encryption password";

/// Whole list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsView {
    pub loading: bool,
    pub error: Option<String>,
    /// Set when there is nothing to list and no load is running
    pub empty_text: Option<&'static str>,
    pub cards: Vec<SecretCard>,
}

/// One secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretCard {
    pub id: SecretId,
    pub user_id: i64,
    pub mode: CardMode,
    /// A save/delete of this secret is in flight
    pub busy: bool,
    /// Edit, delete and cancel
    pub actions_enabled: bool,
    /// Save additionally needs a logged-in email
    pub save_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CardMode {
    View {
        fields: Vec<LabeledValue>,
    },
    #[serde(rename_all = "camelCase")]
    Edit {
        draft: EditDraft,
        /// The session has no encryption password, so the form asks for one
        ask_encryption_password: bool,
        #[serde(skip)]
        encryption_password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

impl SecretCard {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Edit { .. })
    }
}

/// Build the view of `state` for `identity`
pub fn present(state: &SecretsState, identity: &SessionIdentity) -> SecretsView {
    let has_email = identity.email().is_some();
    let ask_encryption_password = identity.encrypt_password().is_none();

    let cards = state
        .records
        .iter()
        .map(|record| {
            let busy = state.is_busy(record.id);
            let mode = if state.is_editing(record.id) {
                CardMode::Edit {
                    draft: state.edit_draft.clone(),
                    ask_encryption_password,
                    encryption_password: state.encryption_password_draft.clone(),
                }
            } else {
                CardMode::View {
                    fields: view_fields(&codec::decode(&record.content)),
                }
            };
            SecretCard {
                id: record.id,
                user_id: record.user_id,
                mode,
                busy,
                actions_enabled: !busy,
                save_enabled: !busy && has_email,
            }
        })
        .collect::<Vec<_>>();

    SecretsView {
        loading: state.loading,
        error: state.has_error().then(|| state.error_message.clone()),
        empty_text: (cards.is_empty() && !state.loading).then_some(EMPTY_TEXT),
        cards,
    }
}

/// Non-empty values in display order
fn view_fields(content: &DecodedContent) -> Vec<LabeledValue> {
    let raw = match content {
        DecodedContent::Raw { text } => Some(text.as_str()),
        DecodedContent::Structured { .. } => None,
    };
    let structured = [
        (DraftField::Url, content.url()),
        (DraftField::UserName, content.user_name()),
        (DraftField::Password, content.password()),
    ]
    .map(|(field, value)| (field.label(), value));

    std::iter::once((FALLBACK_LABEL, raw))
        .chain(structured)
        .filter_map(|(label, value)| {
            value.filter(|v| !v.is_empty()).map(|v| LabeledValue {
                label,
                value: v.to_string(),
            })
        })
        .collect()
}
