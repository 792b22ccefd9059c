//! Edit form state

use serde::{Deserialize, Serialize};
use tresor_client::SecretContent;

/// Fields of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Url,
    UserName,
    Password,
}

impl DraftField {
    /// Form order
    pub const ALL: [Self; 3] = [Self::Url, Self::UserName, Self::Password];

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::UserName => "Username",
            Self::Password => "Password",
        }
    }
}

/// Unsaved edits of one secret
///
/// An empty field is left out of the save payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub url: String,
    pub user_name: String,
    pub password: String,
}

impl EditDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Url => &self.url,
            DraftField::UserName => &self.user_name,
            DraftField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Url => &mut self.url,
            DraftField::UserName => &mut self.user_name,
            DraftField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Content to send; empty fields are skipped on serialization
    pub fn to_content(&self) -> SecretContent {
        SecretContent {
            url: self.url.clone(),
            user_name: self.user_name.clone(),
            password: self.password.clone(),
        }
    }
}
