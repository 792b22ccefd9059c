//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use tresor_client::ClientError;
use tresor_client::SecretId;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The session carries no email (nobody logged in)
    #[error("No valid email, please do login first.")]
    MissingEmail,

    /// Saving needs an encryption password and none is known
    #[error("Encryption password required.")]
    MissingEncryptionPassword,

    /// Another save/delete holds the busy slot
    #[error("Another action is in progress on secret {0}")]
    ActionInProgress(SecretId),

    /// A save named a secret other than the one in edit mode
    #[error("Secret {0} is not being edited.")]
    NotEditing(SecretId),

    /// Error from the secret store API
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (missing input, 4xx answers), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingEmail
            | Self::MissingEncryptionPassword
            | Self::ActionInProgress(_)
            | Self::NotEditing(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }

    /// Message for the UI: the error text, or `fallback` when that text is blank.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_message_passes_through() {
        let e = CoreError::from(ClientError::from_response(500, None, "db down"));
        assert_eq!(e.user_message("Update failed."), "db down");
        assert!(!e.is_expected());
    }

    #[test]
    fn blank_message_uses_fallback() {
        let e = CoreError::from(ClientError::Http {
            status: 500,
            message: "   ".to_string(),
        });
        assert_eq!(e.user_message("Update failed."), "Update failed.");
    }

    #[test]
    fn precondition_errors_are_expected() {
        assert!(CoreError::MissingEmail.is_expected());
        assert!(CoreError::MissingEncryptionPassword.is_expected());
        assert!(CoreError::ActionInProgress(SecretId(1)).is_expected());
        assert!(CoreError::NotEditing(SecretId(1)).is_expected());
    }
}
