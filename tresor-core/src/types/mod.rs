//! Type definition module

mod draft;
mod identity;
mod state;

pub use draft::{DraftField, EditDraft};
pub use identity::SessionIdentity;
pub use state::SecretsState;

// Re-export the client library's public types
pub use tresor_client::{SecretContent, SecretId, SecretRecord, UpdateSecretRequest};
