//! Tresor Core Library
//!
//! Client-side lifecycle of a user's stored secrets:
//! - payload decoding (`codec`)
//! - load, edit, save and delete with a single busy slot (`SecretLifecycleService`)
//! - the view-model front-ends render (`presentation`)
//!
//! The secret store is reached through the [`SecretApi`] trait, so the same
//! services run against the HTTP client or an in-memory mock.

pub mod codec;
pub mod error;
pub mod presentation;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use codec::{decode, DecodedContent};
pub use error::{ClientError, CoreError, CoreResult};
pub use presentation::{present, CardMode, LabeledValue, SecretCard, SecretsView};
pub use services::{SecretLifecycleService, ServiceContext};
pub use traits::{ConfirmAction, Confirmed, SecretApi};
pub use types::{
    DraftField, EditDraft, SecretContent, SecretId, SecretRecord, SecretsState, SessionIdentity,
    UpdateSecretRequest,
};
