//! Business logic service layer

mod secret_lifecycle_service;

pub use secret_lifecycle_service::{
    SecretLifecycleService, DELETE_CONFIRM_PROMPT, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED,
};

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::SecretApi;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects the store implementation.
pub struct ServiceContext {
    /// Secret store API
    pub secret_api: Arc<dyn SecretApi>,
}

impl ServiceContext {
    /// Create service context
    #[must_use]
    pub fn new(secret_api: Arc<dyn SecretApi>) -> Self {
        Self { secret_api }
    }
}

/// Log a failed operation at `warn` when expected, `error` otherwise
pub(crate) fn log_failure(action: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{action} failed: {err}");
    } else {
        log::error!("{action} failed: {err}");
    }
}
