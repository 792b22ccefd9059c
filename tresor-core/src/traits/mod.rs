//! Front-end abstraction trait definitions

mod confirm_action;

pub use confirm_action::{ConfirmAction, Confirmed};

// The store abstraction lives in the client library
pub use tresor_client::SecretApi;
