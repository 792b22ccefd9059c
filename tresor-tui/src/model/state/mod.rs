mod modal;
mod secrets;

pub use modal::{Modal, ModalState};
pub use secrets::{EditFocus, SecretsPage};
