//! Modal state

use tresor_core::SecretId;

/// Modal kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Asks before deleting a secret
    ConfirmDelete {
        id: SecretId,
        /// 0 = Cancel, 1 = Delete
        focus: usize,
    },
    /// Key bindings
    Help,
}

/// Modal container
#[derive(Debug, Default)]
pub struct ModalState {
    /// Active modal, `None` when closed
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Show the delete confirmation with "Cancel" focused
    pub fn show_confirm_delete(&mut self, id: SecretId) {
        self.active = Some(Modal::ConfirmDelete { id, focus: 0 });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
