//! Main application state

use crate::backend::CoreService;

use super::{ModalState, SecretsPage};

/// Main application state
pub struct App {
    /// Exit flag
    pub should_quit: bool,

    /// Status bar message
    pub status_message: Option<String>,

    /// Secret list page
    pub secrets: SecretsPage,

    /// Modal state
    pub modal: ModalState,

    /// Bridge to the secret lifecycle service
    pub core: CoreService,
}

impl App {
    /// Create the application around a ready core service
    pub fn new(core: CoreService) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            secrets: SecretsPage::new(),
            modal: ModalState::new(),
            core,
        }
    }

    /// Re-read the service state; called once per frame and after form edits
    pub fn sync(&mut self) {
        let state = self.core.snapshot();
        let identity = self.core.identity();
        self.secrets.sync(state, identity);
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
