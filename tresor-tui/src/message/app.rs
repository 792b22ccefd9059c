//! Main application message enum

use super::{ContentMessage, ModalMessage};

/// Main application message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Secret list messages
    Content(ContentMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Reload the secret list
    Refresh,

    /// Show help
    ShowHelp,

    /// Clear status message
    ClearStatus,

    /// No operation (unhandled events)
    Noop,
}
