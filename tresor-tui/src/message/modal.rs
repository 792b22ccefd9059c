//! Modal messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Close the modal
    Close,

    /// Confirm/submit
    Confirm,

    /// Switch between "Cancel" and "Delete"
    ToggleDeleteFocus,
}
