//! Secret list messages

/// Secret list messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== Selection ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Actions ==========
    /// Edit the selected secret
    Edit,
    /// Ask to delete the selected (or edited) secret
    Delete,
    /// Save the secret in edit mode
    Save,
    /// Leave edit mode
    CancelEdit,

    // ========== Edit form ==========
    NextField,
    PrevField,
    /// Typed character
    Input(char),
    Backspace,
}
