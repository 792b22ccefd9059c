//! Secret list page state

use tresor_core::{
    present, DraftField, SecretRecord, SecretsState, SecretsView, SessionIdentity,
};

/// Focused input of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFocus {
    Field(DraftField),
    EncryptionPassword,
}

impl Default for EditFocus {
    fn default() -> Self {
        Self::Field(DraftField::Url)
    }
}

impl EditFocus {
    /// Inputs in form order
    fn order(ask_encryption_password: bool) -> Vec<Self> {
        let mut order: Vec<Self> = DraftField::ALL.into_iter().map(Self::Field).collect();
        if ask_encryption_password {
            order.push(Self::EncryptionPassword);
        }
        order
    }

    /// Next input, wrapping around
    pub fn next(self, ask_encryption_password: bool) -> Self {
        let order = Self::order(ask_encryption_password);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }

    /// Previous input, wrapping around
    pub fn prev(self, ask_encryption_password: bool) -> Self {
        let order = Self::order(ask_encryption_password);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + order.len() - 1) % order.len()]
    }
}

/// Secret list page state
///
/// `state` and `identity` are copies taken from the service every frame.
#[derive(Debug, Default)]
pub struct SecretsPage {
    pub state: SecretsState,
    pub identity: SessionIdentity,
    /// Selected card index
    pub selected: usize,
    pub edit_focus: EditFocus,
}

impl SecretsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a fresh snapshot, keeping the selection in range
    pub fn sync(&mut self, state: SecretsState, identity: SessionIdentity) {
        if state.editing_id.is_none() {
            self.edit_focus = EditFocus::default();
        }
        if self.edit_focus == EditFocus::EncryptionPassword
            && identity.encrypt_password().is_some()
        {
            self.edit_focus = EditFocus::default();
        }
        self.state = state;
        self.identity = identity;
        self.selected = self.selected.min(self.state.records.len().saturating_sub(1));
    }

    /// View-model for rendering
    pub fn view(&self) -> SecretsView {
        present(&self.state, &self.identity)
    }

    pub fn is_editing(&self) -> bool {
        self.state.editing_id.is_some()
    }

    /// The form shows the encryption password input
    pub fn ask_encryption_password(&self) -> bool {
        self.identity.encrypt_password().is_none()
    }

    pub fn selected_record(&self) -> Option<&SecretRecord> {
        self.state.records.get(self.selected)
    }

    /// Current text of the focused input
    pub fn focused_value(&self) -> &str {
        match self.edit_focus {
            EditFocus::Field(field) => self.state.edit_draft.get(field),
            EditFocus::EncryptionPassword => &self.state.encryption_password_draft,
        }
    }

    // ========== Selection ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.state.records.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.state.records.len().saturating_sub(1);
    }

    /// Move the selection onto the card in edit mode
    pub fn select_editing(&mut self) {
        if let Some(index) = self
            .state
            .editing_id
            .and_then(|id| self.state.records.iter().position(|r| r.id == id))
        {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tresor_core::SecretId;

    fn page_with(count: i64) -> SecretsPage {
        let records = (1..=count)
            .map(|id| SecretRecord {
                id: SecretId(id),
                user_id: 7,
                content: "{}".to_string(),
            })
            .collect();
        let mut page = SecretsPage::new();
        page.sync(
            SecretsState {
                records,
                ..SecretsState::default()
            },
            SessionIdentity::new("a@b.com", None),
        );
        page
    }

    #[test]
    fn selection_stays_in_range() {
        let mut page = page_with(2);
        page.select_next();
        page.select_next();
        assert_eq!(page.selected, 1);

        page.sync(SecretsState::default(), SessionIdentity::anonymous());
        assert_eq!(page.selected, 0);
        assert!(page.selected_record().is_none());
    }

    #[test]
    fn focus_cycles_through_password_when_asked() {
        let last = EditFocus::Field(DraftField::Password);
        assert_eq!(last.next(true), EditFocus::EncryptionPassword);
        assert_eq!(last.next(false), EditFocus::Field(DraftField::Url));
        assert_eq!(EditFocus::default().prev(true), EditFocus::EncryptionPassword);
        assert_eq!(EditFocus::EncryptionPassword.next(true), EditFocus::default());
    }

    #[test]
    fn select_editing_moves_to_card() {
        let mut page = page_with(3);
        page.state.editing_id = Some(SecretId(3));
        page.select_editing();
        assert_eq!(page.selected, 2);
    }
}
