//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// What keys currently control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    ConfirmDelete,
    Help,
    Editing,
    Browsing,
}

impl InputMode {
    fn of(app: &App) -> Self {
        match app.modal.active {
            Some(Modal::ConfirmDelete { .. }) => Self::ConfirmDelete,
            Some(Modal::Help) => Self::Help,
            None if app.secrets.is_editing() => Self::Editing,
            None => Self::Browsing,
        }
    }
}

/// Poll for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle an event and return the corresponding message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, InputMode::of(app)),
        // Resize redraws on the next frame
        _ => AppMessage::Noop,
    }
}

/// Handle keyboard events
fn handle_key_event(key: KeyEvent, mode: InputMode) -> AppMessage {
    // Only Press: Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    match mode {
        InputMode::ConfirmDelete => return handle_confirm_delete_keys(key),
        InputMode::Help => return handle_help_keys(key),
        InputMode::Editing | InputMode::Browsing => {}
    }

    // Global shortcuts
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    if mode == InputMode::Editing {
        handle_edit_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// Keys while browsing the list
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if key.modifiers == KeyModifiers::NONE && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Keys while the edit form is open
fn handle_edit_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Content(ContentMessage::CancelEdit);
    }
    if DefaultKeymap::ACTION_SAVE.matches(&key) {
        return AppMessage::Content(ContentMessage::Save);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// Keys in the delete confirmation
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right) => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        (_, KeyCode::Enter) => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// The help modal only responds to close keys
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}
