//! Secret list message handling

use tresor_core::{SecretCard, SecretId};

use crate::message::ContentMessage;
use crate::model::{App, EditFocus};

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.secrets.select_previous(),
        ContentMessage::SelectNext => app.secrets.select_next(),
        ContentMessage::SelectFirst => app.secrets.select_first(),
        ContentMessage::SelectLast => app.secrets.select_last(),

        ContentMessage::Edit => begin_edit(app),
        ContentMessage::Delete => ask_delete(app),
        ContentMessage::Save => save(app),
        ContentMessage::CancelEdit => cancel_edit(app),

        ContentMessage::NextField => {
            let ask = app.secrets.ask_encryption_password();
            app.secrets.edit_focus = app.secrets.edit_focus.next(ask);
        }
        ContentMessage::PrevField => {
            let ask = app.secrets.ask_encryption_password();
            app.secrets.edit_focus = app.secrets.edit_focus.prev(ask);
        }
        ContentMessage::Input(c) => {
            let mut value = app.secrets.focused_value().to_string();
            value.push(c);
            write_focused(app, value);
        }
        ContentMessage::Backspace => {
            let mut value = app.secrets.focused_value().to_string();
            if value.pop().is_some() {
                write_focused(app, value);
            }
        }
    }
}

/// View-model card of secret `id`
fn card(app: &App, id: SecretId) -> Option<SecretCard> {
    app.secrets.view().cards.into_iter().find(|c| c.id == id)
}

/// Secret the actions apply to: the one in edit mode, else the selected one
fn target(app: &App) -> Option<SecretId> {
    app.secrets
        .state
        .editing_id
        .or_else(|| app.secrets.selected_record().map(|r| r.id))
}

fn begin_edit(app: &mut App) {
    let Some(record) = app.secrets.selected_record().cloned() else {
        return;
    };
    if !card(app, record.id).is_some_and(|c| c.actions_enabled) {
        app.set_status(format!("Secret {} is busy", record.id));
        return;
    }
    app.clear_status();
    app.core.begin_edit(&record);
    app.secrets.edit_focus = EditFocus::default();
    app.sync();
    app.secrets.select_editing();
}

fn ask_delete(app: &mut App) {
    let Some(id) = target(app) else {
        return;
    };
    if let Some(busy) = app.secrets.state.busy_id {
        app.set_status(format!("Secret {busy} is busy"));
        return;
    }
    let Some(c) = card(app, id) else {
        close_vanished(app, id);
        return;
    };
    if !c.actions_enabled {
        app.set_status(format!("Secret {id} is busy"));
        return;
    }
    app.modal.show_confirm_delete(id);
}

fn save(app: &mut App) {
    let Some(id) = app.secrets.state.editing_id else {
        return;
    };
    // One save/delete at a time across the whole list
    if let Some(busy) = app.secrets.state.busy_id {
        app.set_status(format!("Secret {busy} is busy"));
        return;
    }
    match card(app, id) {
        Some(c) if c.save_enabled => {
            app.clear_status();
            app.core.save(id);
        }
        Some(_) => app.set_status("Log in to save"),
        None => close_vanished(app, id),
    }
}

fn cancel_edit(app: &mut App) {
    if let Some(id) = app.secrets.state.editing_id {
        if card(app, id).is_some_and(|c| c.busy) {
            app.set_status(format!("Secret {id} is busy"));
            return;
        }
    }
    app.core.cancel_edit();
    app.sync();
}

/// The secret in edit mode is no longer listed: drop its form
fn close_vanished(app: &mut App, id: SecretId) {
    app.core.cancel_edit();
    app.sync();
    app.set_status(format!("Secret {id} no longer exists"));
}

/// Store the new text of the focused input
fn write_focused(app: &mut App, value: String) {
    match app.secrets.edit_focus {
        EditFocus::Field(field) => app.core.set_draft_field(field, value),
        EditFocus::EncryptionPassword => app.core.set_encryption_password(value),
    }
    app.sync();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::runtime::Runtime;
    use tresor_core::{SecretRecord, SecretsState};

    use crate::backend::{AppConfig, CoreService};

    fn app(runtime: &Runtime) -> App {
        let config = AppConfig {
            api_base: Some("http://127.0.0.1:9".to_string()),
            email: Some("a@b.com".to_string()),
            encrypt_password: Some("p".to_string()),
            ..AppConfig::default()
        };
        App::new(CoreService::new(&config, runtime.handle().clone()).unwrap())
    }

    fn secret(id: i64) -> SecretRecord {
        SecretRecord {
            id: SecretId(id),
            user_id: 7,
            content: r#"{"url":"https://x.com"}"#.to_string(),
        }
    }

    #[test]
    fn esc_leaves_edit_of_unlisted_secret() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.core.begin_edit(&secret(1));
        app.sync();

        update(&mut app, ContentMessage::CancelEdit);

        assert_eq!(app.core.snapshot().editing_id, None);
        assert!(!app.secrets.is_editing());
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn save_of_unlisted_secret_closes_form() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.core.begin_edit(&secret(1));
        app.sync();

        update(&mut app, ContentMessage::Save);

        assert_eq!(app.core.snapshot().editing_id, None);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Secret 1 no longer exists")
        );
    }

    #[test]
    fn save_while_other_secret_busy_reports_it() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.secrets.state = SecretsState {
            records: vec![secret(1), secret(2)],
            editing_id: Some(SecretId(1)),
            busy_id: Some(SecretId(2)),
            ..SecretsState::default()
        };

        update(&mut app, ContentMessage::Save);

        assert_eq!(app.status_message.as_deref(), Some("Secret 2 is busy"));
        assert_eq!(app.core.snapshot().busy_id, None);
    }

    #[test]
    fn delete_while_other_secret_busy_reports_it() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.secrets.state = SecretsState {
            records: vec![secret(1), secret(2)],
            busy_id: Some(SecretId(2)),
            ..SecretsState::default()
        };

        update(&mut app, ContentMessage::Delete);

        assert_eq!(app.status_message.as_deref(), Some("Secret 2 is busy"));
        assert!(app.modal.active.is_none());
    }
}
