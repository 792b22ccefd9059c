//! Update layer: apply messages to the model
//!
//! Form edits go straight to the service and are re-read with `App::sync`.
//! Store calls (reload, save, delete) are started here and finish in the
//! background; their outcome shows up in a later snapshot.

mod content;
mod modal;

use crate::message::AppMessage;
use crate::model::App;

/// Handle an application message and update state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            app.clear_status();
            app.core.reload();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
