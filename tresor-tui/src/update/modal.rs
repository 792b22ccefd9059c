//! Modal message handling

use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref mut modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { id, focus } => match msg {
            ModalMessage::Close => app.modal.close(),
            ModalMessage::ToggleDeleteFocus => {
                *focus = usize::from(*focus == 0);
            }
            ModalMessage::Confirm => {
                let id = *id;
                let confirmed = *focus == 1;
                app.modal.close();
                if confirmed {
                    app.clear_status();
                    app.core.delete(id);
                }
            }
        },
        Modal::Help => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
    }
}
