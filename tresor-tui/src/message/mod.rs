//! Message layer: bridge between Event and Update
//!
//! The event handler turns key presses into an [`AppMessage`]; `update::update`
//! consumes it and changes the model.
//!
//! ```text
//!   AppMessage
//!   ├── Quit / Refresh / ShowHelp / ClearStatus / Noop
//!   ├── Content(ContentMessage)   selection, edit form, save, delete
//!   └── Modal(ModalMessage)       confirmation and help modals
//! ```

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
