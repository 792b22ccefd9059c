//! Model layer: application state
//!
//! ```text
//!   App
//!   ├── secrets: SecretsPage    selection, edit focus, last service snapshot
//!   ├── modal: ModalState       ConfirmDelete { id, focus } | Help
//!   └── core: CoreService       SecretLifecycleService + runtime handle
//! ```
//!
//! The records, the edit draft and the busy slot are owned by
//! `SecretLifecycleService`. `SecretsPage` only holds a copy that `App::sync`
//! refreshes before every frame, plus what is purely about the terminal
//! (which card is selected, which input has the cursor).
//!
//! Modified by the Update layer, read by the View layer.

mod app;
pub mod state;

pub use app::App;
pub use state::{EditFocus, Modal, ModalState, SecretsPage};
