//! Util layer: terminal setup and logging
//!
//! Nothing here knows about secrets. `init_terminal` switches to raw mode and the
//! alternate screen; `restore_terminal` undoes both and must run even when the
//! main loop fails, or the shell is left without echo.

mod logging;
mod terminal;

pub use logging::{default_log_dir, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
