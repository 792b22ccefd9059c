//! Main application loop
//!
//! About every 100 ms, or right after a key press:
//!
//! ```text
//! loop {
//!     app.sync()                               re-read the service snapshot
//!     terminal.draw(|f| view::render(&app, f))
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {      waits up to 100 ms
//!         let msg = handle_event(event, &app)
//!         update::update(&mut app, msg)
//!     }
//! }
//! ```
//!
//! The poll timeout also bounds how long a finished save or reload waits before
//! it is drawn.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main application loop
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. Pick up results of background store calls
        app.sync();

        // 2. Render UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. Check for exit
        if app.should_quit {
            break;
        }

        // 4. Poll events (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. Translate the event into a message
            let msg = event::handle_event(event, app);

            // 6. Update state
            update::update(app, msg);
        }
    }

    Ok(())
}
