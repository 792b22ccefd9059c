//! Tresor TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state updates (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config and the bridge to `tresor-core` (`backend/`)
//!
//! The secret list state lives in `tresor_core::SecretLifecycleService`. The UI
//! loop is synchronous: form edits are applied through the runtime handle before
//! the next frame, while store calls run as tasks and are picked up by the
//! snapshot taken at the start of every frame.
//!
//! ```text
//!   main()
//!     init_logging()        log file in the data directory
//!     load config           config.json + TRESOR_* environment
//!     CoreService::new()    HTTP client, ServiceContext, SecretLifecycleService
//!     mount()               first load, in the background
//!     init_terminal()
//!     app::run()            sync → draw → poll → handle_event → update
//!     restore_terminal()    always, even when run() failed
//! ```

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use util::{default_log_dir, init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Logging
    let log_path = init_logging(&default_log_dir())?;
    tracing::info!("Starting Tresor TUI, logging to {}", log_path.display());

    // 2. Config
    let config_service = LocalConfigService::new();
    if !config_service.exists() {
        match config_service.save(&AppConfig::default()) {
            Ok(()) => tracing::info!(
                "Wrote default config to {}",
                config_service.path().map(|p| p.display().to_string()).unwrap_or_default()
            ),
            Err(e) => tracing::warn!("Could not write default config: {e:#}"),
        }
    }
    let config = config_service.load()?;
    view::theme::set_theme(config.theme);

    // 3. Services
    let runtime = tokio::runtime::Runtime::new()?;
    let core = CoreService::new(&config, runtime.handle().clone())?;
    let mut app = model::App::new(core);
    app.core.mount();

    // 4. Terminal and main loop
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal)?;

    tracing::info!("Tresor TUI stopped");
    result
}
