//! Backend layer: config and the bridge to `tresor-core`

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
