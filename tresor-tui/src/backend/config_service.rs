//! Config service
//!
//! `<config_dir>/tresor/config.json`, every field optional:
//!
//! ```json
//! { "apiBase": "https://tresor.example.com", "email": "alice@example.com", "theme": "light" }
//! ```
//!
//! `TRESOR_API_BASE`, `TRESOR_EMAIL` and `TRESOR_ENCRYPT_PASSWORD` override the file.
//! The encryption password only ever comes from the environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tresor_client::{ClientConfig, API_BASE_ENV, DEFAULT_API_BASE};
use tresor_core::SessionIdentity;

use crate::view::theme::Theme;

pub const EMAIL_ENV: &str = "TRESOR_EMAIL";
pub const ENCRYPT_PASSWORD_ENV: &str = "TRESOR_ENCRYPT_PASSWORD";

const APP_DIR: &str = "tresor";
const CONFIG_FILE: &str = "config.json";

/// Application config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base: Option<String>,
    pub email: Option<String>,
    pub theme: Theme,
    #[serde(skip)]
    pub encrypt_password: Option<String>,
}

impl AppConfig {
    /// Apply overrides; `lookup` is `std::env::var` outside tests
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(api_base) = lookup(API_BASE_ENV) {
            self.api_base = Some(api_base);
        }
        if let Some(email) = lookup(EMAIL_ENV) {
            self.email = Some(email);
        }
        if let Some(password) = lookup(ENCRYPT_PASSWORD_ENV) {
            self.encrypt_password = Some(password);
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::with_base(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))
    }

    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            email: self.email.clone(),
            encrypt_password: self.encrypt_password.clone(),
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Load config
    fn load(&self) -> Result<AppConfig>;

    /// Save config
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Config stored as JSON in the user's config directory
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)),
        }
    }

    #[cfg(test)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::exists)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let file_config = match &self.path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            Some(path) => {
                log::info!("No config at {}, using defaults", path.display());
                AppConfig::default()
            }
            None => AppConfig::default(),
        };
        Ok(file_config.apply_env(|key| std::env::var(key).ok()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let Some(path) = &self.path else {
            anyhow::bail!("no config directory on this platform");
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, serde_json::to_string_pretty(config)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
