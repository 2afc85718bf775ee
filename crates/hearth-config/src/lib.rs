//! # hearth-config
//!
//! Layered configuration loading for Hearth using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HEARTH_*` prefix, `__` as separator)
//! 2. User-level `~/.config/hearth/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HEARTH_STORE__BASE_URL` -> `store.base_url`,
//! `HEARTH_UI__DATE_FORMAT` -> `ui.date_format`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hearth_config::PortalConfig;
//!
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! if config.store.is_configured() {
//!     println!("store: {}", config.store.base_url);
//! }
//! ```

mod error;
mod store;
mod ui;

pub use error::ConfigError;
pub use store::StoreConfig;
pub use ui::UiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML file + environment).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] for `.env`
    /// file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        figment.merge(Env::prefixed("HEARTH_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hearth").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert!(!config.store.is_configured());
        assert_eq!(config.ui.date_format, "%b %-d, %Y");
        assert_eq!(config.ui.currency_symbol, "$");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert!(!config.store.is_configured());
            Ok(())
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("HEARTH_STORE__BASE_URL", "https://store.example.com");
            jail.set_env("HEARTH_STORE__ANON_KEY", "anon-abc");
            jail.set_env("HEARTH_UI__CURRENCY_SYMBOL", "€");

            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.store.base_url, "https://store.example.com");
            assert_eq!(config.store.anon_key, "anon-abc");
            assert!(config.store.is_configured());
            assert_eq!(config.ui.currency_symbol, "€");
            Ok(())
        });
    }
}
