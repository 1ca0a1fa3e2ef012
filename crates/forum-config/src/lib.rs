//! # forum-config
//!
//! Layered configuration loading for the forum using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORUM_*` prefix, `__` as separator)
//! 2. Project-level `.forum/config.toml`
//! 3. User-level `~/.config/forum/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORUM_LISTING__PAGE_SIZE` -> `listing.page_size`,
//! `FORUM_PSEUDONYM__SEED` -> `pseudonym.seed`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use forum_config::ForumConfig;
//!
//! let config = ForumConfig::load_with_dotenv().expect("config");
//! println!("page size: {}", config.listing.page_size);
//! ```

mod auth;
mod error;
mod listing;
mod posting;
mod pseudonym;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use listing::{DEFAULT_PAGE_SIZE, ListingConfig};
pub use posting::{ModerationConfig, PostingConfig};
pub use pseudonym::PseudonymConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForumConfig {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub pseudonym: PseudonymConfig,
    #[serde(default)]
    pub posting: PostingConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ForumConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".forum/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FORUM_").split("__"))
    }

    /// Reject values the listing and pseudonym components cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.page_size == 0 {
            return Err(ConfigError::invalid(
                "listing.page_size",
                "must be at least 1",
            ));
        }
        if self.pseudonym.max_attempts == 0 && !self.pseudonym.sweep_on_exhaustion {
            return Err(ConfigError::invalid(
                "pseudonym.max_attempts",
                "must be at least 1 when sweep_on_exhaustion is disabled",
            ));
        }
        if self.auth.admin_email.trim().is_empty() {
            return Err(ConfigError::invalid("auth.admin_email", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ForumConfig::default();
        assert_eq!(config.listing.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.pseudonym.max_attempts, 1000);
        assert_eq!(config.posting.min_title_len, 10);
        assert_eq!(config.posting.min_description_len, 20);
        assert_eq!(config.posting.min_tags, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = ForumConfig::default();
        config.listing.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing.page_size"));
    }

    #[test]
    fn zero_attempts_allowed_only_with_sweep() {
        let mut config = ForumConfig::default();
        config.pseudonym.max_attempts = 0;
        assert!(config.validate().is_ok());

        config.pseudonym.sweep_on_exhaustion = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_admin_email_is_rejected() {
        let mut config = ForumConfig::default();
        config.auth.admin_email = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("auth.admin_email"));
    }
}
