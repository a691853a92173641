//! Database settings loaded via OrthoConfig.
//!
//! Values come from `DATABASE_*` environment variables or the matching
//! command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::pool::PoolConfig;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised when settings cannot produce a usable pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseSettingsError {
    /// No connection URL was configured.
    #[error("DATABASE_URL must be set")]
    MissingUrl,
}

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DATABASE")]
pub struct DatabaseSettings {
    /// PostgreSQL connection URL.
    pub url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: Option<u32>,
}

impl DatabaseSettings {
    /// Configured connection URL.
    ///
    /// # Errors
    /// Returns [`DatabaseSettingsError::MissingUrl`] when unset or blank.
    pub fn url(&self) -> Result<&str, DatabaseSettingsError> {
        self.url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(DatabaseSettingsError::MissingUrl)
    }

    /// Configured pool size, falling back to the default.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Build a pool configuration from these settings.
    ///
    /// # Errors
    /// Returns [`DatabaseSettingsError::MissingUrl`] when no URL is set.
    pub fn pool_config(&self) -> Result<PoolConfig, DatabaseSettingsError> {
        Ok(PoolConfig::new(self.url()?).with_max_size(self.max_connections()))
    }
}
