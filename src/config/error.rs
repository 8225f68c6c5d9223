//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Semantic problems found by `AppConfig::validate`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Cannot bind to '{0}'")]
    InvalidBindAddress(String),

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,
}

pub(super) const MAX_POOL_SIZE: u32 = 100;
