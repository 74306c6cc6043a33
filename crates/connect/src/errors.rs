//! Error types for the connect adapters.
//!
//! Transport and configuration failures are owned here; they never cross
//! into the synchronization store.

use thiserror::Error;

/// Type alias for Result using our ConnectError type.
pub type Result<T> = std::result::Result<T, ConnectError>;

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}
