//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section is optional.

mod logging;
mod server;
mod storage;

pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("storage.path cannot be empty")]
    EmptyStoragePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Collection file settings
    pub storage: FileStorageConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyStoragePath);
        }

        Ok(())
    }
}
