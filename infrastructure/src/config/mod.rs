//! Configuration file loading for responder
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RESPONDER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./responder.toml` or `./.responder.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/responder/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileServerConfig, FileStorageConfig,
};
pub use loader::{ConfigLoader, ConfigSource};
