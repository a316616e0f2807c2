//! Configuration file loading for ne-dedi
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEDEDI_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ne-dedi.toml` or `./.ne-dedi.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ne-dedi/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TIMEOUT_SECS, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileOutputConfig, FileTranslatorConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
