//! Configuration file loading for toolforge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLFORGE_*` environment variables (e.g. `TOOLFORGE_OUTPUT__FORMAT=json`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolforge.toml` or `./.toolforge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/toolforge/config.toml`
//! 5. Fallback: `~/.config/toolforge/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileRegistryConfig,
};
pub use loader::{ConfigError, ConfigLoader};
