//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod registry;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use registry::FileRegistryConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolforge_application::RegistryConfig;
use toolforge_domain::CoercionRules;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("coercion.hex_prefix cannot be empty")]
    EmptyHexPrefix,

    #[error("coercion.hex_field_suffixes cannot contain an empty suffix")]
    EmptyHexSuffix,

    #[error("registry.categories cannot contain an empty name")]
    EmptyCategory,

    #[error("logging.level cannot be blank")]
    BlankLogLevel,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Registry settings
    pub registry: FileRegistryConfig,
    /// Argument coercion settings
    pub coercion: CoercionRules,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.coercion.hex_prefix.is_empty() {
            return Err(ConfigValidationError::EmptyHexPrefix);
        }
        if self.coercion.hex_field_suffixes.iter().any(|s| s.is_empty()) {
            return Err(ConfigValidationError::EmptyHexSuffix);
        }
        if let Some(categories) = &self.registry.categories {
            if categories.iter().any(|c| c.trim().is_empty()) {
                return Err(ConfigValidationError::EmptyCategory);
            }
        }
        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigValidationError::BlankLogLevel);
            }
        }
        Ok(())
    }

    /// Application-level registry configuration
    pub fn to_registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            categories: self.registry.categories.clone(),
            coercion: self.coercion.clone(),
        }
    }
}
