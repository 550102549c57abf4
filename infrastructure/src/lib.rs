//! Infrastructure layer for toolforge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the XRPL model catalog, JSON Schema export
//! and configuration file loading.

pub mod catalog;
pub mod config;
pub mod tools;

// Re-export commonly used types
pub use catalog::{CatalogModel, TypedFactory, XrplModelCatalog};
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileRegistryConfig,
};
pub use tools::JsonSchemaToolConverter;
