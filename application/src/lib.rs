//! Application layer for toolforge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use ports::{
    model_catalog::{CatalogEntry, ModelCatalogPort},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::build_registry::{
    BuildRegistryError, BuildRegistryOutput, BuildRegistryUseCase, CategoryCount, RegistryStats,
    SkippedModel,
};
pub use use_cases::inspect_tools::{InspectError, InspectToolsUseCase};
pub use use_cases::invoke_tool::InvokeToolUseCase;
