//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for an
//! agent API" (infrastructure). The domain layer defines [`ToolDescriptor`]
//! and [`ToolRegistry`]; this port handles the JSON Schema conversion that
//! tool-use APIs require.

use toolforge_domain::{ToolDescriptor, ToolRegistry};

/// Port for converting tool descriptors to agent API format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool descriptor to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDescriptor) -> serde_json::Value;

    /// Convert all tools to JSON Schema array (sorted by name).
    fn all_tools_schema(&self, registry: &ToolRegistry) -> Vec<serde_json::Value>;
}
