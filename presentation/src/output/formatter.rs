//! Output formatter trait

use serde_json::Value;
use toolforge_domain::{InvocationResult, ToolListing, ToolSchema};

/// Trait for formatting registry output
pub trait OutputFormatter {
    /// Format the tool listing
    fn format_listing(&self, listing: &ToolListing) -> String;

    /// Format a single tool description
    fn format_schema(&self, schema: &ToolSchema) -> String;

    /// Format an invocation outcome
    fn format_result(&self, result: &InvocationResult) -> String;

    /// Format exported JSON Schema documents
    fn format_json_schema(&self, schemas: &[Value]) -> String;
}
