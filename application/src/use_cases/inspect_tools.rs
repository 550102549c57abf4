//! Inspect tools use case
//!
//! Read-only discovery over a built registry: list tools by category,
//! describe a tool by name or by the model it constructs, and export JSON
//! Schema for agent tool-use APIs.

use crate::ports::tool_schema::ToolSchemaPort;
use std::sync::Arc;
use thiserror::Error;
use toolforge_domain::{ToolListing, ToolRegistry, ToolSchema};
use tracing::debug;

/// Errors from tool discovery
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InspectError {
    #[error("Tool '{name}' not found. Available tools: {}", .available.join(", "))]
    ToolNotFound { name: String, available: Vec<String> },

    #[error("Model '{name}' not found. Available models: {}", .available.join(", "))]
    ModelNotFound { name: String, available: Vec<String> },

    #[error("Category '{name}' not found. Available categories: {}", .available.join(", "))]
    CategoryNotFound { name: String, available: Vec<String> },
}

/// Use case for tool discovery.
pub struct InspectToolsUseCase {
    registry: Arc<ToolRegistry>,
    schema: Arc<dyn ToolSchemaPort>,
}

impl InspectToolsUseCase {
    pub fn new(registry: Arc<ToolRegistry>, schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self { registry, schema }
    }

    /// All tools grouped by category, optionally restricted to one category
    pub fn list(&self, category: Option<&str>) -> Result<ToolListing, InspectError> {
        let listing = self.registry.listing();
        let Some(category) = category else {
            return Ok(listing);
        };

        let available: Vec<String> = listing.categories.iter().map(|c| c.category.clone()).collect();
        let filtered = listing.filter_category(category);
        if filtered.categories.is_empty() {
            return Err(InspectError::CategoryNotFound {
                name: category.to_string(),
                available,
            });
        }
        Ok(filtered)
    }

    /// Describe a tool by name
    pub fn describe(&self, tool_name: &str) -> Result<ToolSchema, InspectError> {
        debug!(tool = tool_name, "Describing tool");
        self.registry
            .describe(tool_name)
            .ok_or_else(|| InspectError::ToolNotFound {
                name: tool_name.to_string(),
                available: self.registry.names().map(str::to_string).collect(),
            })
    }

    /// Describe the tool constructing the given model
    pub fn describe_model(&self, model: &str) -> Result<ToolSchema, InspectError> {
        debug!(model, "Describing model");
        self.registry
            .find_by_model(model)
            .map(ToolSchema::from)
            .ok_or_else(|| InspectError::ModelNotFound {
                name: model.to_string(),
                available: self.registry.all().map(|t| t.model.name.clone()).collect(),
            })
    }

    /// JSON Schema for one tool, or for every tool when `tool_name` is `None`
    pub fn json_schema(&self, tool_name: Option<&str>) -> Result<Vec<serde_json::Value>, InspectError> {
        match tool_name {
            None => Ok(self.schema.all_tools_schema(&self.registry)),
            Some(name) => self
                .registry
                .get(name)
                .map(|tool| vec![self.schema.tool_to_schema(tool)])
                .ok_or_else(|| InspectError::ToolNotFound {
                    name: name.to_string(),
                    available: self.registry.names().map(str::to_string).collect(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};
    use toolforge_domain::{
        ModelDescriptor, ModelInstance, ParameterSchemaBuilder, RawModel, RawType, ToolDescriptor,
    };

    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &ToolDescriptor) -> Value {
            json!({"name": tool.name})
        }

        fn all_tools_schema(&self, registry: &ToolRegistry) -> Vec<Value> {
            registry.all().map(|t| self.tool_to_schema(t)).collect()
        }
    }

    fn echo(fields: Map<String, Value>) -> Result<Box<dyn ModelInstance>, String> {
        Ok(Box::new(Value::Object(fields)))
    }

    fn use_case() -> InspectToolsUseCase {
        let mut builder = ToolRegistry::builder();
        for (category, raw) in [
            (
                "Transaction",
                RawModel::new("Payment", "Sends value.").required("account", RawType::String, ""),
            ),
            ("Currency", RawModel::new("XRP", "")),
        ] {
            let tool =
                ParameterSchemaBuilder::new(category).build(ModelDescriptor::extract(&raw).unwrap());
            builder.register(tool, Arc::new(echo)).unwrap();
        }
        InspectToolsUseCase::new(Arc::new(builder.build()), Arc::new(NameOnlySchema))
    }

    #[test]
    fn test_list_all_and_by_category() {
        let use_case = use_case();
        assert_eq!(use_case.list(None).unwrap().total_tools, 2);

        let currency = use_case.list(Some("Currency")).unwrap();
        assert_eq!(currency.total_tools, 1);
        assert_eq!(currency.categories[0].tools[0].tool_name, "create_currency_xrp");
    }

    #[test]
    fn test_list_unknown_category() {
        let err = use_case().list(Some("Amount")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Category 'Amount' not found. Available categories: Transaction, Currency"
        );
    }

    #[test]
    fn test_describe() {
        let schema = use_case().describe("create_transaction_payment").unwrap();
        assert_eq!(schema.model, "Payment");
        assert_eq!(schema.required_fields, vec!["account"]);
        assert!(schema.documentation.contains("account: string"));
    }

    #[test]
    fn test_describe_unknown_tool_lists_available() {
        let err = use_case().describe("create_transaction_nope").unwrap_err();
        assert!(matches!(
            err,
            InspectError::ToolNotFound { ref available, .. } if available.len() == 2
        ));
    }

    #[test]
    fn test_describe_model() {
        let use_case = use_case();
        assert_eq!(use_case.describe_model("XRP").unwrap().tool_name, "create_currency_xrp");

        let err = use_case.describe_model("Escrow").unwrap_err();
        assert_eq!(
            err,
            InspectError::ModelNotFound {
                name: "Escrow".to_string(),
                available: vec!["Payment".to_string(), "XRP".to_string()],
            }
        );
    }

    #[test]
    fn test_json_schema() {
        let use_case = use_case();
        assert_eq!(use_case.json_schema(None).unwrap().len(), 2);
        assert_eq!(
            use_case.json_schema(Some("create_currency_xrp")).unwrap(),
            vec![json!({"name": "create_currency_xrp"})]
        );
        assert!(use_case.json_schema(Some("missing")).is_err());
    }
}
