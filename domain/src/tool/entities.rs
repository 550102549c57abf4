//! Tool domain entities

use crate::schema::{FieldDescriptor, ModelDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Definition of a tool synthesized from a model
///
/// Built by [`ParameterSchemaBuilder`](super::builder::ParameterSchemaBuilder).
/// `required_params` and `optional_params` are disjoint, together cover every
/// model field, and each keeps declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Unique name of the tool (e.g., "create_transaction_payment")
    pub name: String,
    /// Category the model was registered under (e.g., "Transaction")
    pub category: String,
    /// Descriptor of the model this tool constructs
    pub model: ModelDescriptor,
    pub required_params: Vec<String>,
    pub optional_params: Vec<String>,
    /// One documentation line per field, in declaration order
    pub param_docs: Vec<String>,
}

impl ToolDescriptor {
    /// Full parameter order used for positional binding: required, then optional
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.required_params
            .iter()
            .chain(self.optional_params.iter())
            .map(|s| s.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.model.field(name)
    }

    /// Tool documentation: model docs, parameters and return note
    pub fn documentation(&self) -> String {
        let model = &self.model.name;
        let mut lines = vec![
            format!(
                "Create a {} model and return its canonical representation.",
                model
            ),
            String::new(),
        ];
        if !self.model.description.is_empty() {
            lines.push(self.model.description.clone());
            lines.push(String::new());
        }
        if self.param_docs.is_empty() {
            lines.push("Parameters: none".to_string());
        } else {
            lines.push("Parameters:".to_string());
            lines.extend(self.param_docs.iter().map(|doc| format!("    {}", doc)));
        }
        lines.push(String::new());
        lines.push("Returns:".to_string());
        lines.push(format!(
            "    Canonical representation of the {} model.",
            model
        ));
        lines.push(String::new());
        lines.push(
            "Note: string values are converted to booleans, integers or floats when they look like one."
                .to_string(),
        );
        lines.join("\n")
    }
}

/// A call to a tool with loosely-typed arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Positional arguments, bound in parameter order
    #[serde(default)]
    pub positional: Vec<Value>,
    /// Named arguments; these win over positional ones
    #[serde(default)]
    pub named: Map<String, Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            positional: Vec::new(),
            named: Map::new(),
        }
    }

    pub fn with_positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawModel, RawType};
    use crate::tool::builder::ParameterSchemaBuilder;

    fn payment_tool() -> ToolDescriptor {
        let raw = RawModel::new("Payment", "Sends value from one account to another.")
            .required("account", RawType::String, "Sender")
            .optional("fee", RawType::String, "")
            .required("destination", RawType::String, "Receiver");
        let model = ModelDescriptor::extract(&raw).unwrap();
        ParameterSchemaBuilder::new("Transaction").build(model)
    }

    #[test]
    fn test_parameters_order() {
        let tool = payment_tool();
        assert_eq!(
            tool.parameters().collect::<Vec<_>>(),
            vec!["account", "destination", "fee"]
        );
        assert_eq!(tool.required_params, vec!["account", "destination"]);
        assert_eq!(tool.model.name, "Payment");
    }

    #[test]
    fn test_documentation() {
        let doc = payment_tool().documentation();
        assert!(doc.starts_with("Create a Payment model"));
        assert!(doc.contains("Sends value from one account to another."));
        assert!(doc.contains("    account: string - Sender"));
        assert!(doc.contains("    fee: string (Optional)"));
        assert!(doc.contains("Canonical representation of the Payment model."));
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("create_transaction_payment")
            .with_positional("rAlice")
            .with_arg("destination", "rBob");

        assert_eq!(call.tool_name, "create_transaction_payment");
        assert_eq!(call.positional.len(), 1);
        assert_eq!(call.named.get("destination"), Some(&serde_json::json!("rBob")));
        assert!(!call.named.contains_key("missing"));
    }

    #[test]
    fn test_tool_call_deserializes_with_defaults() {
        let call: ToolCall =
            serde_json::from_str(r#"{"tool_name": "create_currency_xrp"}"#).unwrap();
        assert!(call.positional.is_empty());
        assert!(call.named.is_empty());
    }
}
