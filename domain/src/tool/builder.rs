//! Parameter schema builder
//!
//! Turns a [`ModelDescriptor`] into a [`ToolDescriptor`]: the tool name,
//! the required/optional parameter split and one documentation line per field.

use super::entities::ToolDescriptor;
use crate::core::string::tool_name;
use crate::schema::{FieldDescriptor, ModelDescriptor};

/// Builds tool descriptors for every model of one category
#[derive(Debug, Clone)]
pub struct ParameterSchemaBuilder {
    category: String,
}

impl ParameterSchemaBuilder {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Build the tool descriptor for `model`. Always succeeds, including for
    /// models without fields (zero-argument tools).
    pub fn build(&self, model: ModelDescriptor) -> ToolDescriptor {
        let mut required_params = Vec::new();
        let mut optional_params = Vec::new();
        let mut param_docs = Vec::with_capacity(model.fields.len());

        for field in &model.fields {
            param_docs.push(param_doc(field));
            if field.required {
                required_params.push(field.name.clone());
            } else {
                optional_params.push(field.name.clone());
            }
        }

        ToolDescriptor {
            name: tool_name(&self.category, &model.name),
            category: self.category.clone(),
            model,
            required_params,
            optional_params,
            param_docs,
        }
    }
}

/// `name: type (enum E; valid values: [..]) - description (Optional)`
fn param_doc(field: &FieldDescriptor) -> String {
    let mut doc = format!("{}: {}", field.name, field.type_summary);

    if let Some(e) = field.shape.enum_descriptor() {
        doc.push_str(&format!(
            " (enum {}; valid values: [{}])",
            e.name,
            e.member_names().join(", ")
        ));
    }
    if !field.description.is_empty() {
        doc.push_str(" - ");
        doc.push_str(&field.description);
    }
    if !field.required {
        doc.push_str(" (Optional)");
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawEnum, RawModel, RawType};

    fn build(raw: RawModel, category: &str) -> ToolDescriptor {
        ParameterSchemaBuilder::new(category).build(ModelDescriptor::extract(&raw).unwrap())
    }

    #[test]
    fn test_split_preserves_declaration_order() {
        let raw = RawModel::new("Sample", "")
            .optional("x", RawType::String, "")
            .required("a", RawType::String, "")
            .optional("y", RawType::Integer, "")
            .required("b", RawType::Integer, "");
        let tool = build(raw, "Other");

        assert_eq!(tool.required_params, vec!["a", "b"]);
        assert_eq!(tool.optional_params, vec!["x", "y"]);
        assert_eq!(tool.param_docs.len(), 4);
        assert!(tool.param_docs[0].starts_with("x:"));
    }

    #[test]
    fn test_required_and_optional_partition_fields() {
        let raw = RawModel::new("Sample", "")
            .required("a", RawType::String, "")
            .optional("b", RawType::String, "")
            .required("c", RawType::String, "");
        let tool = build(raw, "Other");

        let mut all: Vec<&str> = tool.parameters().collect();
        all.sort();
        let mut fields: Vec<&str> = tool.model.field_names().collect();
        fields.sort();
        assert_eq!(all, fields);
        assert!(tool.required_params.iter().all(|r| !tool.optional_params.contains(r)));
    }

    #[test]
    fn test_tool_name_derivation() {
        let tool = build(RawModel::new("AccountInfo", ""), "Request");
        assert_eq!(tool.name, "create_request_accountinfo");
        assert_eq!(tool.category, "Request");
    }

    #[test]
    fn test_zero_field_model() {
        let tool = build(RawModel::new("XRP", "Specifies XRP as a currency"), "Currency");
        assert_eq!(tool.name, "create_currency_xrp");
        assert!(tool.required_params.is_empty());
        assert!(tool.optional_params.is_empty());
        assert!(tool.documentation().contains("Parameters: none"));
    }

    #[test]
    fn test_param_doc_for_enum_field() {
        let flag = RawEnum::new("NFTokenMintFlag", "Mint flags")
            .member("TF_BURNABLE", 1, "")
            .member("TF_ONLY_XRP", 2, "");
        let raw = RawModel::new("NFTokenMint", "").optional(
            "flags",
            RawType::optional(RawType::list(flag.into())),
            "Transaction flags",
        );
        let tool = build(raw, "Transaction");

        assert_eq!(
            tool.param_docs[0],
            "flags: optional<list<NFTokenMintFlag>> (enum NFTokenMintFlag; valid values: [TF_BURNABLE, TF_ONLY_XRP]) - Transaction flags (Optional)"
        );
    }

    #[test]
    fn test_param_doc_for_required_scalar() {
        let raw = RawModel::new("M", "").required("account", RawType::String, "  ");
        let tool = build(raw, "Other");
        assert_eq!(tool.param_docs[0], "account: string");
    }
}
