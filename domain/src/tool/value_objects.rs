//! Tool domain value objects: invocation results and schema views
//!
//! These types form the **output side** of the tool pipeline. An invocation
//! always produces an [`InvocationResult`]: either the canonical model
//! representation or a [`ToolFailure`] carrying enough schema for the caller
//! to correct its arguments and retry.
//!
//! | Kind | Stage | Details |
//! |------|-------|---------|
//! | `missing_required_fields` | required check | missing field names |
//! | `enum_validation_failed` | enum check | one message per invalid field |
//! | `construction_error` | construct | domain message, verbatim |
//! | `tool_not_found` | lookup | the unknown name |

use super::entities::ToolDescriptor;
use crate::schema::{EnumMember, FieldDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category of an invocation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingRequiredFields,
    EnumValidationFailed,
    ConstructionError,
    ToolNotFound,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::MissingRequiredFields => "missing_required_fields",
            FailureKind::EnumValidationFailed => "enum_validation_failed",
            FailureKind::ConstructionError => "construction_error",
            FailureKind::ToolNotFound => "tool_not_found",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field schema, as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub type_summary: String,
    pub is_optional: bool,
    pub is_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<EnumMember>>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl From<&FieldDescriptor> for FieldSchema {
    fn from(field: &FieldDescriptor) -> Self {
        let e = field.shape.enum_descriptor();
        Self {
            name: field.name.clone(),
            required: field.required,
            type_summary: field.type_summary.clone(),
            is_optional: field.shape.is_optional(),
            is_list: field.shape.is_list(),
            enum_name: e.map(|e| e.name.clone()),
            enum_values: e.map(|e| e.members.clone()),
            description: field.description.clone(),
            default: field.default.clone(),
        }
    }
}

/// Data view of a tool, returned by describe operations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSchema {
    pub tool_name: String,
    pub model: String,
    pub category: String,
    pub description: String,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub fields: Vec<FieldSchema>,
    pub documentation: String,
}

impl From<&ToolDescriptor> for ToolSchema {
    fn from(tool: &ToolDescriptor) -> Self {
        Self {
            tool_name: tool.name.clone(),
            model: tool.model.name.clone(),
            category: tool.category.clone(),
            description: tool.model.description.clone(),
            required_fields: tool.required_params.clone(),
            optional_fields: tool.optional_params.clone(),
            fields: tool.model.fields.iter().map(FieldSchema::from).collect(),
            documentation: tool.documentation(),
        }
    }
}

/// Structured failure of a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFailure {
    pub kind: FailureKind,
    /// Human-readable summary
    pub message: String,
    /// Offending field names, or one message per problem
    pub details: Vec<String>,
    pub tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub provided_fields: Vec<String>,
    pub field_schemas: Vec<FieldSchema>,
}

impl ToolFailure {
    /// Failure tied to a known tool, carrying its full schema
    pub fn for_tool(
        tool: &ToolDescriptor,
        kind: FailureKind,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details,
            tool: tool.name.clone(),
            model: Some(tool.model.name.clone()),
            category: Some(tool.category.clone()),
            required_fields: tool.required_params.clone(),
            optional_fields: tool.optional_params.clone(),
            provided_fields: Vec::new(),
            field_schemas: tool.model.fields.iter().map(FieldSchema::from).collect(),
        }
    }

    pub fn tool_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: FailureKind::ToolNotFound,
            message: format!("Tool not found: {}", name),
            details: vec![name.clone()],
            tool: name,
            model: None,
            category: None,
            required_fields: Vec::new(),
            optional_fields: Vec::new(),
            provided_fields: Vec::new(),
            field_schemas: Vec::new(),
        }
    }

    pub fn with_provided(mut self, provided: impl IntoIterator<Item = String>) -> Self {
        self.provided_fields = provided.into_iter().collect();
        self
    }
}

impl std::fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Outcome of a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum InvocationResult {
    /// Canonical representation of the constructed model
    Ok(Value),
    Fail(ToolFailure),
}

impl InvocationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, InvocationResult::Ok(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            InvocationResult::Ok(v) => Some(v),
            InvocationResult::Fail(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            InvocationResult::Ok(_) => None,
            InvocationResult::Fail(f) => Some(f),
        }
    }
}
