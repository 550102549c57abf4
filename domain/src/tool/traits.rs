//! Tool domain traits
//!
//! Contains the pure validation logic run between coercion and construction,
//! and the model construction seam implemented by model catalogs.

use super::entities::ToolDescriptor;
use crate::schema::shape::display_string;
use serde_json::{Map, Value};
use std::fmt;

/// A field value outside its enumeration
#[derive(Debug, Clone, PartialEq)]
pub struct EnumViolation {
    pub field: String,
    pub value: Value,
    pub valid_values: Vec<String>,
}

impl fmt::Display for EnumViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is not valid. Valid values: [{}]",
            self.field,
            display_string(&self.value),
            self.valid_values.join(", ")
        )
    }
}

/// Outcome of a failed validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required parameters absent (or null), in declaration order
    MissingRequired(Vec<String>),
    /// One entry per field holding a value outside its enumeration
    InvalidEnum(Vec<EnumViolation>),
}

/// Validator for coerced tool arguments
///
/// This is a pure domain trait that validates arguments against a tool's
/// definition without any I/O operations.
pub trait ToolValidator {
    /// Validate coerced arguments, returning the map to construct from
    fn validate(
        &self,
        tool: &ToolDescriptor,
        fields: Map<String, Value>,
    ) -> Result<Map<String, Value>, ValidationError>;
}

/// Default implementation of ToolValidator
///
/// Runs two ordered passes: required presence, then enum membership. Valid
/// enum values are rewritten to the member's underlying value so the model
/// constructor sees one canonical form.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl DefaultToolValidator {
    fn missing_required(tool: &ToolDescriptor, fields: &Map<String, Value>) -> Vec<String> {
        tool.required_params
            .iter()
            .filter(|name| fields.get(name.as_str()).is_none_or(Value::is_null))
            .cloned()
            .collect()
    }
}

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        tool: &ToolDescriptor,
        mut fields: Map<String, Value>,
    ) -> Result<Map<String, Value>, ValidationError> {
        // Pass 1: required presence
        let missing = Self::missing_required(tool, &fields);
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired(missing));
        }

        // Pass 2: enum membership
        let mut violations = Vec::new();
        for (name, value) in fields.iter_mut() {
            let Some(descriptor) = tool.field(name) else {
                continue;
            };
            let Some(e) = descriptor.shape.enum_descriptor() else {
                continue;
            };
            if value.is_null() {
                continue;
            }

            let normalized = match &*value {
                Value::Array(items) if descriptor.shape.is_list() => items
                    .iter()
                    .map(|item| e.find_member(item).map(|m| m.value.clone()))
                    .collect::<Option<Vec<_>>>()
                    .map(Value::Array),
                single => e.find_member(single).map(|m| m.value.clone()),
            };

            match normalized {
                Some(v) => *value = v,
                None => violations.push(EnumViolation {
                    field: name.clone(),
                    value: value.clone(),
                    valid_values: e.member_names().iter().map(|s| s.to_string()).collect(),
                }),
            }
        }

        if !violations.is_empty() {
            return Err(ValidationError::InvalidEnum(violations));
        }
        Ok(fields)
    }
}

/// A constructed domain model instance
pub trait ModelInstance: Send {
    /// Canonical (serialized) representation returned to callers
    fn to_canonical(&self) -> Value;
}

impl ModelInstance for Value {
    fn to_canonical(&self) -> Value {
        self.clone()
    }
}

/// Constructor of a domain model from a validated field map
///
/// Implemented by model catalogs. The error message of a rejected
/// construction is reported to the caller verbatim.
pub trait ModelFactory: Send + Sync {
    fn construct(&self, fields: Map<String, Value>) -> Result<Box<dyn ModelInstance>, String>;
}

impl<F> ModelFactory for F
where
    F: Fn(Map<String, Value>) -> Result<Box<dyn ModelInstance>, String> + Send + Sync,
{
    fn construct(&self, fields: Map<String, Value>) -> Result<Box<dyn ModelInstance>, String> {
        self(fields)
    }
}
