//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema for agent tool-use APIs.

use serde_json::{Map, Value, json};
use toolforge_application::ports::tool_schema::ToolSchemaPort;
use toolforge_domain::{ScalarKind, ToolDescriptor, ToolRegistry, TypeShape};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles shape → JSON Schema mapping:
/// - `Scalar(String)` → `"string"`
/// - `Scalar(Integer)` → `"integer"`
/// - `Scalar(Float)` → `"number"`
/// - `Scalar(Boolean)` → `"boolean"`
/// - `Scalar(Opaque)` → no type constraint
/// - `List(T)` → `"array"` with `items` from `T`
/// - `EnumRef` → `enum` of member names
/// - `Optional(T)` → `T` (optionality is expressed by `required`)
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    fn shape_schema(shape: &TypeShape) -> Map<String, Value> {
        let mut schema = Map::new();
        match shape {
            TypeShape::Scalar(kind) => {
                let schema_type = match kind {
                    ScalarKind::String => Some("string"),
                    ScalarKind::Integer => Some("integer"),
                    ScalarKind::Float => Some("number"),
                    ScalarKind::Boolean => Some("boolean"),
                    ScalarKind::Opaque => None,
                };
                if let Some(t) = schema_type {
                    schema.insert("type".to_string(), json!(t));
                }
            }
            TypeShape::Optional(inner) => return Self::shape_schema(inner),
            TypeShape::List(inner) => {
                schema.insert("type".to_string(), json!("array"));
                schema.insert("items".to_string(), Value::Object(Self::shape_schema(inner)));
            }
            TypeShape::EnumRef(e) => {
                schema.insert("type".to_string(), json!("string"));
                schema.insert("enum".to_string(), json!(e.member_names()));
            }
        }
        schema
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDescriptor) -> Value {
        let mut properties = Map::new();

        for field in &tool.model.fields {
            let mut prop = Self::shape_schema(&field.shape);
            let description = if field.description.is_empty() {
                field.type_summary.clone()
            } else {
                field.description.clone()
            };
            prop.insert("description".to_string(), json!(description));
            if let Some(default) = field.default.as_ref().filter(|d| !d.is_null()) {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(field.name.clone(), Value::Object(prop));
        }

        json!({
            "name": tool.name,
            "description": tool.documentation(),
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": tool.required_params,
            }
        })
    }

    fn all_tools_schema(&self, registry: &ToolRegistry) -> Vec<Value> {
        let mut tools: Vec<&ToolDescriptor> = registry.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
