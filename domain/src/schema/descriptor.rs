//! Model and field descriptors
//!
//! A [`ModelDescriptor`] is the static, validated view of a [`RawModel`]:
//! declaration-ordered fields with their resolved [`TypeShape`], requiredness,
//! documentation and defaults. It is produced once per model by
//! [`ModelDescriptor::extract`].

use super::raw_type::{FieldDefault, RawModel, RawType};
use super::shape::TypeShape;
use crate::core::error::DomainError;
use serde_json::Value;
use std::collections::HashSet;

/// Descriptor of a single model field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub required: bool,
    pub shape: TypeShape,
    /// Human-readable rendering of the declared type
    pub type_summary: String,
    pub description: String,
    /// Declared default; `None` for required fields
    pub default: Option<Value>,
}

/// Descriptor of a model: name, docstring and ordered fields
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    /// Extract a descriptor from declared model metadata.
    ///
    /// Fails on malformed metadata: an empty model or field name, duplicate
    /// field names, or an enumeration that is empty or repeats a member name.
    pub fn extract(raw: &RawModel) -> Result<Self, DomainError> {
        if raw.name.trim().is_empty() {
            return Err(DomainError::invalid_model("<unnamed>", "model name is empty"));
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw.fields.len());

        for field in &raw.fields {
            if field.name.trim().is_empty() {
                return Err(DomainError::invalid_model(&raw.name, "field name is empty"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DomainError::invalid_model(
                    &raw.name,
                    format!("duplicate field '{}'", field.name),
                ));
            }
            check_enums(&raw.name, &field.name, &field.ty)?;

            let (required, default) = match &field.default {
                FieldDefault::Required => (true, None),
                FieldDefault::Value(v) => (false, Some(v.clone())),
            };

            fields.push(FieldDescriptor {
                name: field.name.clone(),
                required,
                shape: TypeShape::resolve(&field.ty),
                type_summary: field.ty.to_string(),
                description: field.description.trim().to_string(),
                default,
            });
        }

        Ok(Self {
            name: raw.name.clone(),
            description: raw.description.trim().to_string(),
            fields,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Reject enumerations nested anywhere in `ty` that cannot be validated against
fn check_enums(model: &str, field: &str, ty: &RawType) -> Result<(), DomainError> {
    match ty {
        RawType::Enum(e) => {
            if e.members.is_empty() {
                return Err(DomainError::invalid_model(
                    model,
                    format!("enum '{}' of field '{}' has no members", e.name, field),
                ));
            }
            let mut names = HashSet::new();
            for member in &e.members {
                if !names.insert(member.name.as_str()) {
                    return Err(DomainError::invalid_model(
                        model,
                        format!("enum '{}' repeats member '{}'", e.name, member.name),
                    ));
                }
            }
            Ok(())
        }
        RawType::Optional(inner) | RawType::List(inner) => check_enums(model, field, inner),
        RawType::Union(members) => members
            .iter()
            .try_for_each(|m| check_enums(model, field, m)),
        _ => Ok(()),
    }
}
