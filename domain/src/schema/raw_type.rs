//! Raw model metadata as declared by a model catalog
//!
//! [`RawType`] is the field type annotation a catalog attaches to every field.
//! It is intentionally richer than what the tool layer acts upon (unions,
//! nested model references, maps); the resolver in [`super::shape`] narrows it
//! to a [`TypeShape`](super::shape::TypeShape).
//!
//! [`RawModel`] and [`RawField`] carry the rest of a model's declaration:
//! names, docs and the default-or-required marker.

use serde_json::Value;
use std::fmt;

/// A declared field type annotation
#[derive(Debug, Clone, PartialEq)]
pub enum RawType {
    String,
    Integer,
    Float,
    Boolean,
    /// The unit "no value" type, only meaningful inside a [`RawType::Union`]
    NoneType,
    Any,
    Map,
    /// Reference to another model by name (e.g. `IssuedCurrencyAmount`)
    Model(String),
    Optional(Box<RawType>),
    List(Box<RawType>),
    Union(Vec<RawType>),
    Enum(RawEnum),
}

impl RawType {
    pub fn optional(inner: RawType) -> Self {
        RawType::Optional(Box::new(inner))
    }

    pub fn list(inner: RawType) -> Self {
        RawType::List(Box::new(inner))
    }

    pub fn union(members: impl IntoIterator<Item = RawType>) -> Self {
        RawType::Union(members.into_iter().collect())
    }

    pub fn model(name: impl Into<String>) -> Self {
        RawType::Model(name.into())
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawType::String => write!(f, "string"),
            RawType::Integer => write!(f, "integer"),
            RawType::Float => write!(f, "number"),
            RawType::Boolean => write!(f, "boolean"),
            RawType::NoneType => write!(f, "none"),
            RawType::Any => write!(f, "any"),
            RawType::Map => write!(f, "map"),
            RawType::Model(name) => write!(f, "{}", name),
            RawType::Optional(inner) => write!(f, "optional<{}>", inner),
            RawType::List(inner) => write!(f, "list<{}>", inner),
            RawType::Union(members) => {
                let parts: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                write!(f, "union<{}>", parts.join(", "))
            }
            RawType::Enum(e) => write!(f, "{}", e.name),
        }
    }
}

/// A declared enumeration: ordered members with values and docs
#[derive(Debug, Clone, PartialEq)]
pub struct RawEnum {
    pub name: String,
    pub description: String,
    pub members: Vec<RawEnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEnumMember {
    pub name: String,
    pub value: Value,
    pub description: String,
}

impl RawEnum {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members: Vec::new(),
        }
    }

    pub fn member(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        self.members.push(RawEnumMember {
            name: name.into(),
            value: value.into(),
            description: description.into(),
        });
        self
    }
}

impl From<RawEnum> for RawType {
    fn from(e: RawEnum) -> Self {
        RawType::Enum(e)
    }
}

/// Default marker of a declared field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// The field has no default and must be supplied
    Required,
    /// The field is optional with this default (`Value::Null` for "none")
    Value(Value),
}

/// A declared model field
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub name: String,
    pub ty: RawType,
    pub description: String,
    pub default: FieldDefault,
}

/// A declared model: the unit a catalog hands over for extraction
#[derive(Debug, Clone, PartialEq)]
pub struct RawModel {
    pub name: String,
    pub description: String,
    pub fields: Vec<RawField>,
}

impl RawModel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Append a required field (builder pattern)
    pub fn required(
        self,
        name: impl Into<String>,
        ty: RawType,
        description: impl Into<String>,
    ) -> Self {
        self.field(name, ty, FieldDefault::Required, description)
    }

    /// Append an optional field whose default is "none" (builder pattern)
    pub fn optional(
        self,
        name: impl Into<String>,
        ty: RawType,
        description: impl Into<String>,
    ) -> Self {
        self.field(name, ty, FieldDefault::Value(Value::Null), description)
    }

    /// Append an optional field with an explicit default (builder pattern)
    pub fn defaulted(
        self,
        name: impl Into<String>,
        ty: RawType,
        default: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        self.field(name, ty, FieldDefault::Value(default.into()), description)
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        ty: RawType,
        default: FieldDefault,
        description: impl Into<String>,
    ) -> Self {
        self.fields.push(RawField {
            name: name.into(),
            ty,
            description: description.into(),
            default,
        });
        self
    }

    /// Append shared fields after the ones declared so far
    pub fn extend(mut self, fields: impl IntoIterator<Item = RawField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_type_display() {
        assert_eq!(RawType::String.to_string(), "string");
        assert_eq!(
            RawType::optional(RawType::list(RawType::Integer)).to_string(),
            "optional<list<integer>>"
        );
        assert_eq!(
            RawType::union([RawType::String, RawType::model("IssuedCurrencyAmount")]).to_string(),
            "union<string, IssuedCurrencyAmount>"
        );

        let e = RawEnum::new("PaymentFlag", "").member("TF_NO_DIRECT_RIPPLE", 0x0001_0000, "");
        assert_eq!(RawType::from(e).to_string(), "PaymentFlag");
    }

    #[test]
    fn test_raw_model_builder_keeps_order() {
        let model = RawModel::new("Payment", "Sends value")
            .required("account", RawType::String, "Sender")
            .optional("fee", RawType::String, "")
            .defaulted("flags", RawType::Integer, 0, "")
            .required("destination", RawType::String, "");

        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["account", "fee", "flags", "destination"]);
        assert_eq!(model.fields[0].default, FieldDefault::Required);
        assert_eq!(model.fields[1].default, FieldDefault::Value(Value::Null));
        assert_eq!(model.fields[2].default, FieldDefault::Value(Value::from(0)));
    }
}
