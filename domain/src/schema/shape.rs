//! Type shape resolution
//!
//! [`TypeShape::resolve`] turns a [`RawType`] annotation into the normalized
//! shape the tool layer works with:
//!
//! | Annotation | Shape |
//! |------------|-------|
//! | `optional<T>`, `union<T, none>` | `Optional(resolve(T))` |
//! | `list<T>` | `List(resolve(T))` |
//! | enumeration | `EnumRef(descriptor)` |
//! | `string` / `integer` / `number` / `boolean` | `Scalar(kind)` |
//! | anything else | `Scalar(Opaque)` |
//!
//! Resolution is total: unsupported shapes degrade to an opaque scalar.

use super::raw_type::{RawEnum, RawType};
use serde::Serialize;
use serde_json::Value;

/// Kind of a scalar shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    /// Any shape the tool layer does not look into (unions, nested models, maps)
    Opaque,
}

/// Normalized, recursive field shape
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    Scalar(ScalarKind),
    Optional(Box<TypeShape>),
    List(Box<TypeShape>),
    EnumRef(EnumDescriptor),
}

impl TypeShape {
    /// Resolve a raw annotation. Never fails.
    pub fn resolve(raw: &RawType) -> TypeShape {
        match raw {
            RawType::String => TypeShape::Scalar(ScalarKind::String),
            RawType::Integer => TypeShape::Scalar(ScalarKind::Integer),
            RawType::Float => TypeShape::Scalar(ScalarKind::Float),
            RawType::Boolean => TypeShape::Scalar(ScalarKind::Boolean),
            RawType::Optional(inner) => TypeShape::Optional(Box::new(Self::resolve(inner))),
            RawType::List(inner) => TypeShape::List(Box::new(Self::resolve(inner))),
            RawType::Enum(e) => TypeShape::EnumRef(EnumDescriptor::from(e)),
            RawType::Union(members) => Self::resolve_union(members),
            RawType::NoneType | RawType::Any | RawType::Map | RawType::Model(_) => {
                TypeShape::Scalar(ScalarKind::Opaque)
            }
        }
    }

    fn resolve_union(members: &[RawType]) -> TypeShape {
        match members {
            [single] => Self::resolve(single),
            [a, RawType::NoneType] | [RawType::NoneType, a] if *a != RawType::NoneType => {
                TypeShape::Optional(Box::new(Self::resolve(a)))
            }
            _ => TypeShape::Scalar(ScalarKind::Opaque),
        }
    }

    /// The enumeration behind this shape, looking through `Optional` and `List`
    pub fn enum_descriptor(&self) -> Option<&EnumDescriptor> {
        match self {
            TypeShape::EnumRef(e) => Some(e),
            TypeShape::Optional(inner) | TypeShape::List(inner) => inner.enum_descriptor(),
            TypeShape::Scalar(_) => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeShape::Optional(_))
    }

    /// Whether a list sits at the top level (optionality aside)
    pub fn is_list(&self) -> bool {
        match self {
            TypeShape::List(_) => true,
            TypeShape::Optional(inner) => inner.is_list(),
            _ => false,
        }
    }
}

/// An enumeration as seen by the tool layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub description: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
    pub description: String,
}

impl From<&RawEnum> for EnumDescriptor {
    fn from(e: &RawEnum) -> Self {
        Self {
            name: e.name.clone(),
            description: e.description.clone(),
            members: e
                .members
                .iter()
                .map(|m| EnumMember {
                    name: m.name.clone(),
                    value: m.value.clone(),
                    description: m.description.clone(),
                })
                .collect(),
        }
    }
}

impl EnumDescriptor {
    /// Member names in declaration order
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    /// Find the member a caller-supplied value refers to.
    ///
    /// Accepts a member name, a member value, or anything whose string form
    /// matches either. Booleans count as 1/0 against numeric member values.
    pub fn find_member(&self, value: &Value) -> Option<&EnumMember> {
        let text = display_string(value);
        if let Some(member) = self.members.iter().find(|m| m.name == text) {
            return Some(member);
        }
        self.members.iter().find(|m| values_match(&m.value, value))
    }
}

fn values_match(member: &Value, given: &Value) -> bool {
    if member == given {
        return true;
    }
    if let (Some(a), Some(b)) = (as_number(member), as_number(given)) {
        return a == b;
    }
    display_string(member) == display_string(given)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// String form used for loose comparisons (strings unquoted)
pub(crate) fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_enum() -> RawEnum {
        RawEnum::new("Sample", "A sample enum")
            .member("A", 1, "first")
            .member("B", 2, "second")
    }

    #[test]
    fn test_resolve_scalars() {
        assert_eq!(
            TypeShape::resolve(&RawType::String),
            TypeShape::Scalar(ScalarKind::String)
        );
        assert_eq!(
            TypeShape::resolve(&RawType::Float),
            TypeShape::Scalar(ScalarKind::Float)
        );
        assert_eq!(
            TypeShape::resolve(&RawType::model("IssuedCurrency")),
            TypeShape::Scalar(ScalarKind::Opaque)
        );
        assert_eq!(
            TypeShape::resolve(&RawType::Map),
            TypeShape::Scalar(ScalarKind::Opaque)
        );
    }

    #[test]
    fn test_resolve_union_with_none_is_optional() {
        let raw = RawType::union([RawType::Integer, RawType::NoneType]);
        assert_eq!(
            TypeShape::resolve(&raw),
            TypeShape::Optional(Box::new(TypeShape::Scalar(ScalarKind::Integer)))
        );

        let reversed = RawType::union([RawType::NoneType, RawType::Boolean]);
        assert!(TypeShape::resolve(&reversed).is_optional());
    }

    #[test]
    fn test_resolve_wide_union_degrades_to_opaque() {
        let raw = RawType::union([
            RawType::String,
            RawType::model("IssuedCurrencyAmount"),
            RawType::model("MPTAmount"),
        ]);
        assert_eq!(TypeShape::resolve(&raw), TypeShape::Scalar(ScalarKind::Opaque));

        let none_only = RawType::union([RawType::NoneType, RawType::NoneType]);
        assert_eq!(
            TypeShape::resolve(&none_only),
            TypeShape::Scalar(ScalarKind::Opaque)
        );
    }

    #[test]
    fn test_resolve_nested_optional_list_enum() {
        let raw = RawType::optional(RawType::list(sample_enum().into()));
        let shape = TypeShape::resolve(&raw);

        assert!(shape.is_optional());
        assert!(shape.is_list());
        let e = shape.enum_descriptor().unwrap();
        assert_eq!(e.name, "Sample");
        assert_eq!(e.member_names(), vec!["A", "B"]);
        assert_eq!(e.members[1].value, json!(2));
        assert_eq!(e.members[0].description, "first");
    }

    #[test]
    fn test_optional_and_none_union_resolve_alike() {
        let expected = TypeShape::Optional(Box::new(TypeShape::Scalar(ScalarKind::Boolean)));
        assert_eq!(TypeShape::resolve(&RawType::optional(RawType::Boolean)), expected);
        assert_eq!(
            TypeShape::resolve(&RawType::union([RawType::Boolean, RawType::NoneType])),
            expected
        );
    }

    #[test]
    fn test_find_member_by_name_and_value() {
        let e = EnumDescriptor::from(&sample_enum());

        assert_eq!(e.find_member(&json!("A")).unwrap().name, "A");
        assert_eq!(e.find_member(&json!(2)).unwrap().name, "B");
        assert_eq!(e.find_member(&json!(2.0)).unwrap().name, "B");
        assert_eq!(e.find_member(&json!("2")).unwrap().name, "B");
        assert!(e.find_member(&json!("C")).is_none());
        assert!(e.find_member(&json!(3)).is_none());
    }

    #[test]
    fn test_find_member_treats_booleans_as_bits() {
        let e = EnumDescriptor::from(&sample_enum());
        assert_eq!(e.find_member(&json!(true)).unwrap().name, "A");
        assert!(e.find_member(&json!(false)).is_none());
    }

    #[test]
    fn test_find_member_string_values() {
        let e = EnumDescriptor::from(
            &RawEnum::new("ObjectType", "")
                .member("CHECK", "check", "")
                .member("OFFER", "offer", ""),
        );
        assert_eq!(e.find_member(&json!("offer")).unwrap().name, "OFFER");
        assert_eq!(e.find_member(&json!("CHECK")).unwrap().name, "CHECK");
        assert!(e.find_member(&json!("Offer")).is_none());
    }
}
