//! Typed model factories
//!
//! Every catalog model is a plain serde struct. [`TypedFactory`] bridges it to
//! the registry: the validated field map is deserialized into the struct, the
//! model's own rules are checked, and the canonical form is serialized back.
//! Every error message along the way reaches the caller verbatim.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;
use toolforge_application::CatalogEntry;
use toolforge_domain::{ModelFactory, ModelInstance, RawModel};

/// A model the catalog can construct
pub trait CatalogModel: DeserializeOwned + Serialize + Send + 'static {
    /// Cross-field rules of the model
    fn check(&self) -> Result<(), String> {
        Ok(())
    }

    /// Canonical representation returned to callers
    fn canonical(&self) -> Result<Value, String> {
        serde_json::to_value(self).map_err(|e| e.to_string())
    }
}

/// Serialize `model` with a leading `key: tag` entry
pub(crate) fn tagged<T: Serialize>(key: &str, tag: &str, model: &T) -> Result<Value, String> {
    let mut out = Map::new();
    out.insert(key.to_string(), Value::String(tag.to_string()));
    match serde_json::to_value(model).map_err(|e| e.to_string())? {
        Value::Object(fields) => out.extend(fields),
        other => return Err(format!("{} did not serialize to an object: {}", tag, other)),
    }
    Ok(Value::Object(out))
}

/// [`ModelFactory`] for a [`CatalogModel`] type
pub struct TypedFactory<T>(PhantomData<fn() -> T>);

impl<T> TypedFactory<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TypedFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogModel> ModelFactory for TypedFactory<T> {
    fn construct(&self, fields: Map<String, Value>) -> Result<Box<dyn ModelInstance>, String> {
        let model: T = serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())?;
        model.check()?;
        Ok(Box::new(model.canonical()?))
    }
}

/// Catalog entry pairing `model` metadata with the factory of `T`
pub(crate) fn entry<T: CatalogModel>(model: RawModel) -> CatalogEntry {
    CatalogEntry::new(model, Arc::new(TypedFactory::<T>::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct Range {
        low: u32,
        high: u32,
    }

    impl CatalogModel for Range {
        fn check(&self) -> Result<(), String> {
            if self.low > self.high {
                return Err("low must not exceed high".to_string());
            }
            Ok(())
        }

        fn canonical(&self) -> Result<Value, String> {
            tagged("kind", "Range", self)
        }
    }

    fn construct(value: Value) -> Result<Value, String> {
        let fields = value.as_object().cloned().unwrap();
        TypedFactory::<Range>::new()
            .construct(fields)
            .map(|m| m.to_canonical())
    }

    #[test]
    fn test_construct_and_tag() {
        assert_eq!(
            construct(json!({"low": 1, "high": 2})).unwrap(),
            json!({"kind": "Range", "low": 1, "high": 2})
        );
    }

    #[test]
    fn test_check_failure_is_verbatim() {
        assert_eq!(
            construct(json!({"low": 3, "high": 2})).unwrap_err(),
            "low must not exceed high"
        );
    }

    #[test]
    fn test_deserialize_failure_is_reported() {
        let err = construct(json!({"low": "x", "high": 2})).unwrap_err();
        assert!(err.contains("invalid type"), "{}", err);
    }
}
