//! Runtime argument coercion
//!
//! Callers (typically LLM agents) send arguments as loosely-typed JSON, often
//! with every value stringified. The [`Coercer`] binds positional and named
//! arguments to a tool's parameters and converts string values toward the
//! scalar they most likely denote. Coercion never fails: anything it cannot
//! convert passes through unchanged for validation or the model constructor
//! to reject.
//!
//! String conversion order:
//!
//! 1. `true/1/yes/on` → `true`, `false/0/no/off` → `false` (case-insensitive)
//! 2. all-digit strings → integer
//! 3. decimal strings → integer when whole (`"2.0"` → `2`), float otherwise
//! 4. hex-prefixed strings on identifier fields (`*_id`, `*_hash`,
//!    `*_sequence`) → integer, base 16
//! 5. anything else unchanged

use super::entities::{ToolCall, ToolDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Transport metadata key that is never a model field
pub const META_KEY: &str = "_meta";

/// Naming convention for fields that accept hex-encoded integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionRules {
    /// Field-name suffixes marking numeric identifiers
    pub hex_field_suffixes: Vec<String>,
    /// Prefix marking a hex literal
    pub hex_prefix: String,
}

impl Default for CoercionRules {
    fn default() -> Self {
        Self {
            hex_field_suffixes: vec![
                "_id".to_string(),
                "_hash".to_string(),
                "_sequence".to_string(),
            ],
            hex_prefix: "0x".to_string(),
        }
    }
}

impl CoercionRules {
    fn is_hex_field(&self, field_name: &str) -> bool {
        self.hex_field_suffixes
            .iter()
            .any(|suffix| field_name.ends_with(suffix.as_str()))
    }
}

/// Binds and coerces raw call arguments
#[derive(Debug, Clone, Default)]
pub struct Coercer {
    rules: CoercionRules,
}

impl Coercer {
    pub fn new(rules: CoercionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CoercionRules {
        &self.rules
    }

    /// Map positional values onto `required ++ optional` parameter order, then
    /// merge named values on top. Positional values past the last parameter
    /// are dropped; on collision the named value wins.
    pub fn bind(&self, tool: &ToolDescriptor, call: &ToolCall) -> Map<String, Value> {
        let mut bound = Map::new();
        for (param, value) in tool.parameters().zip(call.positional.iter()) {
            bound.insert(param.to_string(), value.clone());
        }
        for (key, value) in &call.named {
            bound.insert(key.clone(), value.clone());
        }
        bound
    }

    /// Coerce a bound argument map against the tool's fields.
    ///
    /// Unknown keys are dropped. Null values are dropped for optional fields
    /// and kept for required ones so that validation reports them as missing.
    pub fn coerce(&self, tool: &ToolDescriptor, bound: Map<String, Value>) -> Map<String, Value> {
        let mut coerced = Map::new();
        for (name, value) in bound {
            if name == META_KEY {
                continue;
            }
            let Some(field) = tool.field(&name) else {
                continue;
            };
            let value = self.coerce_value(&field.name, value);
            if value.is_null() && !field.required {
                continue;
            }
            coerced.insert(name, value);
        }
        coerced
    }

    /// Bind then coerce
    pub fn prepare(&self, tool: &ToolDescriptor, call: &ToolCall) -> Map<String, Value> {
        self.coerce(tool, self.bind(tool, call))
    }

    /// Best-effort scalar coercion of a single value
    pub fn coerce_value(&self, field_name: &str, value: Value) -> Value {
        match value {
            Value::String(s) => self.coerce_str(field_name, &s).unwrap_or(Value::String(s)),
            other => other,
        }
    }

    fn coerce_str(&self, field_name: &str, s: &str) -> Option<Value> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => return Some(Value::Bool(true)),
            "false" | "0" | "no" | "off" => return Some(Value::Bool(false)),
            _ => {}
        }

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return parse_integer(s, 10);
        }

        if let Ok(f) = s.trim().parse::<f64>() {
            return coerce_float(f);
        }

        if self.rules.is_hex_field(field_name) {
            if let Some(digits) = s.strip_prefix(self.rules.hex_prefix.as_str()) {
                if digits.starts_with(['+', '-']) {
                    return None;
                }
                return parse_integer(digits, 16);
            }
        }

        None
    }
}

/// Integer within 64 bits, signed first
fn parse_integer(digits: &str, radix: u32) -> Option<Value> {
    if let Ok(i) = i64::from_str_radix(digits, radix) {
        return Some(Value::from(i));
    }
    u64::from_str_radix(digits, radix).ok().map(Value::from)
}

/// Whole values become integers; non-finite or out-of-range values stay strings
fn coerce_float(f: f64) -> Option<Value> {
    if !f.is_finite() {
        return None;
    }
    if f.fract() == 0.0 {
        if f >= i64::MIN as f64 && f < i64::MAX as f64 {
            return Some(Value::from(f as i64));
        }
        return None;
    }
    Number::from_f64(f).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ModelDescriptor, RawModel, RawType};
    use crate::tool::builder::ParameterSchemaBuilder;
    use serde_json::json;

    fn coercer() -> Coercer {
        Coercer::default()
    }

    fn abc_tool() -> ToolDescriptor {
        let raw = RawModel::new("Abc", "")
            .required("a", RawType::Integer, "")
            .required("b", RawType::Integer, "")
            .optional("c", RawType::Integer, "");
        ParameterSchemaBuilder::new("Other").build(ModelDescriptor::extract(&raw).unwrap())
    }

    #[test]
    fn test_boolean_words() {
        let c = coercer();
        for word in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(c.coerce_value("f", json!(word)), json!(true), "{}", word);
        }
        for word in ["false", "0", "No", "off"] {
            assert_eq!(c.coerce_value("f", json!(word)), json!(false), "{}", word);
        }
    }

    #[test]
    fn test_numeric_strings() {
        let c = coercer();
        assert_eq!(c.coerce_value("f", json!("42")), json!(42));
        assert_eq!(c.coerce_value("f", json!("3.14")), json!(3.14));
        assert_eq!(c.coerce_value("f", json!("2.0")), json!(2));
        assert_eq!(c.coerce_value("f", json!("-5")), json!(-5));
        assert_eq!(c.coerce_value("f", json!("1e3")), json!(1000));
        assert_eq!(c.coerce_value("f", json!(" 7.5 ")), json!(7.5));
    }

    #[test]
    fn test_large_integers() {
        let c = coercer();
        assert_eq!(
            c.coerce_value("f", json!("18446744073709551615")),
            json!(18446744073709551615u64)
        );
        // Too wide for 64 bits: left alone rather than rounded
        let huge = "123456789012345678901234567890";
        assert_eq!(c.coerce_value("f", json!(huge)), json!(huge));
        assert_eq!(c.coerce_value("f", json!("1e300")), json!("1e300"));
    }

    #[test]
    fn test_non_numeric_strings_unchanged() {
        let c = coercer();
        assert_eq!(c.coerce_value("f", json!("abc")), json!("abc"));
        assert_eq!(c.coerce_value("f", json!("")), json!(""));
        assert_eq!(c.coerce_value("f", json!("inf")), json!("inf"));
        assert_eq!(c.coerce_value("f", json!("NaN")), json!("NaN"));
        assert_eq!(
            c.coerce_value("account", json!("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH")),
            json!("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH")
        );
    }

    #[test]
    fn test_hex_identifiers() {
        let c = coercer();
        assert_eq!(c.coerce_value("channel_id", json!("0x1A")), json!(26));
        assert_eq!(c.coerce_value("ledger_hash", json!("0xff")), json!(255));
        assert_eq!(c.coerce_value("offer_sequence", json!("0x10")), json!(16));
        // Not an identifier field
        assert_eq!(c.coerce_value("memo", json!("0x1A")), json!("0x1A"));
        // Not valid hex
        assert_eq!(c.coerce_value("channel_id", json!("0xZZ")), json!("0xZZ"));
    }

    #[test]
    fn test_signed_hex_is_left_unchanged() {
        let c = coercer();
        assert_eq!(c.coerce_value("channel_id", json!("0x+1A")), json!("0x+1A"));
        assert_eq!(c.coerce_value("channel_id", json!("0x-1")), json!("0x-1"));
        assert_eq!(c.coerce_value("channel_id", json!("0x")), json!("0x"));
    }

    #[test]
    fn test_custom_hex_rules() {
        let c = Coercer::new(CoercionRules {
            hex_field_suffixes: vec!["_index".to_string()],
            hex_prefix: "#".to_string(),
        });
        assert_eq!(c.coerce_value("ledger_index", json!("#0a")), json!(10));
        assert_eq!(c.coerce_value("channel_id", json!("0x1A")), json!("0x1A"));
    }

    #[test]
    fn test_typed_values_are_unchanged() {
        let c = coercer();
        for value in [
            json!(42),
            json!(3.5),
            json!(true),
            json!(null),
            json!(["1", "2"]),
            json!({"currency": "USD"}),
        ] {
            assert_eq!(c.coerce_value("f", value.clone()), value);
        }
    }

    #[test]
    fn test_coercion_is_idempotent() {
        let c = coercer();
        for raw in ["true", "42", "3.14", "2.0", "abc", "0x1A"] {
            let once = c.coerce_value("node_id", json!(raw));
            let twice = c.coerce_value("node_id", once.clone());
            assert_eq!(once, twice, "{}", raw);
        }
    }

    #[test]
    fn test_positional_binding() {
        let c = coercer();
        let tool = abc_tool();

        let call = ToolCall::new(&tool.name)
            .with_positional(1)
            .with_positional(2)
            .with_positional(3);
        let bound = c.bind(&tool, &call);
        assert_eq!(bound.get("a"), Some(&json!(1)));
        assert_eq!(bound.get("b"), Some(&json!(2)));
        assert_eq!(bound.get("c"), Some(&json!(3)));

        let call = ToolCall::new(&tool.name).with_positional(1).with_positional(2);
        let bound = c.bind(&tool, &call);
        assert_eq!(bound.len(), 2);
        assert!(!bound.contains_key("c"));
    }

    #[test]
    fn test_extra_positional_values_dropped() {
        let c = coercer();
        let tool = abc_tool();
        let call = (0..6).fold(ToolCall::new(&tool.name), |call, i| call.with_positional(i));
        let bound = c.bind(&tool, &call);
        assert_eq!(bound.len(), 3);
    }

    #[test]
    fn test_named_wins_over_positional() {
        let c = coercer();
        let tool = abc_tool();
        let call = ToolCall::new(&tool.name)
            .with_positional(1)
            .with_arg("a", 10);
        assert_eq!(c.bind(&tool, &call).get("a"), Some(&json!(10)));
    }

    #[test]
    fn test_coerce_drops_unknown_and_null_optional() {
        let c = coercer();
        let tool = abc_tool();
        let call = ToolCall::new(&tool.name)
            .with_arg("a", "5")
            .with_arg("b", Value::Null)
            .with_arg("c", Value::Null)
            .with_arg("bogus", "x")
            .with_arg(META_KEY, json!({"progressToken": 1}));

        let coerced = c.prepare(&tool, &call);
        assert_eq!(coerced.get("a"), Some(&json!(5)));
        // Required null kept for validation
        assert_eq!(coerced.get("b"), Some(&Value::Null));
        assert!(!coerced.contains_key("c"));
        assert!(!coerced.contains_key("bogus"));
        assert!(!coerced.contains_key(META_KEY));
    }
}
