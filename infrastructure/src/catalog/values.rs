//! XRPL value types shared by catalog models
//!
//! Addresses, currency codes and amounts validate themselves while being
//! deserialized, so a malformed value is rejected with its own message before
//! a model's cross-field checks run.
//!
//! Deserializers are lenient about scalar representation: argument coercion
//! may have turned `"10"` into `10` or `"1"` into `true`, and both still have
//! to land in a string-typed XRPL field.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const ADDRESS_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";
const LEDGER_SHORTCUTS: [&str; 3] = ["validated", "closed", "current"];

/// Textual form of a scalar JSON value
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        _ => None,
    }
}

/// Unsigned integer value of a scalar JSON value
fn unsigned(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::Bool(b) => Some(u64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    text(&value).ok_or_else(|| D::Error::custom(format!("expected a string, got {}", value)))
}

/// `deserialize_with` helpers for plain scalar fields
pub(crate) mod lenient {
    use super::*;

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => text(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a string, got {}", value))),
        }
    }

    pub fn u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(d)?;
        to_u32(&value).map_err(D::Error::custom)
    }

    pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => to_u32(&value).map(Some).map_err(D::Error::custom),
        }
    }

    pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(i64::from(b))),
            Some(value) => {
                let parsed = match &value {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                };
                parsed
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
            }
        }
    }

    /// A flag value or a list of flag values, combined into one bit set
    pub fn opt_flags<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .try_fold(0u32, |acc, item| to_u32(item).map(|flag| acc | flag))
                .map(Some)
                .map_err(D::Error::custom),
            Some(value) => to_u32(&value).map(Some).map_err(D::Error::custom),
        }
    }

    fn to_u32(value: &Value) -> Result<u32, String> {
        unsigned(value)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| format!("expected an unsigned 32-bit integer, got {}", value))
    }
}

/// Collects cross-field rule violations of a model
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(format!("{}: {}", field, message));
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0.join("; "))
        }
    }
}

/// Classic XRPL account address (`r...`, base58)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(s: String) -> Result<Self, String> {
        let valid = s.starts_with('r')
            && (25..=35).contains(&s.len())
            && s.chars().all(|c| ADDRESS_ALPHABET.contains(c));
        if valid {
            Ok(Self(s))
        } else {
            Err(format!("Invalid classic address: '{}'", s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Address::parse(deserialize_text(d)?).map_err(D::Error::custom)
    }
}

/// Non-XRP currency code: three ISO-like characters or 40 hex digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.eq_ignore_ascii_case("XRP") {
            return Err("XRP cannot be used as an issued currency code".to_string());
        }
        let iso = s.len() == 3
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || "?!@#$%^&*<>(){}[]|".contains(c));
        let hex = s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit());
        if iso || hex {
            Ok(Self(s))
        } else {
            Err(format!("Invalid currency code: '{}'", s))
        }
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        CurrencyCode::parse(deserialize_text(d)?).map_err(D::Error::custom)
    }
}

/// 192-bit MPT issuance identifier, 48 hex digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MptIssuanceId(String);

impl<'de> Deserialize<'de> for MptIssuanceId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = deserialize_text(d)?;
        if s.len() == 48 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s))
        } else {
            Err(D::Error::custom(format!("Invalid MPT issuance ID: '{}'", s)))
        }
    }
}

/// XRP amount in drops, rendered as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct XrpDrops(String);

impl XrpDrops {
    fn from_value(value: &Value) -> Result<Self, String> {
        unsigned(value)
            .map(|drops| Self(drops.to_string()))
            .ok_or_else(|| format!("Invalid XRP amount: {} (expected a non-negative number of drops)", value))
    }
}

impl<'de> Deserialize<'de> for XrpDrops {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        XrpDrops::from_value(&Value::deserialize(d)?).map_err(D::Error::custom)
    }
}

/// Decimal amount value, kept as the caller's string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecimalValue(String);

impl DecimalValue {
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }
}

impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = deserialize_text(d)?;
        match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Self(s.trim().to_string())),
            _ => Err(D::Error::custom(format!("Invalid amount value: '{}'", s))),
        }
    }
}

/// Non-negative integer value, kept as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntegerValue(String);

impl<'de> Deserialize<'de> for IntegerValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        unsigned(&value)
            .map(|n| Self(n.to_string()))
            .ok_or_else(|| D::Error::custom(format!("Invalid integer value: {}", value)))
    }
}

/// Amount of an issued (non-XRP) currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCurrencyAmount {
    pub currency: CurrencyCode,
    pub issuer: Address,
    pub value: DecimalValue,
}

/// Amount of a multi-purpose token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MptAmount {
    pub mpt_issuance_id: MptIssuanceId,
    pub value: IntegerValue,
}

/// Any XRPL amount: XRP drops, issued currency or MPT
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Xrp(XrpDrops),
    Issued(IssuedCurrencyAmount),
    Mpt(MptAmount),
}

impl Amount {
    pub fn is_xrp(&self) -> bool {
        matches!(self, Amount::Xrp(_))
    }

    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(ref map) if map.contains_key("mpt_issuance_id") => {
                serde_json::from_value(value).map(Amount::Mpt).map_err(|e| e.to_string())
            }
            Value::Object(_) => serde_json::from_value(value)
                .map(Amount::Issued)
                .map_err(|e| e.to_string()),
            other => XrpDrops::from_value(&other).map(Amount::Xrp),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Amount::from_value(Value::deserialize(d)?).map_err(D::Error::custom)
    }
}

/// The XRP currency; serializes as `{"currency": "XRP"}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct XrpCurrency {}

impl Serialize for XrpCurrency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("currency", "XRP")?;
        map.end()
    }
}

/// An issued currency, identified by code and issuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCurrency {
    pub currency: CurrencyCode,
    pub issuer: Address,
}

/// A multi-purpose token currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MptCurrency {
    pub mpt_issuance_id: MptIssuanceId,
}

/// Any XRPL currency
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Currency {
    Xrp(XrpCurrency),
    Issued(IssuedCurrency),
    Mpt(MptCurrency),
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        let Value::Object(map) = &value else {
            return Err(D::Error::custom(format!("expected a currency object, got {}", value)));
        };
        let result = if map.contains_key("mpt_issuance_id") {
            serde_json::from_value(value).map(Currency::Mpt)
        } else if map.get("currency").and_then(Value::as_str) == Some("XRP") && !map.contains_key("issuer") {
            Ok(Currency::Xrp(XrpCurrency::default()))
        } else {
            serde_json::from_value(value).map(Currency::Issued)
        };
        result.map_err(D::Error::custom)
    }
}

/// Ledger selector: a sequence number or a shortcut name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LedgerIndex {
    Sequence(u32),
    Shortcut(String),
}

impl<'de> Deserialize<'de> for LedgerIndex {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        if let Value::String(s) = &value {
            if LEDGER_SHORTCUTS.contains(&s.as_str()) {
                return Ok(LedgerIndex::Shortcut(s.clone()));
            }
        }
        let sequence = match &value {
            Value::Number(_) | Value::String(_) => unsigned(&value)
                .and_then(|n| u32::try_from(n).ok())
                .map(LedgerIndex::Sequence),
            _ => None,
        };
        sequence.ok_or_else(|| {
            D::Error::custom(format!(
                "Invalid ledger_index: {} (expected a ledger sequence or one of {})",
                value,
                LEDGER_SHORTCUTS.join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALICE: &str = "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH";

    #[test]
    fn test_address() {
        assert!(Address::parse(ALICE.to_string()).is_ok());
        assert_eq!(
            Address::parse("bob".to_string()).unwrap_err(),
            "Invalid classic address: 'bob'"
        );
        // 'O' and '0' are not part of the alphabet
        assert!(Address::parse("rO0000000000000000000000000".to_string()).is_err());
    }

    #[test]
    fn test_currency_code() {
        assert!(CurrencyCode::parse("USD".to_string()).is_ok());
        assert!(CurrencyCode::parse("0158415500000000C1F76FF6ECB0BAC600000000".to_string()).is_ok());
        assert!(CurrencyCode::parse("xrp".to_string()).is_err());
        assert!(CurrencyCode::parse("DOLLAR".to_string()).is_err());
    }

    #[test]
    fn test_amount_variants() {
        assert_eq!(
            serde_json::from_value::<Amount>(json!(1000)).unwrap(),
            Amount::Xrp(XrpDrops("1000".to_string()))
        );
        assert_eq!(
            serde_json::from_value::<Amount>(json!("25")).unwrap(),
            Amount::Xrp(XrpDrops("25".to_string()))
        );
        assert!(serde_json::from_value::<Amount>(json!(-5)).is_err());
        // "1" arrives as `true` after coercion
        assert_eq!(
            serde_json::from_value::<Amount>(json!(true)).unwrap(),
            Amount::Xrp(XrpDrops("1".to_string()))
        );

        let issued: Amount = serde_json::from_value(json!({
            "currency": "USD", "issuer": ALICE, "value": 10.5
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&issued).unwrap(),
            json!({"currency": "USD", "issuer": ALICE, "value": "10.5"})
        );
    }

    #[test]
    fn test_currency_variants() {
        let xrp: Currency = serde_json::from_value(json!({"currency": "XRP"})).unwrap();
        assert_eq!(serde_json::to_value(&xrp).unwrap(), json!({"currency": "XRP"}));

        let usd: Currency = serde_json::from_value(json!({"currency": "USD", "issuer": ALICE})).unwrap();
        assert!(matches!(usd, Currency::Issued(_)));

        assert!(serde_json::from_value::<Currency>(json!("XRP")).is_err());
    }

    #[test]
    fn test_ledger_index() {
        assert_eq!(
            serde_json::from_value::<LedgerIndex>(json!("validated")).unwrap(),
            LedgerIndex::Shortcut("validated".to_string())
        );
        assert_eq!(
            serde_json::from_value::<LedgerIndex>(json!(1234)).unwrap(),
            LedgerIndex::Sequence(1234)
        );
        assert!(serde_json::from_value::<LedgerIndex>(json!("latest")).is_err());
        assert!(serde_json::from_value::<LedgerIndex>(json!(true)).is_err());
    }

    #[test]
    fn test_lenient_flags() {
        #[derive(Deserialize)]
        struct Flagged {
            #[serde(default, deserialize_with = "lenient::opt_flags")]
            flags: Option<u32>,
        }

        let combined: Flagged = serde_json::from_value(json!({"flags": [1, 8]})).unwrap();
        assert_eq!(combined.flags, Some(9));
        let single: Flagged = serde_json::from_value(json!({"flags": 2})).unwrap();
        assert_eq!(single.flags, Some(2));
        let absent: Flagged = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.flags, None);
    }

    #[test]
    fn test_violations() {
        let mut v = Violations::default();
        v.check(true, "a", "fine");
        assert!(std::mem::take(&mut v).into_result().is_ok());

        v.check(false, "tick_size", "Must be between 3 and 15 or equal to 0");
        v.check(false, "domain", "Domain must be in lowercase");
        assert_eq!(
            v.into_result().unwrap_err(),
            "tick_size: Must be between 3 and 15 or equal to 0; domain: Domain must be in lowercase"
        );
    }
}
