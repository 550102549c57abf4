//! Amount and currency models

use super::typed::{CatalogModel, entry};
use super::values::{IssuedCurrency, IssuedCurrencyAmount, MptAmount, MptCurrency, XrpCurrency};
use toolforge_application::CatalogEntry;
use toolforge_domain::{RawModel, RawType};

pub(super) fn amount_entries() -> Vec<CatalogEntry> {
    vec![
        entry::<IssuedCurrencyAmount>(
            RawModel::new(
                "IssuedCurrencyAmount",
                "Specifies an amount in an issued currency.",
            )
            .required("currency", RawType::String, "The three-letter or hex currency code.")
            .required("issuer", RawType::String, "The address of the account that issues the currency.")
            .required("value", RawType::String, "The quoted amount, as a decimal string."),
        ),
        entry::<MptAmount>(
            RawModel::new("MPTAmount", "Specifies an amount in an MPToken.")
                .required("mpt_issuance_id", RawType::String, "The 48-character hex ID of the MPToken issuance.")
                .required("value", RawType::String, "The amount of tokens, as an integer string."),
        ),
    ]
}

pub(super) fn currency_entries() -> Vec<CatalogEntry> {
    vec![
        entry::<XrpCurrency>(RawModel::new(
            "XRP",
            "Specifies XRP as a currency, without a value.",
        )),
        entry::<IssuedCurrency>(
            RawModel::new("IssuedCurrency", "Specifies an issued currency, without a value.")
                .required("currency", RawType::String, "The three-letter or hex currency code.")
                .required("issuer", RawType::String, "The address of the account that issues the currency."),
        ),
        entry::<MptCurrency>(
            RawModel::new("MPTCurrency", "Specifies an MPToken issuance, without a value.")
                .required("mpt_issuance_id", RawType::String, "The 48-character hex ID of the MPToken issuance."),
        ),
    ]
}

impl CatalogModel for IssuedCurrencyAmount {}

impl CatalogModel for MptAmount {}

impl CatalogModel for XrpCurrency {}

impl CatalogModel for IssuedCurrency {}

impl CatalogModel for MptCurrency {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::typed::TypedFactory;
    use serde_json::{Value, json};
    use toolforge_domain::{ModelFactory, ModelInstance};

    const ISSUER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    fn construct<T: CatalogModel>(fields: Value) -> Result<Value, String> {
        let fields = fields.as_object().cloned().unwrap();
        TypedFactory::<T>::new()
            .construct(fields)
            .map(|m| m.to_canonical())
    }

    #[test]
    fn test_issued_currency_amount() {
        // Coercion may already have turned the value into a number
        let canonical = construct::<IssuedCurrencyAmount>(json!({
            "currency": "USD",
            "issuer": ISSUER,
            "value": 12.5,
        }))
        .unwrap();
        assert_eq!(
            canonical,
            json!({"currency": "USD", "issuer": ISSUER, "value": "12.5"})
        );
    }

    #[test]
    fn test_xrp_is_not_an_issued_currency_code() {
        let err = construct::<IssuedCurrency>(json!({"currency": "XRP", "issuer": ISSUER}))
            .unwrap_err();
        assert!(err.contains("XRP"), "{}", err);
    }

    #[test]
    fn test_xrp_currency() {
        assert_eq!(
            construct::<XrpCurrency>(json!({})).unwrap(),
            json!({"currency": "XRP"})
        );
    }

    #[test]
    fn test_mpt_amount() {
        let id = "00000001A407AF5856CCF3C42619DAA925813FC955C72983";
        let canonical = construct::<MptAmount>(json!({"mpt_issuance_id": id, "value": "100"})).unwrap();
        assert_eq!(canonical, json!({"mpt_issuance_id": id, "value": "100"}));

        assert!(construct::<MptCurrency>(json!({"mpt_issuance_id": "abc"})).is_err());
    }
}
