//! Nested structures that appear inside transactions

use super::typed::{CatalogModel, entry};
use super::values::{Address, Currency, Violations, lenient};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use toolforge_application::CatalogEntry;
use toolforge_domain::{RawModel, RawType};

pub(super) fn entries() -> Vec<CatalogEntry> {
    vec![
        entry::<AuthAccount>(
            RawModel::new("AuthAccount", "Represents one entry in a list of AuthAccounts used in AMMBid transaction.")
                .required("account", RawType::String, "The address of the account to authorize."),
        ),
        entry::<PathStep>(
            RawModel::new("PathStep", "A PathStep represents an individual step along a Path.")
                .optional("account", RawType::optional(RawType::String), "The account to ripple through.")
                .optional("currency", RawType::optional(RawType::String), "The currency to convert to at this step.")
                .optional("issuer", RawType::optional(RawType::String), "The issuer of the currency at this step."),
        ),
        entry::<XChainBridge>(xchain_bridge_model()),
    ]
}

fn issue_type() -> RawType {
    RawType::union([
        RawType::model("XRP"),
        RawType::model("IssuedCurrency"),
        RawType::model("MPTCurrency"),
    ])
}

// ==================== AuthAccount ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AuthAccount {
    account: Address,
}

impl CatalogModel for AuthAccount {
    fn canonical(&self) -> Result<Value, String> {
        Ok(json!({"AuthAccount": {"Account": self.account.as_str()}}))
    }
}

// ==================== PathStep ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PathStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account: Option<Address>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issuer: Option<Address>,
}

impl CatalogModel for PathStep {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        v.check(
            self.account.is_some() || self.currency.is_some() || self.issuer.is_some(),
            "account",
            "A path step needs at least one of account, currency or issuer",
        );
        v.check(
            self.account.is_none() || (self.currency.is_none() && self.issuer.is_none()),
            "account",
            "Cannot set account if currency or issuer are set",
        );
        v.check(
            !(self.currency.as_deref() == Some("XRP") && self.issuer.is_some()),
            "issuer",
            "Cannot have issuer if currency is XRP",
        );
        v.into_result()
    }
}

// ==================== XChainBridge ====================

fn xchain_bridge_model() -> RawModel {
    RawModel::new(
        "XChainBridge",
        "A XChainBridge represents a cross-chain bridge.",
    )
    .required("locking_chain_door", RawType::String, "The door account on the locking chain.")
    .required("locking_chain_issue", issue_type(), "The asset that is locked and unlocked on the locking chain.")
    .required("issuing_chain_door", RawType::String, "The door account on the issuing chain.")
    .required("issuing_chain_issue", issue_type(), "The asset that is minted and burned on the issuing chain.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct XChainBridge {
    locking_chain_door: Address,
    locking_chain_issue: Currency,
    issuing_chain_door: Address,
    issuing_chain_issue: Currency,
}

impl CatalogModel for XChainBridge {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        v.check(
            self.locking_chain_door != self.issuing_chain_door,
            "issuing_chain_door",
            "Cannot have the same door accounts on the locking and issuing chain.",
        );
        v.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::typed::TypedFactory;
    use toolforge_domain::{ModelFactory, ModelInstance};

    const ALICE: &str = "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH";
    const BOB: &str = "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe";

    fn construct<T: CatalogModel>(fields: Value) -> Result<Value, String> {
        let fields = fields.as_object().cloned().unwrap();
        TypedFactory::<T>::new()
            .construct(fields)
            .map(|m| m.to_canonical())
    }

    #[test]
    fn test_auth_account_wraps_account() {
        assert_eq!(
            construct::<AuthAccount>(json!({"account": ALICE})).unwrap(),
            json!({"AuthAccount": {"Account": ALICE}})
        );
    }

    #[test]
    fn test_path_step_rules() {
        assert_eq!(
            construct::<PathStep>(json!({"currency": "USD", "issuer": BOB})).unwrap(),
            json!({"currency": "USD", "issuer": BOB})
        );

        let err = construct::<PathStep>(json!({})).unwrap_err();
        assert!(err.contains("at least one"));

        let err = construct::<PathStep>(json!({"account": ALICE, "currency": "USD"})).unwrap_err();
        assert_eq!(err, "account: Cannot set account if currency or issuer are set");
    }

    #[test]
    fn test_xchain_bridge() {
        let canonical = construct::<XChainBridge>(json!({
            "locking_chain_door": ALICE,
            "locking_chain_issue": {"currency": "XRP"},
            "issuing_chain_door": BOB,
            "issuing_chain_issue": {"currency": "XRP"},
        }))
        .unwrap();
        assert_eq!(canonical["LockingChainDoor"], json!(ALICE));
        assert_eq!(canonical["IssuingChainIssue"], json!({"currency": "XRP"}));

        let err = construct::<XChainBridge>(json!({
            "locking_chain_door": ALICE,
            "locking_chain_issue": {"currency": "XRP"},
            "issuing_chain_door": ALICE,
            "issuing_chain_issue": {"currency": "XRP"},
        }))
        .unwrap_err();
        assert_eq!(
            err,
            "issuing_chain_door: Cannot have the same door accounts on the locking and issuing chain."
        );
    }
}
