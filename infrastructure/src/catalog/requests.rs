//! Request models
//!
//! Canonical form: the snake_case request body led by its `method`.

use super::typed::{CatalogModel, entry, tagged};
use super::values::{Address, LedgerIndex, Violations, lenient};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use toolforge_application::CatalogEntry;
use toolforge_domain::{RawEnum, RawModel, RawType};

pub(super) fn entries() -> Vec<CatalogEntry> {
    vec![
        entry::<AccountInfo>(account_info_model()),
        entry::<AccountLines>(account_lines_model()),
        entry::<AccountObjects>(account_objects_model()),
        entry::<AccountTx>(account_tx_model()),
        entry::<Ledger>(ledger_model()),
        entry::<Fee>(RawModel::new(
            "Fee",
            "Reports the current state of the open-ledger requirements for the transaction cost.",
        )),
        entry::<ServerInfo>(RawModel::new(
            "ServerInfo",
            "Asks the server for a human-readable version of various information about the server being queried.",
        )),
        entry::<Ping>(RawModel::new(
            "Ping",
            "Returns an acknowledgement, to check connectivity or measure round-trip latency.",
        )),
    ]
}

/// Ledger selection fields shared by ledger-scoped requests
fn with_ledger(model: RawModel) -> RawModel {
    model
        .optional(
            "ledger_hash",
            RawType::optional(RawType::String),
            "A 20-byte hex string for the ledger version to use.",
        )
        .optional(
            "ledger_index",
            RawType::optional(RawType::union([RawType::String, RawType::Integer])),
            "The ledger index of the ledger to use, or a shortcut string (validated, closed, current).",
        )
}

fn limit_and_marker(model: RawModel) -> RawModel {
    model
        .optional("limit", RawType::optional(RawType::Integer), "Limit the number of results to retrieve.")
        .optional("marker", RawType::optional(RawType::Any), "Value from a previous paginated response.")
}

// ==================== AccountInfo ====================

fn account_info_model() -> RawModel {
    with_ledger(RawModel::new(
        "AccountInfo",
        "Retrieves information about an account, its activity, and its XRP balance.",
    ))
    .required("account", RawType::String, "A unique identifier for the account, most commonly the account's address.")
    .optional("queue", RawType::optional(RawType::Boolean), "Also return information on queued transactions.")
    .optional("signer_lists", RawType::optional(RawType::Boolean), "Also return any SignerList objects associated with this account.")
    .optional("strict", RawType::optional(RawType::Boolean), "Only accept an address or public key for the account parameter.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_index: Option<LedgerIndex>,
    account: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    queue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signer_lists: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strict: Option<bool>,
}

impl CatalogModel for AccountInfo {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        v.check(
            !(self.queue == Some(true)
                && matches!(&self.ledger_index, Some(LedgerIndex::Shortcut(s)) if s != "current")),
            "queue",
            "Queued transactions can only be requested for the current ledger",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "account_info", self)
    }
}

// ==================== AccountLines ====================

fn account_lines_model() -> RawModel {
    limit_and_marker(
        with_ledger(RawModel::new(
            "AccountLines",
            "Returns information about an account's trust lines, which contain balances in all non-XRP currencies and assets.",
        ))
        .required("account", RawType::String, "The account to look up.")
        .optional("peer", RawType::optional(RawType::String), "The address of a second account. If provided, show only lines of trust connecting the two accounts."),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountLines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_index: Option<LedgerIndex>,
    account: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    peer: Option<Address>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker: Option<Value>,
}

impl CatalogModel for AccountLines {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "account_lines", self)
    }
}

// ==================== AccountObjects ====================

fn account_object_type() -> RawEnum {
    RawEnum::new("AccountObjectType", "Represents the object types that an AccountObjectsRequest can ask for.")
        .member("CHECK", "check", "")
        .member("DEPOSIT_PREAUTH", "deposit_preauth", "")
        .member("ESCROW", "escrow", "")
        .member("NFT_OFFER", "nft_offer", "")
        .member("OFFER", "offer", "")
        .member("PAYMENT_CHANNEL", "payment_channel", "")
        .member("SIGNER_LIST", "signer_list", "")
        .member("STATE", "state", "")
        .member("TICKET", "ticket", "")
}

fn account_objects_model() -> RawModel {
    limit_and_marker(
        with_ledger(RawModel::new(
            "AccountObjects",
            "Returns the raw ledger format for all objects owned by an account.",
        ))
        .required("account", RawType::String, "A unique identifier for the account.")
        .optional("type", RawType::optional(account_object_type().into()), "If included, filter results to include only this type of ledger object.")
        .optional("deletion_blockers_only", RawType::optional(RawType::Boolean), "Only return objects that would block this account from being deleted."),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountObjects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_index: Option<LedgerIndex>,
    account: Address,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deletion_blockers_only: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker: Option<Value>,
}

impl CatalogModel for AccountObjects {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "account_objects", self)
    }
}

// ==================== AccountTx ====================

fn account_tx_model() -> RawModel {
    limit_and_marker(
        with_ledger(RawModel::new(
            "AccountTx",
            "Retrieves a list of transactions that involved the specified account.",
        ))
        .required("account", RawType::String, "A unique identifier for the account.")
        .optional("ledger_index_min", RawType::optional(RawType::Integer), "Use to specify the earliest ledger to include transactions from. -1 means the earliest validated ledger.")
        .optional("ledger_index_max", RawType::optional(RawType::Integer), "Use to specify the most recent ledger to include transactions from. -1 means the most recent validated ledger.")
        .optional("binary", RawType::optional(RawType::Boolean), "Return transactions as hex strings instead of JSON.")
        .optional("forward", RawType::optional(RawType::Boolean), "Return values indexed with the oldest ledger first."),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountTx {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_index: Option<LedgerIndex>,
    account: Address,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    ledger_index_min: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64", skip_serializing_if = "Option::is_none")]
    ledger_index_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    binary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    forward: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker: Option<Value>,
}

impl CatalogModel for AccountTx {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        for (field, bound) in [
            ("ledger_index_min", self.ledger_index_min),
            ("ledger_index_max", self.ledger_index_max),
        ] {
            v.check(bound.is_none_or(|b| b >= -1), field, "Must be a ledger index or -1");
        }
        if let (Some(min), Some(max)) = (self.ledger_index_min, self.ledger_index_max) {
            v.check(
                min == -1 || max == -1 || min <= max,
                "ledger_index_min",
                "Must not be greater than ledger_index_max",
            );
        }
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "account_tx", self)
    }
}

// ==================== Ledger ====================

fn ledger_model() -> RawModel {
    with_ledger(RawModel::new("Ledger", "Retrieves information about the public ledger."))
        .optional("transactions", RawType::optional(RawType::Boolean), "Return information on transactions in the specified ledger version.")
        .optional("expand", RawType::optional(RawType::Boolean), "Provide full JSON-formatted information for transaction/account information instead of only hashes.")
        .optional("owner_funds", RawType::optional(RawType::Boolean), "Include owner_funds field in the metadata of OfferCreate transactions.")
        .optional("binary", RawType::optional(RawType::Boolean), "Represent transactions in binary format instead of JSON.")
        .optional("queue", RawType::optional(RawType::Boolean), "Include an array of queued transactions in the results.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Ledger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_index: Option<LedgerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transactions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expand: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner_funds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    binary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    queue: Option<bool>,
}

impl CatalogModel for Ledger {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "ledger", self)
    }
}

// ==================== Fee / ServerInfo / Ping ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Fee {}

impl CatalogModel for Fee {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "fee", self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerInfo {}

impl CatalogModel for ServerInfo {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "server_info", self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Ping {}

impl CatalogModel for Ping {
    fn canonical(&self) -> Result<Value, String> {
        tagged("method", "ping", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::typed::TypedFactory;
    use serde_json::json;
    use toolforge_domain::{ModelDescriptor, ModelFactory, ModelInstance};

    const ALICE: &str = "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH";

    fn construct<T: CatalogModel>(fields: Value) -> Result<Value, String> {
        let fields = fields.as_object().cloned().unwrap();
        TypedFactory::<T>::new()
            .construct(fields)
            .map(|m| m.to_canonical())
    }

    #[test]
    fn test_every_model_extracts() {
        for entry in entries() {
            assert!(
                ModelDescriptor::extract(&entry.model).is_ok(),
                "{}",
                entry.model.name
            );
        }
    }

    #[test]
    fn test_account_info_canonical() {
        let canonical = construct::<AccountInfo>(json!({
            "account": ALICE,
            "ledger_index": "validated",
            "strict": true,
        }))
        .unwrap();
        assert_eq!(
            canonical,
            json!({
                "method": "account_info",
                "ledger_index": "validated",
                "account": ALICE,
                "strict": true,
            })
        );
    }

    #[test]
    fn test_ledger_index_accepts_sequence_strings() {
        let canonical = construct::<Ledger>(json!({"ledger_index": "123"})).unwrap();
        assert_eq!(canonical["ledger_index"], json!(123));

        let err = construct::<Ledger>(json!({"ledger_index": "latest"})).unwrap_err();
        assert!(err.contains("Invalid ledger_index"), "{}", err);
    }

    #[test]
    fn test_account_objects_type_key() {
        let canonical = construct::<AccountObjects>(json!({
            "account": ALICE,
            "type": "escrow",
            "limit": "10",
        }))
        .unwrap();
        assert_eq!(canonical["type"], json!("escrow"));
        assert_eq!(canonical["limit"], json!(10));
        assert!(canonical.get("object_type").is_none());
    }

    #[test]
    fn test_account_tx_bounds() {
        let canonical = construct::<AccountTx>(json!({
            "account": ALICE,
            "ledger_index_min": -1,
            "ledger_index_max": 500,
        }))
        .unwrap();
        assert_eq!(canonical["ledger_index_min"], json!(-1));

        let err = construct::<AccountTx>(json!({
            "account": ALICE,
            "ledger_index_min": 600,
            "ledger_index_max": 500,
        }))
        .unwrap_err();
        assert_eq!(err, "ledger_index_min: Must not be greater than ledger_index_max");
    }

    #[test]
    fn test_queue_requires_current_ledger() {
        let err = construct::<AccountInfo>(json!({
            "account": ALICE,
            "queue": true,
            "ledger_index": "validated",
        }))
        .unwrap_err();
        assert!(err.starts_with("queue:"));
    }

    #[test]
    fn test_zero_field_requests() {
        assert_eq!(construct::<Fee>(json!({})).unwrap(), json!({"method": "fee"}));
        assert_eq!(construct::<Ping>(json!({})).unwrap(), json!({"method": "ping"}));
        assert_eq!(
            construct::<ServerInfo>(json!({})).unwrap(),
            json!({"method": "server_info"})
        );
    }
}
