//! Transaction models
//!
//! Canonical form: PascalCase keys led by `TransactionType`, the JSON shape
//! a signer expects.

use super::typed::{CatalogModel, entry, tagged};
use super::values::{Address, Amount, IssuedCurrencyAmount, Violations, XrpDrops, lenient};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use toolforge_application::CatalogEntry;
use toolforge_domain::{RawEnum, RawModel, RawType};

const TF_PARTIAL_PAYMENT: u32 = 0x0002_0000;
const TF_TRANSFERABLE: u32 = 0x0000_0008;
const MAX_TRANSFER_FEE: u32 = 50_000;

pub(super) fn entries() -> Vec<CatalogEntry> {
    vec![
        entry::<Payment>(payment_model()),
        entry::<TrustSet>(trust_set_model()),
        entry::<OfferCreate>(offer_create_model()),
        entry::<OfferCancel>(offer_cancel_model()),
        entry::<AccountSet>(account_set_model()),
        entry::<AccountDelete>(account_delete_model()),
        entry::<EscrowCreate>(escrow_create_model()),
        entry::<NFTokenMint>(nftoken_mint_model()),
    ]
}

fn amount_type() -> RawType {
    RawType::union([
        RawType::String,
        RawType::model("IssuedCurrencyAmount"),
        RawType::model("MPTAmount"),
    ])
}

/// Fields every transaction shares, declared first
fn transaction(name: &str, description: &str) -> RawModel {
    RawModel::new(name, description)
        .required("account", RawType::String, "The address of the account sending the transaction.")
        .optional(
            "fee",
            RawType::optional(RawType::String),
            "The amount of XRP, in drops, to be destroyed as a cost for distributing this transaction to the network.",
        )
        .optional(
            "sequence",
            RawType::optional(RawType::Integer),
            "The sequence number of the account submitting the transaction.",
        )
        .optional(
            "account_txn_id",
            RawType::optional(RawType::String),
            "Hash value identifying another transaction.",
        )
        .optional(
            "last_ledger_sequence",
            RawType::optional(RawType::Integer),
            "The highest ledger index this transaction can appear in.",
        )
        .optional(
            "source_tag",
            RawType::optional(RawType::Integer),
            "An arbitrary integer used to identify the reason for this payment.",
        )
        .optional(
            "ticket_sequence",
            RawType::optional(RawType::Integer),
            "The sequence number of the ticket to use in place of a sequence number.",
        )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct CommonFields {
    account: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fee: Option<XrpDrops>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    sequence: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none",
        rename(serialize = "AccountTxnID")
    )]
    account_txn_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    last_ledger_sequence: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    source_tag: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    ticket_sequence: Option<u32>,
}

impl CommonFields {
    fn check(&self, v: &mut Violations) {
        v.check(
            !(self.sequence.is_some_and(|s| s != 0) && self.ticket_sequence.is_some()),
            "ticket_sequence",
            "Cannot use both a sequence number and a ticket",
        );
    }
}

// ==================== Payment ====================

fn payment_flags() -> RawEnum {
    RawEnum::new("PaymentFlag", "Transactions of the Payment type support additional values in the Flags field.")
        .member("TF_NO_RIPPLE_DIRECT", 0x0001_0000, "Do not use the default path; only use paths included in the paths field.")
        .member("TF_PARTIAL_PAYMENT", TF_PARTIAL_PAYMENT, "Deliver less than the full amount if necessary.")
        .member("TF_LIMIT_QUALITY", 0x0004_0000, "Only take paths where all the conversions have an input:output ratio that is equal or better than the ratio of amount:send_max.")
}

fn payment_model() -> RawModel {
    transaction(
        "Payment",
        "Represents a Payment transaction, which sends value from one account to another.\n\
         Payments are also the only way to create accounts.",
    )
    .required("amount", amount_type(), "The amount of currency to deliver.")
    .required("destination", RawType::String, "The address of the account receiving the payment.")
    .optional("destination_tag", RawType::optional(RawType::Integer), "An arbitrary destination tag.")
    .optional("invoice_id", RawType::optional(RawType::String), "Arbitrary 256-bit hash representing a specific reason or identifier for this payment.")
    .optional("send_max", RawType::optional(amount_type()), "Highest amount of source currency this transaction is allowed to cost.")
    .optional("deliver_min", RawType::optional(amount_type()), "Minimum amount of destination currency this transaction should deliver (partial payments only).")
    .optional("flags", RawType::optional(RawType::list(payment_flags().into())), "Payment flags.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct Payment {
    #[serde(flatten)]
    common: CommonFields,
    amount: Amount,
    destination: Address,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    destination_tag: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none",
        rename(serialize = "InvoiceID")
    )]
    invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    send_max: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deliver_min: Option<Amount>,
    #[serde(default, deserialize_with = "lenient::opt_flags", skip_serializing_if = "Option::is_none")]
    flags: Option<u32>,
}

impl CatalogModel for Payment {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);

        let partial = self.flags.is_some_and(|f| f & TF_PARTIAL_PAYMENT != 0);
        v.check(
            !(self.amount.is_xrp() && self.destination == self.common.account),
            "destination",
            "An XRP payment transaction cannot have the same `destination` and `account`.",
        );
        v.check(
            !(self.amount.is_xrp() && self.send_max.is_none() && partial),
            "flags",
            "A partial payment transaction with XRP as the amount requires a `send_max`.",
        );
        v.check(
            self.deliver_min.is_none() || partial,
            "deliver_min",
            "A non-partial payment cannot have a `deliver_min`.",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "Payment", self)
    }
}

// ==================== TrustSet ====================

fn trust_set_flags() -> RawEnum {
    RawEnum::new("TrustSetFlag", "Transactions of the TrustSet type support additional values in the Flags field.")
        .member("TF_SETF_AUTH", 0x0001_0000, "Authorize the other party to hold currency issued by this account.")
        .member("TF_SET_NO_RIPPLE", 0x0002_0000, "Enable the No Ripple flag.")
        .member("TF_CLEAR_NO_RIPPLE", 0x0004_0000, "Disable the No Ripple flag.")
        .member("TF_SET_FREEZE", 0x0010_0000, "Freeze the trust line.")
        .member("TF_CLEAR_FREEZE", 0x0020_0000, "Unfreeze the trust line.")
}

fn trust_set_model() -> RawModel {
    transaction("TrustSet", "Create or modify a trust line linking two accounts.")
        .required("limit_amount", RawType::model("IssuedCurrencyAmount"), "Object defining the trust line to create or modify.")
        .optional("quality_in", RawType::optional(RawType::Integer), "Value incoming balances on this trust line at the ratio of this number per 1,000,000,000 units.")
        .optional("quality_out", RawType::optional(RawType::Integer), "Value outgoing balances on this trust line at the ratio of this number per 1,000,000,000 units.")
        .optional("flags", RawType::optional(RawType::list(trust_set_flags().into())), "TrustSet flags.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct TrustSet {
    #[serde(flatten)]
    common: CommonFields,
    limit_amount: IssuedCurrencyAmount,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    quality_in: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    quality_out: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_flags", skip_serializing_if = "Option::is_none")]
    flags: Option<u32>,
}

impl CatalogModel for TrustSet {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        v.check(
            !self.limit_amount.value.is_negative(),
            "limit_amount",
            "The trust line limit cannot be negative.",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "TrustSet", self)
    }
}

// ==================== OfferCreate / OfferCancel ====================

fn offer_create_flags() -> RawEnum {
    RawEnum::new("OfferCreateFlag", "Transactions of the OfferCreate type support additional values in the Flags field.")
        .member("TF_PASSIVE", 0x0001_0000, "Do not consume offers that exactly match this one.")
        .member("TF_IMMEDIATE_OR_CANCEL", 0x0002_0000, "Treat the offer as an Immediate or Cancel order.")
        .member("TF_FILL_OR_KILL", 0x0004_0000, "Treat the offer as a Fill or Kill order.")
        .member("TF_SELL", 0x0008_0000, "Exchange the entire taker_gets amount, even if it means obtaining more than the taker_pays amount.")
}

fn offer_create_model() -> RawModel {
    transaction("OfferCreate", "Places an Offer in the decentralized exchange.")
        .required("taker_gets", amount_type(), "The amount and type of currency being provided by the offer creator.")
        .required("taker_pays", amount_type(), "The amount and type of currency being requested by the offer creator.")
        .optional("expiration", RawType::optional(RawType::Integer), "Time after which the offer is no longer active, in seconds since the Ripple Epoch.")
        .optional("offer_sequence", RawType::optional(RawType::Integer), "An offer to delete first.")
        .optional("flags", RawType::optional(RawType::list(offer_create_flags().into())), "OfferCreate flags.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct OfferCreate {
    #[serde(flatten)]
    common: CommonFields,
    taker_gets: Amount,
    taker_pays: Amount,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    expiration: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    offer_sequence: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_flags", skip_serializing_if = "Option::is_none")]
    flags: Option<u32>,
}

impl CatalogModel for OfferCreate {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        v.check(
            !(self.taker_gets.is_xrp() && self.taker_pays.is_xrp()),
            "taker_pays",
            "An offer cannot exchange XRP for XRP.",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "OfferCreate", self)
    }
}

fn offer_cancel_model() -> RawModel {
    transaction("OfferCancel", "Removes an Offer object from the decentralized exchange.")
        .required("offer_sequence", RawType::Integer, "The sequence number of the offer to cancel.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct OfferCancel {
    #[serde(flatten)]
    common: CommonFields,
    #[serde(deserialize_with = "lenient::u32")]
    offer_sequence: u32,
}

impl CatalogModel for OfferCancel {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "OfferCancel", self)
    }
}

// ==================== AccountSet ====================

fn account_set_asf_flags() -> RawEnum {
    RawEnum::new("AccountSetAsfFlag", "Enum for AccountSet Flags.")
        .member("ASF_REQUIRE_DEST", 1, "Require a destination tag to send transactions to this account.")
        .member("ASF_REQUIRE_AUTH", 2, "Require authorization for users to hold balances issued by this address.")
        .member("ASF_DISALLOW_XRP", 3, "XRP should not be sent to this account.")
        .member("ASF_DISABLE_MASTER", 4, "Disallow use of the master key pair.")
        .member("ASF_ACCOUNT_TXN_ID", 5, "Track the ID of this account's most recent transaction.")
        .member("ASF_NO_FREEZE", 6, "Permanently give up the ability to freeze individual trust lines.")
        .member("ASF_GLOBAL_FREEZE", 7, "Freeze all assets issued by this account.")
        .member("ASF_DEFAULT_RIPPLE", 8, "Enable rippling on this account's trust lines by default.")
        .member("ASF_DEPOSIT_AUTH", 9, "Enable Deposit Authorization on this account.")
        .member("ASF_AUTHORIZED_NFTOKEN_MINTER", 10, "Allow another account to mint and burn tokens on behalf of this account.")
}

fn account_set_model() -> RawModel {
    transaction("AccountSet", "Modifies the properties of an account in the XRP Ledger.")
        .optional("clear_flag", RawType::optional(account_set_asf_flags().into()), "Disable a specific AccountSet flag.")
        .optional("set_flag", RawType::optional(account_set_asf_flags().into()), "Enable a specific AccountSet flag.")
        .optional("domain", RawType::optional(RawType::String), "Set the DNS domain of the account owner, as lowercase hex.")
        .optional("email_hash", RawType::optional(RawType::String), "Set an arbitrary 128-bit value (an md5 hash of an email address).")
        .optional("transfer_rate", RawType::optional(RawType::Integer), "Set the transfer fee to use for tokens issued by this account.")
        .optional("tick_size", RawType::optional(RawType::Integer), "Set the tick size to use when trading tokens issued by this account.")
        .optional("nftoken_minter", RawType::optional(RawType::String), "Set an account that can mint NFTs on behalf of this account.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct AccountSet {
    #[serde(flatten)]
    common: CommonFields,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    clear_flag: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    set_flag: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    email_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    transfer_rate: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    tick_size: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename(serialize = "NFTokenMinter")
    )]
    nftoken_minter: Option<Address>,
}

impl CatalogModel for AccountSet {
    fn check(&self) -> Result<(), String> {
        const ASF_AUTHORIZED_NFTOKEN_MINTER: u32 = 10;

        let mut v = Violations::default();
        self.common.check(&mut v);
        v.check(
            self.clear_flag.is_none() || self.clear_flag != self.set_flag,
            "clear_flag",
            "Must not be equal to the set_flag",
        );
        v.check(
            self.domain
                .as_ref()
                .is_none_or(|d| d.to_lowercase() == *d),
            "domain",
            "Domain must be in lowercase",
        );
        v.check(
            self.transfer_rate
                .is_none_or(|r| r == 0 || (1_000_000_000..=2_000_000_000).contains(&r)),
            "transfer_rate",
            "Must be between 1000000000 and 2000000000 or equal to 0",
        );
        v.check(
            self.tick_size.is_none_or(|t| t == 0 || (3..=15).contains(&t)),
            "tick_size",
            "Must be between 3 and 15 or equal to 0",
        );
        let sets_minter = self.set_flag == Some(ASF_AUTHORIZED_NFTOKEN_MINTER);
        v.check(
            !sets_minter || self.nftoken_minter.is_some(),
            "nftoken_minter",
            "Must be present if ASF_AUTHORIZED_NFTOKEN_MINTER is set",
        );
        v.check(
            sets_minter || self.nftoken_minter.is_none(),
            "nftoken_minter",
            "Will not set the minter unless ASF_AUTHORIZED_NFTOKEN_MINTER is set",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "AccountSet", self)
    }
}

// ==================== AccountDelete ====================

fn account_delete_model() -> RawModel {
    transaction(
        "AccountDelete",
        "Deletes an account and any objects it owns in the XRP Ledger, sending its remaining XRP to a destination.",
    )
    .required("destination", RawType::String, "The address of the account to which to send any remaining XRP.")
    .optional("destination_tag", RawType::optional(RawType::Integer), "Arbitrary destination tag.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct AccountDelete {
    #[serde(flatten)]
    common: CommonFields,
    destination: Address,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    destination_tag: Option<u32>,
}

impl CatalogModel for AccountDelete {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        v.check(
            self.destination != self.common.account,
            "destination",
            "Must not be equal to the account",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "AccountDelete", self)
    }
}

// ==================== EscrowCreate ====================

fn escrow_create_model() -> RawModel {
    transaction("EscrowCreate", "Locks up XRP until a specific time or condition is met.")
        .required("amount", RawType::String, "Amount of XRP, in drops, to deduct from the sender's balance and set aside in escrow.")
        .required("destination", RawType::String, "The address that should receive the escrowed XRP.")
        .optional("destination_tag", RawType::optional(RawType::Integer), "Arbitrary destination tag.")
        .optional("cancel_after", RawType::optional(RawType::Integer), "The time, in seconds since the Ripple Epoch, when this escrow expires.")
        .optional("finish_after", RawType::optional(RawType::Integer), "The time, in seconds since the Ripple Epoch, when the escrowed XRP can be released.")
        .optional("condition", RawType::optional(RawType::String), "Hex value representing a PREIMAGE-SHA-256 crypto-condition.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct EscrowCreate {
    #[serde(flatten)]
    common: CommonFields,
    amount: XrpDrops,
    destination: Address,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    destination_tag: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    cancel_after: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    finish_after: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
}

impl CatalogModel for EscrowCreate {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        if let (Some(cancel), Some(finish)) = (self.cancel_after, self.finish_after) {
            v.check(
                finish < cancel,
                "cancel_after",
                "The finish_after time must be before the cancel_after time.",
            );
        }
        v.check(
            self.finish_after.is_some() || self.condition.is_some(),
            "finish_after",
            "Either finish_after or condition must be specified.",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "EscrowCreate", self)
    }
}

// ==================== NFTokenMint ====================

fn nftoken_mint_flags() -> RawEnum {
    RawEnum::new("NFTokenMintFlag", "Transactions of the NFTokenMint type support additional values in the Flags field.")
        .member("TF_BURNABLE", 0x0000_0001, "Allow the issuer (or an entity authorized by the issuer) to destroy the minted NFToken.")
        .member("TF_ONLY_XRP", 0x0000_0002, "The minted NFToken can only be bought or sold for XRP.")
        .member("TF_TRUSTLINE", 0x0000_0004, "Automatically create trust lines to hold transfer fees.")
        .member("TF_TRANSFERABLE", TF_TRANSFERABLE, "The minted NFToken can be transferred to others.")
}

fn nftoken_mint_model() -> RawModel {
    transaction("NFTokenMint", "Creates a non-fungible token and adds it to the relevant NFTokenPage object of the minter.")
        .required("nftoken_taxon", RawType::Integer, "An arbitrary taxon, or shared identifier, for a series or collection of related NFTs.")
        .optional("issuer", RawType::optional(RawType::String), "The issuer of the token, if the sender of the account is issuing it on behalf of another account.")
        .optional("transfer_fee", RawType::optional(RawType::Integer), "The value specifies the fee charged by the issuer for secondary sales of the token, in units of 1/100,000.")
        .optional("uri", RawType::optional(RawType::String), "URI that points to the data and/or metadata associated with the NFT, hex-encoded.")
        .optional("flags", RawType::optional(RawType::list(nftoken_mint_flags().into())), "NFTokenMint flags.")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase"))]
struct NFTokenMint {
    #[serde(flatten)]
    common: CommonFields,
    #[serde(deserialize_with = "lenient::u32", rename(serialize = "NFTokenTaxon"))]
    nftoken_taxon: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issuer: Option<Address>,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    transfer_fee: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none",
        rename(serialize = "URI")
    )]
    uri: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_flags", skip_serializing_if = "Option::is_none")]
    flags: Option<u32>,
}

impl CatalogModel for NFTokenMint {
    fn check(&self) -> Result<(), String> {
        let mut v = Violations::default();
        self.common.check(&mut v);
        v.check(
            self.issuer.as_ref() != Some(&self.common.account),
            "issuer",
            "Must not be the same as the account",
        );
        v.check(
            self.transfer_fee.is_none_or(|fee| fee <= MAX_TRANSFER_FEE),
            "transfer_fee",
            "Must not be greater than 50000",
        );
        v.check(
            self.transfer_fee.is_none_or(|fee| fee == 0)
                || self.flags.is_some_and(|f| f & TF_TRANSFERABLE != 0),
            "transfer_fee",
            "Requires the TF_TRANSFERABLE flag",
        );
        v.check(
            self.uri.as_ref().is_none_or(|uri| uri.len() <= 512),
            "uri",
            "Must not be longer than 512 characters",
        );
        v.into_result()
    }

    fn canonical(&self) -> Result<Value, String> {
        tagged("TransactionType", "NFTokenMint", self)
    }
}
