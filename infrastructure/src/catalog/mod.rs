//! XRPL model catalog
//!
//! Implements [`ModelCatalogPort`] over a curated set of XRP Ledger models,
//! grouped into five categories:
//!
//! | Category | Models |
//! |----------|--------|
//! | `Transaction` | Payment, TrustSet, OfferCreate, OfferCancel, AccountSet, AccountDelete, EscrowCreate, NFTokenMint |
//! | `Request` | AccountInfo, AccountLines, AccountObjects, AccountTx, Ledger, Fee, ServerInfo, Ping |
//! | `Amount` | IssuedCurrencyAmount, MPTAmount |
//! | `Currency` | XRP, IssuedCurrency, MPTCurrency |
//! | `Other` | AuthAccount, PathStep, XChainBridge |
//!
//! Each model is a serde struct paired with its declared metadata; see
//! [`typed`] for how the two meet.

mod amounts;
mod other;
mod requests;
mod transactions;
pub mod typed;
mod values;

use toolforge_application::{CatalogEntry, ModelCatalogPort};

pub use typed::{CatalogModel, TypedFactory};

const CATEGORIES: [&str; 5] = ["Transaction", "Request", "Amount", "Currency", "Other"];

/// The XRPL model catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct XrplModelCatalog;

impl XrplModelCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl ModelCatalogPort for XrplModelCatalog {
    fn name(&self) -> &str {
        "xrpl"
    }

    fn categories(&self) -> Vec<String> {
        CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    fn entries(&self, category: &str) -> Vec<CatalogEntry> {
        match category {
            "Transaction" => transactions::entries(),
            "Request" => requests::entries(),
            "Amount" => amounts::amount_entries(),
            "Currency" => amounts::currency_entries(),
            "Other" => other::entries(),
            _ => Vec::new(),
        }
    }
}
