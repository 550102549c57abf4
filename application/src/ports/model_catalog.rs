//! Model catalog port.
//!
//! The catalog is the source of every model the registry turns into a tool:
//! its static metadata ([`RawModel`]) and the factory that constructs and
//! serializes instances. Catalog contents are grouped by category, and the
//! category becomes part of each tool's name.

use std::fmt;
use std::sync::Arc;
use toolforge_domain::{ModelFactory, RawModel};

/// One model offered by a catalog
#[derive(Clone)]
pub struct CatalogEntry {
    pub model: RawModel,
    pub factory: Arc<dyn ModelFactory>,
}

impl CatalogEntry {
    pub fn new(model: RawModel, factory: Arc<dyn ModelFactory>) -> Self {
        Self { model, factory }
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("model", &self.model.name)
            .finish_non_exhaustive()
    }
}

/// Port for enumerating domain models by category.
pub trait ModelCatalogPort: Send + Sync {
    /// Catalog name, for logging
    fn name(&self) -> &str;

    /// Category names, in registration order
    fn categories(&self) -> Vec<String>;

    /// Models of one category, in registration order
    fn entries(&self, category: &str) -> Vec<CatalogEntry>;
}
