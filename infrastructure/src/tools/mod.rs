//! Tool schema adapters
//!
//! Converts registry tool descriptors into the formats agent tool-use APIs
//! consume.

mod schema;

pub use schema::JsonSchemaToolConverter;
