//! Tool domain module
//!
//! This module turns model descriptors into callable **tools** and runs
//! invocations against them.
//!
//! # Overview
//!
//! Every model in a catalog yields exactly one tool. The tool is described by
//! a [`ToolDescriptor`] (name, required/optional parameters, documentation),
//! invoked through a [`ToolCall`], and answers with an [`InvocationResult`].
//!
//! ```text
//! ┌─────────────────┐  build   ┌────────────────┐ register ┌──────────────┐
//! │ ModelDescriptor │─────────▶│ ToolDescriptor │─────────▶│ ToolRegistry │
//! └─────────────────┘          └────────────────┘          └──────┬───────┘
//!                                                                 │ invoke
//!                       ┌──────────┐     ┌───────────┐     ┌──────▼───────┐
//!                       │ Coercer  │────▶│ Validator │────▶│ ModelFactory │
//!                       └──────────┘     └───────────┘     └──────────────┘
//! ```
//!
//! # Tool Naming
//!
//! Tool names are `create_{category}_{model}`, lowercased:
//! `Payment` in `Transaction` becomes `create_transaction_payment`. Names are
//! unique within a registry; a second registration under the same name is
//! rejected.
//!
//! # Key Types
//!
//! - [`ParameterSchemaBuilder`]: synthesizes a [`ToolDescriptor`] from a model
//! - [`Coercer`]: binds positional arguments and converts stringified scalars
//! - [`ToolValidator`]: required-field and enum-membership checks
//! - [`ModelFactory`]: constructs the domain model from validated fields
//! - [`ToolRegistry`]: immutable, shareable set of tools with `invoke`
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`ModelCatalogPort`): Source of models and factories
//! - **Infrastructure** (`XrplModelCatalog`): Concrete model catalog

pub mod builder;
pub mod coercion;
pub mod entities;
pub mod registry;
pub mod traits;
pub mod value_objects;

pub use builder::ParameterSchemaBuilder;
pub use coercion::{Coercer, CoercionRules, META_KEY};
pub use entities::{ToolCall, ToolDescriptor};
pub use registry::{CategoryListing, RegisteredTool, ToolListing, ToolRegistry, ToolRegistryBuilder, ToolSummary};
pub use traits::{DefaultToolValidator, EnumViolation, ModelFactory, ModelInstance, ToolValidator, ValidationError};
pub use value_objects::{FailureKind, FieldSchema, InvocationResult, ToolFailure, ToolSchema};
