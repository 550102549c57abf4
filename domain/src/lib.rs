//! Domain layer for toolforge
//!
//! This crate contains the core logic of the tool registry: model metadata,
//! tool synthesis, argument coercion, validation and invocation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Schema
//!
//! A model catalog declares each model as a [`RawModel`]. Its field
//! annotations are resolved into [`TypeShape`]s and collected into a
//! [`ModelDescriptor`].
//!
//! ## Tool
//!
//! Each descriptor is turned into a [`ToolDescriptor`] and registered in a
//! [`ToolRegistry`], which validates and constructs models on invocation.

pub mod config;
pub mod core;
pub mod schema;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use schema::{
    EnumDescriptor, EnumMember, FieldDefault, FieldDescriptor, ModelDescriptor, RawEnum,
    RawEnumMember, RawField, RawModel, RawType, ScalarKind, TypeShape,
};
pub use tool::{
    CategoryListing, Coercer, CoercionRules, DefaultToolValidator, EnumViolation, FailureKind,
    FieldSchema, InvocationResult, ModelFactory, ModelInstance, ParameterSchemaBuilder, ToolCall,
    ToolDescriptor, ToolFailure, ToolListing, ToolRegistry, ToolRegistryBuilder, ToolSchema,
    ToolSummary, ToolValidator, ValidationError,
};
