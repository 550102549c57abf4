//! Model schema module
//!
//! Static metadata about domain models, in three steps:
//!
//! ```text
//! ┌──────────────┐ resolve ┌──────────────┐ extract ┌─────────────────┐
//! │ RawType      │────────▶│ TypeShape    │────────▶│ ModelDescriptor │
//! │ (annotation) │         │ (normalized) │         │ (fields, docs)  │
//! └──────────────┘         └──────────────┘         └─────────────────┘
//! ```
//!
//! - [`RawModel`] / [`RawType`]: what a model catalog declares
//! - [`TypeShape`]: `Scalar | Optional | List | EnumRef`, resolved recursively
//! - [`ModelDescriptor`]: ordered, validated fields ready for tool synthesis

pub mod descriptor;
pub mod raw_type;
pub mod shape;

pub use descriptor::{FieldDescriptor, ModelDescriptor};
pub use raw_type::{FieldDefault, RawEnum, RawEnumMember, RawField, RawModel, RawType};
pub use shape::{EnumDescriptor, EnumMember, ScalarKind, TypeShape};
