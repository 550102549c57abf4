//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_registry;
pub mod inspect_tools;
pub mod invoke_tool;
