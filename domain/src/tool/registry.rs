//! Tool Registry
//!
//! The [`ToolRegistry`] holds every synthesized tool together with the model
//! factory that backs it, and runs invocations against them.
//!
//! # Lifecycle
//!
//! Tools are added through a [`ToolRegistryBuilder`]; [`ToolRegistryBuilder::build`]
//! freezes the set. A built registry has no mutating methods, so it can be
//! shared (e.g. behind an `Arc`) and read from any number of threads without
//! locking.
//!
//! # Invocation
//!
//! ```text
//! Received → PositionalMerge → Coercion → RequiredCheck → EnumCheck → Construct → Serialize → Done
//!                                              │              │            │
//!                                              └──────────────┴────────────┴──▶ Fail(kind, details)
//! ```
//!
//! Every stage is synchronous and keeps no state between calls.

use super::coercion::{CoercionRules, Coercer};
use super::entities::{ToolCall, ToolDescriptor};
use super::traits::{DefaultToolValidator, ModelFactory, ToolValidator, ValidationError};
use super::value_objects::{FailureKind, InvocationResult, ToolFailure, ToolSchema};
use crate::core::error::DomainError;
use crate::core::string::summary_line;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A tool descriptor paired with the factory that constructs its model
#[derive(Clone)]
pub struct RegisteredTool {
    descriptor: ToolDescriptor,
    factory: Arc<dyn ModelFactory>,
}

impl RegisteredTool {
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }
}

impl fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Collects tools before the registry is frozen
#[derive(Debug, Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
    rules: CoercionRules,
}

impl ToolRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coercion_rules(mut self, rules: CoercionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Register a tool. A name that is already taken is rejected and the
    /// existing tool is kept.
    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        factory: Arc<dyn ModelFactory>,
    ) -> Result<(), DomainError> {
        if self.index.contains_key(&descriptor.name) {
            return Err(DomainError::DuplicateToolName(descriptor.name));
        }
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor,
            factory,
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            tools: self.tools,
            index: self.index,
            coercer: Coercer::new(self.rules),
            validator: DefaultToolValidator,
        }
    }
}

/// Immutable registry of tools, in registration order
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
    coercer: Coercer,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i].descriptor)
    }

    /// Find a tool by the name of the model it constructs
    pub fn find_by_model(&self, model: &str) -> Option<&ToolDescriptor> {
        self.all().find(|t| t.model.name == model)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.all().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn coercion_rules(&self) -> &CoercionRules {
        self.coercer.rules()
    }

    /// Data view of a tool
    pub fn describe(&self, name: &str) -> Option<ToolSchema> {
        self.get(name).map(ToolSchema::from)
    }

    /// All tools grouped by category, categories in registration order
    pub fn listing(&self) -> ToolListing {
        let mut categories: Vec<CategoryListing> = Vec::new();
        for tool in self.all() {
            let summary = ToolSummary {
                tool_name: tool.name.clone(),
                model: tool.model.name.clone(),
                description: summary_line(&tool.model.description).to_string(),
                field_count: tool.model.fields.len(),
            };
            match categories.iter_mut().find(|c| c.category == tool.category) {
                Some(listing) => {
                    listing.count += 1;
                    listing.tools.push(summary);
                }
                None => categories.push(CategoryListing {
                    category: tool.category.clone(),
                    count: 1,
                    tools: vec![summary],
                }),
            }
        }
        ToolListing {
            total_tools: self.len(),
            categories,
        }
    }

    /// Invoke a tool. Never panics on bad input and never returns an error:
    /// every failure is reported inside the result.
    pub fn invoke(&self, call: &ToolCall) -> InvocationResult {
        let Some(&i) = self.index.get(&call.tool_name) else {
            return InvocationResult::Fail(ToolFailure::tool_not_found(&call.tool_name));
        };
        let RegisteredTool {
            descriptor: tool,
            factory,
        } = &self.tools[i];

        // PositionalMerge + Coercion
        let coerced = self.coercer.prepare(tool, call);
        let provided: Vec<String> = coerced
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, _)| k.clone())
            .collect();

        // RequiredCheck + EnumCheck
        let fields = match self.validator.validate(tool, coerced) {
            Ok(fields) => fields,
            Err(ValidationError::MissingRequired(missing)) => {
                let message = format!("Missing required fields: [{}]", missing.join(", "));
                return InvocationResult::Fail(
                    ToolFailure::for_tool(tool, FailureKind::MissingRequiredFields, message, missing)
                        .with_provided(provided),
                );
            }
            Err(ValidationError::InvalidEnum(violations)) => {
                let details = violations.iter().map(|v| v.to_string()).collect();
                return InvocationResult::Fail(
                    ToolFailure::for_tool(
                        tool,
                        FailureKind::EnumValidationFailed,
                        "Enum validation failed",
                        details,
                    )
                    .with_provided(provided),
                );
            }
        };

        // Construct + Serialize
        match factory.construct(fields) {
            Ok(instance) => InvocationResult::Ok(instance.to_canonical()),
            Err(message) => InvocationResult::Fail(
                ToolFailure::for_tool(
                    tool,
                    FailureKind::ConstructionError,
                    message.clone(),
                    vec![message],
                )
                .with_provided(provided),
            ),
        }
    }
}

/// Summary of one tool in a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSummary {
    pub tool_name: String,
    pub model: String,
    pub description: String,
    pub field_count: usize,
}

/// Tools of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub count: usize,
    pub tools: Vec<ToolSummary>,
}

/// Every registered tool, grouped by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolListing {
    pub categories: Vec<CategoryListing>,
    pub total_tools: usize,
}

impl ToolListing {
    pub fn category(&self, name: &str) -> Option<&CategoryListing> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Keep only the named category (case-insensitive)
    pub fn filter_category(mut self, name: &str) -> Self {
        self.categories.retain(|c| c.category.eq_ignore_ascii_case(name));
        self.total_tools = self.categories.iter().map(|c| c.count).sum();
        self
    }
}
