//! Build registry use case
//!
//! Runs the startup phase of the tool registry: for every model offered by
//! the [`ModelCatalogPort`], extract its descriptor, synthesize the tool and
//! register it.
//!
//! # Failure isolation
//!
//! A model whose metadata cannot be extracted is logged and skipped; a tool
//! whose derived name collides with an already-registered one is logged and
//! rejected. Neither aborts the build: the registry is always produced from
//! every model that made it through, and the skipped ones are reported in
//! [`RegistryStats`].

use crate::config::RegistryConfig;
use crate::ports::model_catalog::ModelCatalogPort;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use toolforge_domain::{ModelDescriptor, ParameterSchemaBuilder, ToolRegistry};
use tracing::{debug, error, info, warn};

/// Errors that abort the registry build.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildRegistryError {
    /// A configured category does not exist in the catalog.
    #[error("Unknown category '{name}'. Available categories: {}", .available.join(", "))]
    UnknownCategory { name: String, available: Vec<String> },
}

/// A model that did not become a tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedModel {
    pub category: String,
    pub model: String,
    pub reason: String,
}

/// Number of tools registered for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Outcome statistics of a registry build
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryStats {
    pub total_tools: usize,
    pub per_category: Vec<CategoryCount>,
    /// Models whose metadata could not be extracted
    pub skipped: Vec<SkippedModel>,
    /// Tools whose name collided with an earlier registration
    pub rejected: Vec<SkippedModel>,
}

/// Output from the BuildRegistry use case.
#[derive(Debug)]
pub struct BuildRegistryOutput {
    pub registry: ToolRegistry,
    pub stats: RegistryStats,
}

/// Use case for building the tool registry from a model catalog.
pub struct BuildRegistryUseCase {
    catalog: Arc<dyn ModelCatalogPort>,
}

impl BuildRegistryUseCase {
    pub fn new(catalog: Arc<dyn ModelCatalogPort>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, config: &RegistryConfig) -> Result<BuildRegistryOutput, BuildRegistryError> {
        let categories = self.selected_categories(config)?;
        debug!(
            catalog = self.catalog.name(),
            categories = ?categories,
            "Building tool registry"
        );

        let mut builder = ToolRegistry::builder().with_coercion_rules(config.coercion.clone());
        let mut stats = RegistryStats::default();

        for category in &categories {
            let schema_builder = ParameterSchemaBuilder::new(category.as_str());
            let mut count = 0;

            for entry in self.catalog.entries(category) {
                let descriptor = match ModelDescriptor::extract(&entry.model) {
                    Ok(descriptor) => descriptor,
                    Err(e) => {
                        warn!(
                            model = %entry.model.name,
                            category = %category,
                            error = %e,
                            "Skipping model: descriptor extraction failed"
                        );
                        stats.skipped.push(SkippedModel {
                            category: category.clone(),
                            model: entry.model.name.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

                let tool = schema_builder.build(descriptor);
                let tool_name = tool.name.clone();
                match builder.register(tool, entry.factory) {
                    Ok(()) => {
                        debug!(tool = %tool_name, model = %entry.model.name, "Registered tool");
                        count += 1;
                    }
                    Err(e) => {
                        error!(
                            tool = %tool_name,
                            model = %entry.model.name,
                            category = %category,
                            error = %e,
                            "Tool name collision, registration rejected"
                        );
                        stats.rejected.push(SkippedModel {
                            category: category.clone(),
                            model: entry.model.name.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }

            info!(category = %category, count, "Registered category");
            stats.per_category.push(CategoryCount {
                category: category.clone(),
                count,
            });
        }

        let registry = builder.build();
        stats.total_tools = registry.len();
        info!(
            total_tools = stats.total_tools,
            skipped = stats.skipped.len(),
            rejected = stats.rejected.len(),
            "Tool registry built"
        );

        Ok(BuildRegistryOutput { registry, stats })
    }

    /// Catalog categories selected by the config, in catalog order
    fn selected_categories(&self, config: &RegistryConfig) -> Result<Vec<String>, BuildRegistryError> {
        let available = self.catalog.categories();

        if let Some(requested) = &config.categories {
            for name in requested {
                if !available.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                    return Err(BuildRegistryError::UnknownCategory {
                        name: name.clone(),
                        available,
                    });
                }
            }
        }

        Ok(available
            .into_iter()
            .filter(|c| config.includes(c))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_catalog::CatalogEntry;
    use serde_json::{Map, Value, json};
    use toolforge_domain::{
        CoercionRules, InvocationResult, ModelInstance, RawEnum, RawModel, RawType, ToolCall,
    };

    fn echo(fields: Map<String, Value>) -> Result<Box<dyn ModelInstance>, String> {
        Ok(Box::new(Value::Object(fields)))
    }

    struct StaticCatalog {
        categories: Vec<(String, Vec<RawModel>)>,
    }

    impl StaticCatalog {
        fn new() -> Self {
            Self {
                categories: Vec::new(),
            }
        }

        fn category(mut self, name: &str, models: Vec<RawModel>) -> Self {
            self.categories.push((name.to_string(), models));
            self
        }
    }

    impl ModelCatalogPort for StaticCatalog {
        fn name(&self) -> &str {
            "static"
        }

        fn categories(&self) -> Vec<String> {
            self.categories.iter().map(|(name, _)| name.clone()).collect()
        }

        fn entries(&self, category: &str) -> Vec<CatalogEntry> {
            self.categories
                .iter()
                .filter(|(name, _)| name == category)
                .flat_map(|(_, models)| models.iter().cloned())
                .map(|model| CatalogEntry::new(model, Arc::new(echo)))
                .collect()
        }
    }

    fn catalog() -> StaticCatalog {
        let empty_enum = RawEnum::new("Nothing", "");
        StaticCatalog::new()
            .category(
                "Transaction",
                vec![
                    RawModel::new("Payment", "").required("account", RawType::String, ""),
                    RawModel::new("Broken", "").optional("flag", empty_enum.into(), ""),
                    RawModel::new("payment", "Same name, different case"),
                ],
            )
            .category("Currency", vec![RawModel::new("XRP", "")])
    }

    fn build(config: &RegistryConfig) -> Result<BuildRegistryOutput, BuildRegistryError> {
        BuildRegistryUseCase::new(Arc::new(catalog())).execute(config)
    }

    #[test]
    fn test_extraction_failure_skips_only_that_model() {
        let output = build(&RegistryConfig::default()).unwrap();

        assert_eq!(output.registry.len(), 2);
        assert_eq!(output.stats.skipped.len(), 1);
        assert_eq!(output.stats.skipped[0].model, "Broken");
        assert!(output.registry.get("create_transaction_payment").is_some());
        assert!(output.registry.get("create_currency_xrp").is_some());
    }

    #[test]
    fn test_collision_is_rejected_not_overwritten() {
        let output = build(&RegistryConfig::default()).unwrap();

        assert_eq!(output.stats.rejected.len(), 1);
        assert_eq!(output.stats.rejected[0].model, "payment");
        let tool = output.registry.get("create_transaction_payment").unwrap();
        assert_eq!(tool.model.name, "Payment");
    }

    #[test]
    fn test_stats_per_category() {
        let stats = build(&RegistryConfig::default()).unwrap().stats;

        assert_eq!(stats.total_tools, 2);
        assert_eq!(
            stats.per_category,
            vec![
                CategoryCount {
                    category: "Transaction".to_string(),
                    count: 1
                },
                CategoryCount {
                    category: "Currency".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let output = build(&RegistryConfig::default().with_categories(["currency"])).unwrap();
        assert_eq!(output.registry.len(), 1);
        assert!(output.registry.get("create_currency_xrp").is_some());
    }

    #[test]
    fn test_unknown_category() {
        let err = build(&RegistryConfig::default().with_categories(["Ledger"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown category 'Ledger'. Available categories: Transaction, Currency"
        );
    }

    #[test]
    fn test_coercion_rules_are_applied() {
        let catalog = StaticCatalog::new().category(
            "Other",
            vec![RawModel::new("Node", "").required("node_key", RawType::Integer, "")],
        );
        let config = RegistryConfig::default().with_coercion(CoercionRules {
            hex_field_suffixes: vec!["_key".to_string()],
            hex_prefix: "0x".to_string(),
        });
        let registry = BuildRegistryUseCase::new(Arc::new(catalog))
            .execute(&config)
            .unwrap()
            .registry;
        assert_eq!(registry.coercion_rules().hex_field_suffixes, vec!["_key"]);

        let result = registry.invoke(&ToolCall::new("create_other_node").with_arg("node_key", "0x20"));
        assert_eq!(result, InvocationResult::Ok(json!({"node_key": 32})));
    }
}
