//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as which catalog categories are registered and how arguments are coerced.

use toolforge_domain::CoercionRules;

/// Registry build configuration.
///
/// Controls which categories of the model catalog become tools and the
/// coercion rules the built registry applies on every invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryConfig {
    /// Categories to register. `None` registers every catalog category.
    pub categories: Option<Vec<String>>,
    pub coercion: CoercionRules,
}

impl RegistryConfig {
    /// Restrict the registry to the given categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_coercion(mut self, coercion: CoercionRules) -> Self {
        self.coercion = coercion;
        self
    }

    /// Whether `category` is selected (case-insensitive).
    pub fn includes(&self, category: &str) -> bool {
        match &self.categories {
            None => true,
            Some(selected) => selected.iter().any(|c| c.eq_ignore_ascii_case(category)),
        }
    }
}
