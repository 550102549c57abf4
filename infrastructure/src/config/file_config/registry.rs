//! Registry configuration from TOML (`[registry]` section)

use serde::{Deserialize, Serialize};

/// Raw registry configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    /// Catalog categories to register (all when unset)
    pub categories: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_categories_deserialize() {
        let toml_str = r#"
[registry]
categories = ["Amount"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.registry.categories, Some(vec!["Amount".to_string()]));
    }
}
