//! Coding style configuration
//!
//! A small JSON document adjusting the basic conventional coding style.
//!
//! ```json
//! {
//!   "shortModelIds": [{ "prefix": "shop", "shortPrefix": "sh" }],
//!   "enumUseNames": true,
//!   "defaultModule": "Main",
//!   "heavyMembers": ["History"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Result;

/// Maps full type names under `prefix` to short ids starting with
/// `short_prefix`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortModelId {
    pub prefix: String,
    pub short_prefix: String,
}

/// Adjustments applied by
/// [`ConventionalCodingStyle::from_config`](crate::ConventionalCodingStyle::from_config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    /// Short id rules, tried in order
    pub short_model_ids: Vec<ShortModelId>,
    /// Identify enum values by name rather than by number
    pub enum_use_names: bool,
    /// Module of types declared outside any namespace
    pub default_module: Option<String>,
    /// Member names that are expensive to fetch
    pub heavy_members: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            short_model_ids: Vec::new(),
            enum_use_names: true,
            default_module: None,
            heavy_members: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ModelConfig::from_json("{}").unwrap(), ModelConfig::default());
        assert!(ModelConfig::default().enum_use_names);
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "shortModelIds": [{ "prefix": "shop", "shortPrefix": "sh" }],
            "enumUseNames": false,
            "defaultModule": "Main",
            "heavyMembers": ["History"]
        }"#;
        let config = ModelConfig::from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.short_model_ids[0].short_prefix, "sh");
        assert!(!config.enum_use_names);
        assert_eq!(config.default_module.as_deref(), Some("Main"));
        assert_eq!(config.heavy_members, vec!["History".to_string()]);
    }

    #[test]
    fn test_malformed_document() {
        let err = ModelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
