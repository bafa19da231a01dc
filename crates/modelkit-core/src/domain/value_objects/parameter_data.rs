//! Argument payloads for operations and initializers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The value supplied for one parameter
///
/// `values` holds a single entry for scalar parameters. A `None` entry stands
/// for an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValueData {
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub values: Vec<Option<ParameterData>>,
}

impl ParameterValueData {
    /// Single reference to an existing object
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            is_list: false,
            values: vec![Some(ParameterData::reference(id))],
        }
    }

    /// List of references to existing objects
    pub fn references<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_list: true,
            values: ids
                .into_iter()
                .map(|id| Some(ParameterData::reference(id)))
                .collect(),
        }
    }

    /// Single object built through an initializer
    pub fn initialize(parameters: HashMap<String, ParameterValueData>) -> Self {
        Self {
            is_list: false,
            values: vec![Some(ParameterData::initialize(parameters))],
        }
    }

    /// Explicit null
    pub fn null() -> Self {
        Self {
            is_list: false,
            values: vec![None],
        }
    }
}

/// One object reference or initialization request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterData {
    /// Id to locate; absent when the object is to be initialized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Named arguments for the initializer
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub initialization_parameters: HashMap<String, ParameterValueData>,
}

impl ParameterData {
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            reference_id: Some(id.into()),
            initialization_parameters: HashMap::new(),
        }
    }

    pub fn initialize(parameters: HashMap<String, ParameterValueData>) -> Self {
        Self {
            reference_id: None,
            initialization_parameters: parameters,
        }
    }

    /// Whether the object should be located rather than initialized
    pub fn is_reference(&self) -> bool {
        self.reference_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
