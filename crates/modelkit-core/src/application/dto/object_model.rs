//! Object model DTOs
//!
//! One [`ObjectModel`] per domain type. Conversions go one way, from
//! entities to models.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    DomainInitializer, DomainMember, DomainOperation, DomainParameter, DomainType,
};
use crate::error::Result;

/// Every object model of an application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationModel {
    pub models: Vec<ObjectModel>,
}

impl ApplicationModel {
    pub fn model(&self, id: &str) -> Option<&ObjectModel> {
        self.models.iter().find(|m| m.id == id)
    }
}

/// Description of one domain type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectModel {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub marks: Vec<String>,
    pub is_value: bool,
    pub is_view: bool,
    pub locatable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<InitializerModel>,
    pub members: Vec<MemberModel>,
    pub operations: Vec<OperationModel>,
    pub static_instances: Vec<StaticInstanceModel>,
}

impl ObjectModel {
    /// Describe a domain type.
    ///
    /// Fails only when an id or value extractor fails on a static instance.
    pub fn from_domain_type(domain_type: &DomainType) -> Result<Self> {
        let static_instances = domain_type
            .static_instances()
            .iter()
            .map(|instance| {
                Ok(StaticInstanceModel {
                    id: domain_type.id_of(instance)?,
                    display: domain_type.display_of(instance)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: domain_type.id().to_string(),
            name: domain_type.name().to_string(),
            module: domain_type.module().map(str::to_string),
            marks: domain_type.marks().list(),
            is_value: domain_type.is_value(),
            is_view: domain_type.is_view(),
            locatable: domain_type.locatable(),
            initializer: domain_type.initializer().map(InitializerModel::from),
            members: domain_type.members().iter().map(MemberModel::from).collect(),
            operations: domain_type.operations().iter().map(OperationModel::from).collect(),
            static_instances,
        })
    }

    pub fn member(&self, id: &str) -> Option<&MemberModel> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn operation(&self, id: &str) -> Option<&OperationModel> {
        self.operations.iter().find(|o| o.id == id)
    }
}

/// A well-known instance listed with its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticInstanceModel {
    pub id: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberModel {
    pub id: String,
    pub marks: Vec<String>,
    pub is_list: bool,
    pub is_heavy: bool,
    pub view_model_id: String,
}

impl From<&DomainMember> for MemberModel {
    fn from(member: &DomainMember) -> Self {
        Self {
            id: member.name().to_string(),
            marks: member.marks().list(),
            is_list: member.is_list(),
            is_heavy: member.is_heavy(),
            view_model_id: member.view_model_id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterModel {
    pub name: String,
    pub marks: Vec<String>,
    /// Indices of the groups declaring the parameter
    pub groups: Vec<usize>,
    pub is_list: bool,
    pub view_model_id: String,
    pub is_optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl From<&DomainParameter> for ParameterModel {
    fn from(parameter: &DomainParameter) -> Self {
        Self {
            name: parameter.name().to_string(),
            marks: parameter.marks().list(),
            groups: parameter.groups().to_vec(),
            is_list: parameter.is_list(),
            view_model_id: parameter.view_model_id().to_string(),
            is_optional: parameter.is_optional(),
            default_value: parameter.default_value().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultModel {
    pub is_void: bool,
    pub is_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_model_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationModel {
    pub id: String,
    pub marks: Vec<String>,
    pub group_count: usize,
    pub parameters: Vec<ParameterModel>,
    pub result: ResultModel,
}

impl From<&DomainOperation> for OperationModel {
    fn from(operation: &DomainOperation) -> Self {
        let result = operation.result();
        Self {
            id: operation.name().to_string(),
            marks: operation.marks().list(),
            group_count: operation.groups().len(),
            parameters: operation.parameters().iter().map(ParameterModel::from).collect(),
            result: ResultModel {
                is_void: result.is_void,
                is_list: result.is_list,
                view_model_id: result.view_model_id.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializerModel {
    pub marks: Vec<String>,
    pub group_count: usize,
    pub parameters: Vec<ParameterModel>,
}

impl From<&DomainInitializer> for InitializerModel {
    fn from(initializer: &DomainInitializer) -> Self {
        Self {
            marks: initializer.marks().list(),
            group_count: initializer.groups().len(),
            parameters: initializer.parameters().iter().map(ParameterModel::from).collect(),
        }
    }
}
