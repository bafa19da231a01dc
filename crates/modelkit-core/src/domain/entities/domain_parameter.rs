//! Domain parameter entity

use std::sync::Arc;

use modelkit_domain::NativeParameter;

use crate::domain::ports::DomainTypeLookup;
use crate::domain::value_objects::{Marks, ParameterValueData, TypeDescriptor, TypeKey, Value};
use crate::error::Result;

/// A named parameter shared by every overload group that declares it
#[derive(Debug, Clone)]
pub struct DomainParameter {
    name: String,
    marks: Marks,
    parameter_type: Arc<TypeDescriptor>,
    is_list: bool,
    view_model_id: String,
    is_optional: bool,
    default_value: Option<Value>,
    groups: Vec<usize>,
}

impl DomainParameter {
    pub(crate) fn new(
        native: &NativeParameter,
        parameter_type: Arc<TypeDescriptor>,
        is_list: bool,
        view_model_id: String,
        marks: Marks,
    ) -> Self {
        Self {
            name: native.name().to_string(),
            marks,
            parameter_type,
            is_list,
            view_model_id,
            is_optional: native.is_optional(),
            default_value: native.default_value().cloned(),
            groups: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marked_as(&self, mark: &str) -> bool {
        self.marks.has(mark)
    }

    /// Declared type
    pub fn parameter_type(&self) -> &Arc<TypeDescriptor> {
        &self.parameter_type
    }

    pub fn type_key(&self) -> &TypeKey {
        self.parameter_type.key()
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// Id of the domain type arguments are located through
    pub fn view_model_id(&self) -> &str {
        &self.view_model_id
    }

    /// Whether the first declaring group marks it optional
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Indices of the groups declaring this parameter
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    pub(crate) fn add_group(&mut self, group: usize) {
        self.groups.push(group);
    }

    /// Turn a supplied argument into a live value.
    ///
    /// References are located and initialization requests initialized
    /// through the parameter's domain type.
    pub fn locate(&self, lookup: &dyn DomainTypeLookup, data: &ParameterValueData) -> Result<Value> {
        let domain_type = lookup.domain_type_by_id(&self.view_model_id)?;

        if self.is_list {
            let located = domain_type.locate_parameters(lookup, &data.values)?;
            return Ok(Value::List(located));
        }

        let first = data.values.first().and_then(Option::as_ref);
        domain_type.locate_parameter(lookup, first)
    }
}
