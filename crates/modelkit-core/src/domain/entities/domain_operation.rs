//! Domain operation entity

use std::collections::HashMap;

use modelkit_domain::{NativeOperation, NativeParameter, Parametric};

use super::{DomainParameter, OverloadSet, ParameterGroup};
use crate::domain::ports::DomainTypeLookup;
use crate::domain::value_objects::{Marks, ParameterValueData, TypeKey, Value};
use crate::error::{Error, Result};

/// What an operation returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub type_key: TypeKey,
    pub is_void: bool,
    pub is_list: bool,
    /// Absent for void results
    pub view_model_id: Option<String>,
}

/// A callable operation, merging every overload that shares its name
#[derive(Debug, Clone)]
pub struct DomainOperation {
    marks: Marks,
    result: OperationResult,
    overloads: OverloadSet<NativeOperation>,
}

impl DomainOperation {
    pub(crate) fn new(name: impl Into<String>, result: OperationResult) -> Self {
        Self {
            marks: Marks::empty(),
            result,
            overloads: OverloadSet::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.overloads.name()
    }

    /// Union of the marks of every group
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marked_as(&self, mark: &str) -> bool {
        self.marks.has(mark)
    }

    pub fn result(&self) -> &OperationResult {
        &self.result
    }

    pub fn parameters(&self) -> &[DomainParameter] {
        self.overloads.parameters()
    }

    pub fn parameter(&self, name: &str) -> Option<&DomainParameter> {
        self.overloads.parameter(name)
    }

    pub fn groups(&self) -> &[ParameterGroup<NativeOperation>] {
        self.overloads.groups()
    }

    /// Merge another overload into this operation.
    ///
    /// `returns` is the key of the overload's return type as resolved by the
    /// type cache, so a proxy return type matches its real type.
    pub(crate) fn add_group<F>(
        &mut self,
        operation: NativeOperation,
        returns: &TypeKey,
        marks: Marks,
        build: F,
    ) -> Result<()>
    where
        F: FnMut(&NativeParameter) -> Result<DomainParameter>,
    {
        if returns != &self.result.type_key {
            return Err(Error::ReturnTypesDoNotMatch {
                name: operation.name().to_string(),
                expected: self.result.type_key.to_string(),
                actual: returns.to_string(),
            });
        }

        self.overloads.add_group(operation, build)?;
        self.marks.extend(marks);
        Ok(())
    }

    /// Invoke on `target` with named arguments
    pub fn perform(
        &self,
        lookup: &dyn DomainTypeLookup,
        target: &Value,
        values: &HashMap<String, ParameterValueData>,
    ) -> Result<Value> {
        let resolution = self.overloads.resolve(lookup, values)?;
        let result = resolution
            .group
            .parametric()
            .invoke(target, &resolution.arguments)?;
        Ok(result)
    }
}
