//! Domain initializer entity

use std::collections::HashMap;

use modelkit_domain::{NativeInitializer, NativeParameter};

use super::{DomainParameter, OverloadSet, ParameterGroup};
use crate::domain::ports::DomainTypeLookup;
use crate::domain::value_objects::{Marks, ParameterValueData, TypeKey, Value};
use crate::error::Result;

/// Builds new instances of a domain type, merging every initializer overload
#[derive(Debug, Clone)]
pub struct DomainInitializer {
    marks: Marks,
    initialized_type: TypeKey,
    overloads: OverloadSet<NativeInitializer>,
}

impl DomainInitializer {
    pub(crate) fn new(initialized_type: TypeKey) -> Self {
        let name = initialized_type.short_name().to_string();
        Self {
            marks: Marks::empty(),
            initialized_type,
            overloads: OverloadSet::new(name),
        }
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marked_as(&self, mark: &str) -> bool {
        self.marks.has(mark)
    }

    pub fn initialized_type(&self) -> &TypeKey {
        &self.initialized_type
    }

    pub fn parameters(&self) -> &[DomainParameter] {
        self.overloads.parameters()
    }

    pub fn parameter(&self, name: &str) -> Option<&DomainParameter> {
        self.overloads.parameter(name)
    }

    pub fn groups(&self) -> &[ParameterGroup<NativeInitializer>] {
        self.overloads.groups()
    }

    /// Merge another overload; the caller has checked what it initializes
    pub(crate) fn add_group<F>(
        &mut self,
        initializer: NativeInitializer,
        marks: Marks,
        build: F,
    ) -> Result<()>
    where
        F: FnMut(&NativeParameter) -> Result<DomainParameter>,
    {
        self.overloads.add_group(initializer, build)?;
        self.marks.extend(marks);
        Ok(())
    }

    /// Construct a new instance from named arguments
    pub fn initialize(
        &self,
        lookup: &dyn DomainTypeLookup,
        values: &HashMap<String, ParameterValueData>,
    ) -> Result<Value> {
        let resolution = self.overloads.resolve(lookup, values)?;
        let created = resolution
            .group
            .parametric()
            .construct(&resolution.arguments)?;
        Ok(created)
    }
}
