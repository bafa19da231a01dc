//! Domain type aggregate

use std::fmt;
use std::sync::Arc;

use super::{DomainInitializer, DomainMember, DomainOperation};
use crate::domain::ports::{DomainTypeLookup, IdExtractor, Locator, ValueExtractor};
use crate::domain::value_objects::{Marks, ParameterData, TypeDescriptor, Value};
use crate::error::{Error, Result};

/// Everything the coding style says about one configured type, resolved
/// once and immutable afterwards
#[derive(Clone)]
pub struct DomainType {
    pub(crate) descriptor: Arc<TypeDescriptor>,
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) module: Option<String>,
    pub(crate) marks: Marks,
    pub(crate) is_value: bool,
    pub(crate) is_view: bool,
    pub(crate) locator: Option<Arc<dyn Locator>>,
    pub(crate) id_extractor: Option<Arc<dyn IdExtractor>>,
    pub(crate) value_extractor: Option<Arc<dyn ValueExtractor>>,
    pub(crate) static_instances: Vec<Value>,
    pub(crate) initializer: Option<DomainInitializer>,
    pub(crate) members: Vec<DomainMember>,
    pub(crate) operations: Vec<DomainOperation>,
}

impl DomainType {
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Stable id assigned by the coding style
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name assigned by the coding style
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marked_as(&self, mark: &str) -> bool {
        self.marks.has(mark)
    }

    pub fn is_value(&self) -> bool {
        self.is_value
    }

    pub fn is_view(&self) -> bool {
        self.is_view
    }

    pub fn initializable(&self) -> bool {
        self.initializer.is_some()
    }

    pub fn locatable(&self) -> bool {
        self.locator.is_some()
    }

    pub fn static_instances(&self) -> &[Value] {
        &self.static_instances
    }

    pub fn initializer(&self) -> Option<&DomainInitializer> {
        self.initializer.as_ref()
    }

    /// Members in the order the coding style listed them
    pub fn members(&self) -> &[DomainMember] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&DomainMember> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Operations in first-seen order
    pub fn operations(&self) -> &[DomainOperation] {
        &self.operations
    }

    pub fn operation(&self, name: &str) -> Option<&DomainOperation> {
        self.operations.iter().find(|o| o.name() == name)
    }

    /// Id of an instance; falls back to its text form without an extractor
    pub fn id_of(&self, object: &Value) -> Result<String> {
        match &self.id_extractor {
            Some(extractor) => extractor.extract_id(object),
            None => Ok(object.to_string()),
        }
    }

    /// Display value of an instance; falls back to its id without an
    /// extractor
    pub fn display_of(&self, object: &Value) -> Result<String> {
        match &self.value_extractor {
            Some(extractor) => extractor.extract_value(object),
            None => self.id_of(object),
        }
    }

    /// Locate one instance by id
    pub fn locate(&self, id: &str) -> Result<Value> {
        let mut located = self.locate_many(&[id.to_string()])?;
        Ok(located.pop().unwrap_or_default())
    }

    /// Locate instances by id, one result per id in the same order
    pub fn locate_many(&self, ids: &[String]) -> Result<Vec<Value>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let locator = self
            .locator
            .as_ref()
            .ok_or_else(|| Error::cannot_locate_many(self.name(), ids))?;

        let located = locator.locate_many(&self.descriptor, ids)?;
        if located.len() != ids.len() {
            tracing::error!(
                type_name = %self.name(),
                expected = ids.len(),
                actual = located.len(),
                "locator returned a different number of objects"
            );
            return Err(Error::LocateCountMismatch {
                type_name: self.name().to_string(),
                expected: ids.len(),
                actual: located.len(),
                ids: ids.to_vec(),
            });
        }
        Ok(located)
    }

    /// Materialize one argument datum
    pub fn locate_parameter(
        &self,
        lookup: &dyn DomainTypeLookup,
        data: Option<&ParameterData>,
    ) -> Result<Value> {
        let datas = [data.cloned()];
        let mut located = self.locate_parameters(lookup, &datas)?;
        Ok(located.pop().unwrap_or_default())
    }

    /// Materialize argument data, keeping their positions.
    ///
    /// Nulls stay `Null`. Data without a reference id are initialized when
    /// the type has an initializer. Everything else is located in one batch,
    /// a missing id counting as the empty id.
    pub fn locate_parameters(
        &self,
        lookup: &dyn DomainTypeLookup,
        datas: &[Option<ParameterData>],
    ) -> Result<Vec<Value>> {
        let mut result = vec![Value::Null; datas.len()];
        let mut positions = Vec::new();
        let mut ids = Vec::new();

        for (position, data) in datas.iter().enumerate() {
            let Some(data) = data else {
                continue;
            };

            match &self.initializer {
                Some(initializer) if !data.is_reference() => {
                    result[position] = initializer.initialize(lookup, &data.initialization_parameters)?;
                }
                _ => {
                    positions.push(position);
                    ids.push(data.reference_id.clone().unwrap_or_default());
                }
            }
        }

        let located = self.locate_many(&ids)?;
        for (position, value) in positions.into_iter().zip(located) {
            result[position] = value;
        }
        Ok(result)
    }
}

impl fmt::Debug for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainType")
            .field("id", &self.id)
            .field("type", self.descriptor.key())
            .field("marks", &self.marks)
            .field("members", &self.members.len())
            .field("operations", &self.operations.len())
            .field("initializable", &self.initializable())
            .field("locatable", &self.locatable())
            .finish()
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
