//! Overload groups shared by operations and initializers

use std::collections::HashMap;

use modelkit_domain::{NativeParameter, Parametric};
use smallvec::SmallVec;

use super::DomainParameter;
use crate::domain::ports::DomainTypeLookup;
use crate::domain::services::{ParameterResolver, Resolution};
use crate::domain::value_objects::ParameterValueData;
use crate::error::{Error, Result};

/// One overload: the raw element plus the slots of its parameters in the
/// owning set's parameter list
#[derive(Debug, Clone)]
pub struct ParameterGroup<T> {
    parametric: T,
    slots: SmallVec<[usize; 4]>,
    index: usize,
}

impl<T: Parametric> ParameterGroup<T> {
    pub fn parametric(&self) -> &T {
        &self.parametric
    }

    /// Position of the group within its set
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.parametric.parameters().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parametric.parameters().iter().map(NativeParameter::name)
    }

    /// Raw parameters paired with the slot of their shared parameter
    pub(crate) fn slotted(&self) -> impl Iterator<Item = (&NativeParameter, usize)> {
        self.parametric
            .parameters()
            .iter()
            .zip(self.slots.iter().copied())
    }

    fn has_same_parameters(&self, other: &T) -> bool {
        let params = other.parameters();
        params.len() == self.len()
            && params
                .iter()
                .all(|p| self.parameter_names().any(|name| name == p.name()))
    }
}

/// Every overload group sharing one name, plus the union of their
/// parameters keyed by name
#[derive(Debug, Clone)]
pub struct OverloadSet<T> {
    name: String,
    parameters: Vec<DomainParameter>,
    groups: Vec<ParameterGroup<T>>,
}

impl<T: Parametric> OverloadSet<T> {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Union of parameters, in first-declared order
    pub fn parameters(&self) -> &[DomainParameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&DomainParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn groups(&self) -> &[ParameterGroup<T>] {
        &self.groups
    }

    /// Add an overload.
    ///
    /// Rejects a group whose parameter names repeat an existing group, or
    /// that declares a known parameter with another type. Types are compared
    /// through the parameters `build` produces, so they are the cache's
    /// resolved types. A rejected group leaves the set untouched.
    pub(crate) fn add_group<F>(&mut self, parametric: T, mut build: F) -> Result<()>
    where
        F: FnMut(&NativeParameter) -> Result<DomainParameter>,
    {
        if self.groups.iter().any(|g| g.has_same_parameters(&parametric)) {
            let signature = parametric
                .parameters()
                .iter()
                .map(NativeParameter::name)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::IdenticalSignatureAlreadyAdded {
                name: self.name.clone(),
                signature,
            });
        }

        let mut added: Vec<DomainParameter> = Vec::new();
        for native in parametric.parameters() {
            let candidate = build(native)?;
            match self.parameter(native.name()) {
                Some(existing) if existing.type_key() != candidate.type_key() => {
                    return Err(Error::ParameterTypesDoNotMatch {
                        name: self.name.clone(),
                        parameter: native.name().to_string(),
                        expected: existing.type_key().to_string(),
                        actual: candidate.type_key().to_string(),
                    });
                }
                Some(_) => {}
                None => added.push(candidate),
            }
        }

        let index = self.groups.len();
        self.parameters.extend(added);

        let mut slots = SmallVec::new();
        for native in parametric.parameters() {
            let slot = self
                .parameters
                .iter()
                .position(|p| p.name() == native.name())
                .ok_or_else(|| Error::type_not_configured(native.name(), "parameter was not registered"))?;
            self.parameters[slot].add_group(index);
            slots.push(slot);
        }

        self.groups.push(ParameterGroup {
            parametric,
            slots,
            index,
        });
        Ok(())
    }

    /// Pick a group for the supplied arguments and materialize them
    pub fn resolve(
        &self,
        lookup: &dyn DomainTypeLookup,
        values: &HashMap<String, ParameterValueData>,
    ) -> Result<Resolution<'_, T>> {
        ParameterResolver::new(self).resolve(lookup, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::TypeCache;
    use modelkit_domain::{Marks, NativeOperation, Reflect};

    fn build_with(cache: &TypeCache) -> impl FnMut(&NativeParameter) -> Result<DomainParameter> + '_ {
        move |native: &NativeParameter| {
            let declared = cache.get(&native.value_type());
            let id = declared.full_name();
            Ok(DomainParameter::new(native, declared, false, id, Marks::empty()))
        }
    }

    fn op(params: &[(&str, fn() -> modelkit_domain::NativeType)]) -> NativeOperation {
        params
            .iter()
            .fold(NativeOperation::new("Run", <()>::native_type), |op, (name, ty)| {
                op.param(NativeParameter::new(*name, *ty))
            })
    }

    #[test]
    fn test_groups_share_parameters_by_name() {
        let cache = TypeCache::new();
        let mut set = OverloadSet::new("Run");

        set.add_group(op(&[("a", i64::native_type)]), build_with(&cache)).unwrap();
        set.add_group(op(&[("b", String::native_type), ("a", i64::native_type)]), build_with(&cache))
            .unwrap();

        let names: Vec<&str> = set.parameters().iter().map(DomainParameter::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(set.parameter("a").unwrap().groups(), &[0, 1]);
        assert_eq!(set.groups()[1].slotted().map(|(_, slot)| slot).collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_same_names_in_other_order_is_identical() {
        let cache = TypeCache::new();
        let mut set = OverloadSet::new("Run");
        set.add_group(op(&[("a", i64::native_type), ("b", i64::native_type)]), build_with(&cache))
            .unwrap();

        let err = set
            .add_group(op(&[("b", i64::native_type), ("a", i64::native_type)]), build_with(&cache))
            .unwrap_err();
        assert!(matches!(err, Error::IdenticalSignatureAlreadyAdded { .. }));
    }

    #[test]
    fn test_rejected_group_leaves_set_untouched() {
        let cache = TypeCache::new();
        let mut set = OverloadSet::new("Run");
        set.add_group(op(&[("x", i64::native_type)]), build_with(&cache)).unwrap();

        let err = set
            .add_group(op(&[("y", bool::native_type), ("x", String::native_type)]), build_with(&cache))
            .unwrap_err();

        assert!(matches!(err, Error::ParameterTypesDoNotMatch { .. }));
        assert_eq!(set.groups().len(), 1);
        assert_eq!(set.parameters().len(), 1);
        assert!(set.parameter("y").is_none());
        assert_eq!(set.parameter("x").unwrap().groups(), &[0]);
    }
}
