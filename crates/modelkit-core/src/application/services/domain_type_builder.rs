//! Convention-driven construction of domain types

use std::sync::Arc;

use modelkit_domain::{NativeInitializer, NativeMember, NativeOperation, NativeParameter, Parametric};

use crate::domain::entities::{
    DomainInitializer, DomainMember, DomainOperation, DomainParameter, DomainType, OperationResult,
};
use crate::domain::ports::CodingStyle;
use crate::domain::value_objects::{BuildReport, ElementKind, TypeDescriptor};
use crate::error::{Error, Result};
use crate::infrastructure::TypeCache;

/// A domain type together with the elements that were left out of it
#[derive(Debug)]
pub struct BuiltType {
    pub domain_type: DomainType,
    pub report: BuildReport,
}

/// Turns type descriptors into domain types by asking a coding style.
///
/// Type-level queries (id, name, locator, ...) must succeed or the type is
/// not built at all. Initializers, members and operations are validated one
/// by one; a candidate that fails is left out and reported while the rest
/// of the type is still built.
pub struct DomainTypeBuilder<'a> {
    coding_style: &'a dyn CodingStyle,
    cache: &'a TypeCache,
}

impl<'a> DomainTypeBuilder<'a> {
    pub fn new(coding_style: &'a dyn CodingStyle, cache: &'a TypeCache) -> Self {
        Self { coding_style, cache }
    }

    pub fn build(&self, ty: &Arc<TypeDescriptor>) -> Result<BuiltType> {
        let style = self.coding_style;
        let mut domain_type = DomainType {
            descriptor: Arc::clone(ty),
            id: style.type_id(ty)?,
            name: style.name(ty)?,
            module: style.module_name(ty)?,
            marks: style.marks(ty)?,
            is_value: style.is_value(ty)?,
            is_view: style.is_view(ty)?,
            locator: style.locator(ty)?,
            id_extractor: style.id_extractor(ty)?,
            value_extractor: style.value_extractor(ty)?,
            static_instances: style.static_instances(ty)?,
            initializer: None,
            members: Vec::new(),
            operations: Vec::new(),
        };
        let mut report = BuildReport::new();

        for initializer in style.initializers(ty)? {
            let name = initializer.name().to_string();
            if let Err(reason) = self.add_initializer(&mut domain_type, initializer) {
                report.skip(domain_type.name(), ElementKind::Initializer, name, reason);
            }
        }

        for member in style.members(ty)? {
            let name = member.name().to_string();
            if let Err(reason) = self.add_member(&mut domain_type, member) {
                report.skip(domain_type.name(), ElementKind::Member, name, reason);
            }
        }

        for operation in style.operations(ty)? {
            let name = operation.name().to_string();
            if let Err(reason) = self.add_operation(&mut domain_type, operation) {
                report.skip(domain_type.name(), ElementKind::Operation, name, reason);
            }
        }

        tracing::debug!(
            id = %domain_type.id,
            members = domain_type.members.len(),
            operations = domain_type.operations.len(),
            skipped = report.len(),
            "domain type built"
        );

        Ok(BuiltType {
            domain_type,
            report,
        })
    }

    fn add_initializer(&self, owner: &mut DomainType, native: NativeInitializer) -> Result<()> {
        let expected = owner.descriptor.key().clone();
        let actual = match native.initialized_type() {
            Some(initialized) => Some(self.cache.get(&initialized).key().clone()),
            None => native.initialized_type_key(),
        };
        if actual.as_ref() != Some(&expected) {
            return Err(Error::InitializedTypeMismatch {
                initializer: native.name().to_string(),
                expected: expected.to_string(),
                actual: actual.map(|key| key.to_string()).unwrap_or_default(),
            });
        }

        let marks = self.coding_style.initializer_marks(&native);
        let mut initializer = owner
            .initializer
            .take()
            .unwrap_or_else(|| DomainInitializer::new(expected));
        let added = initializer.add_group(native, marks, |p| self.parameter(p));

        if !initializer.groups().is_empty() {
            owner.initializer = Some(initializer);
        }
        added
    }

    fn add_member(&self, owner: &mut DomainType, native: NativeMember) -> Result<()> {
        if owner.member(native.name()).is_some() {
            return Err(Error::DuplicateMember {
                owner: owner.name().to_string(),
                name: native.name().to_string(),
            });
        }

        let value_type = self.cache.get(&native.value_type());
        let (is_list, view_model_id) = self.view_model(&value_type)?;
        let marks = self.coding_style.member_marks(&native);
        let is_heavy = self.coding_style.member_is_heavy(&native);

        owner
            .members
            .push(DomainMember::new(native, is_list, view_model_id, marks, is_heavy));
        Ok(())
    }

    fn add_operation(&self, owner: &mut DomainType, native: NativeOperation) -> Result<()> {
        let marks = self.coding_style.operation_marks(&native);
        let returns = self.cache.get(&native.return_type());

        if let Some(existing) = owner.operations.iter_mut().find(|o| o.name() == native.name()) {
            return existing.add_group(native, returns.key(), marks, |p| self.parameter(p));
        }

        let mut operation = DomainOperation::new(native.name(), self.operation_result(&returns)?);
        operation.add_group(native, returns.key(), marks, |p| self.parameter(p))?;
        owner.operations.push(operation);
        Ok(())
    }

    fn operation_result(&self, returns: &Arc<TypeDescriptor>) -> Result<OperationResult> {
        if returns.is_void() {
            return Ok(OperationResult {
                type_key: returns.key().clone(),
                is_void: true,
                is_list: false,
                view_model_id: None,
            });
        }

        let (is_list, view_model_id) = self.view_model(returns)?;
        Ok(OperationResult {
            type_key: returns.key().clone(),
            is_void: false,
            is_list,
            view_model_id: Some(view_model_id),
        })
    }

    fn parameter(&self, native: &NativeParameter) -> Result<DomainParameter> {
        let declared = self.cache.get(&native.value_type());
        let (is_list, view_model_id) = self.view_model(&declared)?;
        let marks = self.coding_style.parameter_marks(native);
        Ok(DomainParameter::new(native, declared, is_list, view_model_id, marks))
    }

    /// List-ness and item type id of a member, parameter or result type
    fn view_model(&self, declared: &Arc<TypeDescriptor>) -> Result<(bool, String)> {
        let is_list = declared.can_be_collection();
        let item = match declared.item_type() {
            Some(item) if is_list => self.cache.get(&item),
            _ => Arc::clone(declared),
        };

        if !self.coding_style.contains(&item) {
            return Err(Error::type_not_configured(
                item.full_name(),
                "it is not one of the coding style's types",
            ));
        }
        Ok((is_list, self.coding_style.type_id(&item)?))
    }
}
