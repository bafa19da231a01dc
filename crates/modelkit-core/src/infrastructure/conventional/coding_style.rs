//! Convention-based coding style

use std::sync::Arc;

use modelkit_domain::{
    Marks, NativeInitializer, NativeMember, NativeOperation, NativeParameter, NativeType, Reflect,
    Value,
};

use super::convention::{Conventions, ListConventions};
use super::patterns;
use crate::config::ModelConfig;
use crate::domain::ports::{CodingStyle, IdExtractor, Locator, ValueExtractor};
use crate::domain::value_objects::TypeDescriptor;
use crate::error::{Error, Result};

/// A coding style assembled from ordered conventions.
///
/// Every query is a list of conventions tried in order. Queries without an
/// applicable convention fall back to plain defaults: the full name as type
/// id, the namespace as module, no marks, not a value, not locatable.
///
/// # Examples
/// ```
/// # use modelkit::{ConventionalCodingStyle, CodingStyle, TypeCache};
/// let style = ConventionalCodingStyle::from_basic();
/// let cache = TypeCache::new();
///
/// let int = cache.get_of::<i32>();
/// assert!(style.is_value(&int).unwrap());
/// assert!(style.members(&int).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConventionalCodingStyle {
    types: Vec<NativeType>,

    pub type_id: Conventions<TypeDescriptor, String>,
    pub type_name: Conventions<TypeDescriptor, String>,
    pub module: Conventions<TypeDescriptor, Option<String>>,
    pub type_marks: ListConventions<TypeDescriptor, String>,
    pub type_is_value: Conventions<TypeDescriptor, bool>,
    pub type_is_view: Conventions<TypeDescriptor, bool>,
    pub locator: Conventions<TypeDescriptor, Arc<dyn Locator>>,
    pub id_extractor: Conventions<TypeDescriptor, Arc<dyn IdExtractor>>,
    pub value_extractor: Conventions<TypeDescriptor, Arc<dyn ValueExtractor>>,
    pub static_instances: ListConventions<TypeDescriptor, Value>,
    pub initializers: ListConventions<TypeDescriptor, NativeInitializer>,
    pub members: ListConventions<TypeDescriptor, NativeMember>,
    pub operations: ListConventions<TypeDescriptor, NativeOperation>,

    pub member_marks: ListConventions<NativeMember, String>,
    pub member_is_heavy: Conventions<NativeMember, bool>,
    pub operation_marks: ListConventions<NativeOperation, String>,
    pub initializer_marks: ListConventions<NativeInitializer, String>,
    pub parameter_marks: ListConventions<NativeParameter, String>,
}

impl ConventionalCodingStyle {
    /// Style with no types and no conventions
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in scalars, parseable values, enums by name, and native
    /// initializers, members and operations for everything else
    pub fn from_basic() -> Self {
        Self::from_config(&ModelConfig::default())
    }

    /// Basic style adjusted by a configuration document
    pub fn from_config(config: &ModelConfig) -> Self {
        let mut style = Self::new();
        style.add_types([
            String::native_type(),
            bool::native_type(),
            i32::native_type(),
            i64::native_type(),
            u32::native_type(),
            f64::native_type(),
        ]);

        for short in &config.short_model_ids {
            style.merge(&patterns::short_model_id_pattern(&short.prefix, &short.short_prefix));
        }
        style
            .merge(&patterns::parseable_value_type_pattern())
            .merge(&patterns::enum_pattern(config.enum_use_names))
            .merge(&patterns::native_elements_pattern());

        if let Some(module) = config.default_module.clone() {
            style
                .module
                .set_when(|t| t.namespace().is_none(), move |_| Some(module.clone()));
        }

        if !config.heavy_members.is_empty() {
            let heavy = config.heavy_members.clone();
            style
                .member_is_heavy
                .set_when(move |m| heavy.iter().any(|h| h == m.name()), |_| true);
        }

        style
    }

    /// Register types; already registered ones are ignored
    pub fn add_types<I>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator<Item = NativeType>,
    {
        for native in types {
            if !self.types.contains(&native) {
                self.types.push(native);
            }
        }
        self
    }

    /// Register the candidates that match `filter`
    pub fn add_types_where<I, P>(&mut self, candidates: I, filter: P) -> &mut Self
    where
        I: IntoIterator<Item = NativeType>,
        P: Fn(&NativeType) -> bool,
    {
        self.add_types(candidates.into_iter().filter(|native| filter(native)))
    }

    /// Append every convention and type of `other`
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.add_types(other.types.iter().cloned());

        self.type_id.merge(&other.type_id);
        self.type_name.merge(&other.type_name);
        self.module.merge(&other.module);
        self.type_marks.merge(&other.type_marks);
        self.type_is_value.merge(&other.type_is_value);
        self.type_is_view.merge(&other.type_is_view);
        self.locator.merge(&other.locator);
        self.id_extractor.merge(&other.id_extractor);
        self.value_extractor.merge(&other.value_extractor);
        self.static_instances.merge(&other.static_instances);
        self.initializers.merge(&other.initializers);
        self.members.merge(&other.members);
        self.operations.merge(&other.operations);

        self.member_marks.merge(&other.member_marks);
        self.member_is_heavy.merge(&other.member_is_heavy);
        self.operation_marks.merge(&other.operation_marks);
        self.initializer_marks.merge(&other.initializer_marks);
        self.parameter_marks.merge(&other.parameter_marks);
        self
    }
}

impl CodingStyle for ConventionalCodingStyle {
    fn types(&self) -> Vec<NativeType> {
        self.types.clone()
    }

    fn contains(&self, ty: &TypeDescriptor) -> bool {
        self.types.iter().any(|native| native.key() == ty.key())
    }

    fn type_id(&self, ty: &TypeDescriptor) -> Result<String> {
        if let Some(id) = self.type_id.get(ty) {
            return Ok(id);
        }
        if self.contains(ty) {
            return Ok(ty.full_name());
        }
        Err(Error::type_not_configured(ty.full_name(), "no type id convention applies"))
    }

    fn name(&self, ty: &TypeDescriptor) -> Result<String> {
        Ok(self
            .type_name
            .get(ty)
            .unwrap_or_else(|| ty.name().to_string()))
    }

    fn marks(&self, ty: &TypeDescriptor) -> Result<Marks> {
        Ok(Marks::new(self.type_marks.get(ty)))
    }

    fn module_name(&self, ty: &TypeDescriptor) -> Result<Option<String>> {
        Ok(self
            .module
            .get(ty)
            .unwrap_or_else(|| ty.namespace().map(str::to_string)))
    }

    fn is_value(&self, ty: &TypeDescriptor) -> Result<bool> {
        Ok(self.type_is_value.get(ty).unwrap_or(false))
    }

    fn is_view(&self, ty: &TypeDescriptor) -> Result<bool> {
        Ok(self.type_is_view.get(ty).unwrap_or(false))
    }

    fn locator(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn Locator>>> {
        Ok(self.locator.get(ty))
    }

    fn id_extractor(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn IdExtractor>>> {
        Ok(self.id_extractor.get(ty))
    }

    fn value_extractor(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn ValueExtractor>>> {
        Ok(self.value_extractor.get(ty))
    }

    fn static_instances(&self, ty: &TypeDescriptor) -> Result<Vec<Value>> {
        Ok(self.static_instances.get(ty))
    }

    fn initializers(&self, ty: &TypeDescriptor) -> Result<Vec<NativeInitializer>> {
        Ok(self.initializers.get(ty))
    }

    fn members(&self, ty: &TypeDescriptor) -> Result<Vec<NativeMember>> {
        Ok(self.members.get(ty))
    }

    fn operations(&self, ty: &TypeDescriptor) -> Result<Vec<NativeOperation>> {
        Ok(self.operations.get(ty))
    }

    fn member_marks(&self, member: &NativeMember) -> Marks {
        Marks::new(self.member_marks.get(member))
    }

    fn member_is_heavy(&self, member: &NativeMember) -> bool {
        self.member_is_heavy.get(member).unwrap_or(false)
    }

    fn operation_marks(&self, operation: &NativeOperation) -> Marks {
        Marks::new(self.operation_marks.get(operation))
    }

    fn initializer_marks(&self, initializer: &NativeInitializer) -> Marks {
        Marks::new(self.initializer_marks.get(initializer))
    }

    fn parameter_marks(&self, parameter: &NativeParameter) -> Marks {
        Marks::new(self.parameter_marks.get(parameter))
    }
}
