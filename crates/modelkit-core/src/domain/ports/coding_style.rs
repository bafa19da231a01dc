//! Convention engine port

use std::sync::Arc;

use modelkit_domain::{
    Marks, NativeInitializer, NativeMember, NativeOperation, NativeParameter, NativeType, Value,
};

use super::{IdExtractor, Locator, ValueExtractor};
use crate::domain::value_objects::TypeDescriptor;
use crate::error::Result;

/// Answers every per-type question the domain-type builder asks.
///
/// Type-level queries are fallible: an error there means the type cannot be
/// described at all and aborts building it. Element-level queries
/// (marks, heaviness) are plain lookups.
pub trait CodingStyle: Send + Sync {
    /// Native types this coding style describes
    fn types(&self) -> Vec<NativeType>;

    /// Whether the type is configured
    fn contains(&self, ty: &TypeDescriptor) -> bool;

    /// Stable string id of a configured type
    fn type_id(&self, ty: &TypeDescriptor) -> Result<String>;

    /// Display name
    fn name(&self, ty: &TypeDescriptor) -> Result<String>;

    fn marks(&self, ty: &TypeDescriptor) -> Result<Marks>;

    fn module_name(&self, ty: &TypeDescriptor) -> Result<Option<String>>;

    /// Whether instances are plain values identified by their content
    fn is_value(&self, ty: &TypeDescriptor) -> Result<bool>;

    /// Whether the type only presents data and cannot be located
    fn is_view(&self, ty: &TypeDescriptor) -> Result<bool>;

    fn locator(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn Locator>>>;

    fn id_extractor(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn IdExtractor>>>;

    fn value_extractor(&self, ty: &TypeDescriptor) -> Result<Option<Arc<dyn ValueExtractor>>>;

    /// Well-known instances listed with the type's model
    fn static_instances(&self, ty: &TypeDescriptor) -> Result<Vec<Value>>;

    /// Initializer candidates, one per overload
    fn initializers(&self, ty: &TypeDescriptor) -> Result<Vec<NativeInitializer>>;

    /// Member candidates
    fn members(&self, ty: &TypeDescriptor) -> Result<Vec<NativeMember>>;

    /// Operation candidates; overloads share a name
    fn operations(&self, ty: &TypeDescriptor) -> Result<Vec<NativeOperation>>;

    fn member_marks(&self, member: &NativeMember) -> Marks;

    /// Whether fetching the member is expensive
    fn member_is_heavy(&self, member: &NativeMember) -> bool;

    fn operation_marks(&self, operation: &NativeOperation) -> Marks;

    fn initializer_marks(&self, initializer: &NativeInitializer) -> Marks;

    fn parameter_marks(&self, parameter: &NativeParameter) -> Marks;
}
