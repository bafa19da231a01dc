//! Classified type descriptor
//!
//! A `TypeDescriptor` is a [`NativeType`] plus the one kind the type cache
//! assigned to it. Descriptors are immutable and handed out as
//! `Arc<TypeDescriptor>`; the cache guarantees one instance per identity.

use std::fmt;

use modelkit_domain::{
    DomainResult, NativeInitializer, NativeMember, NativeOperation, NativeType, TypeFlags,
    TypeKey, Value,
};

/// Kind assigned to a native type by the cache.
///
/// Exactly one kind applies; the variants are listed in classification
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// The unit type
    Void,
    /// Can be parsed from text
    Parseable,
    /// Sequence with an element type
    Array,
    /// Closed set of named values
    Enum,
    /// Has unbound generic parameters
    OpenGeneric,
    /// Explicitly registered business type
    Domain,
    /// Anything else
    Reflected,
}

/// Immutable descriptor of one native type
pub struct TypeDescriptor {
    native: NativeType,
    kind: DescriptorKind,
}

impl TypeDescriptor {
    pub(crate) fn new(native: NativeType, kind: DescriptorKind) -> Self {
        Self { native, kind }
    }

    /// Underlying native description
    pub fn native(&self) -> &NativeType {
        &self.native
    }

    /// Identity
    pub fn key(&self) -> &TypeKey {
        self.native.key()
    }

    /// Classification
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// Short name
    pub fn name(&self) -> &str {
        self.native.name()
    }

    /// Namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.native.namespace()
    }

    /// Namespace and name
    pub fn full_name(&self) -> String {
        self.native.full_name()
    }

    fn has(&self, flag: TypeFlags) -> bool {
        self.native.flags().contains(flag)
    }

    pub fn is_void(&self) -> bool {
        self.kind == DescriptorKind::Void
    }

    pub fn is_parseable(&self) -> bool {
        self.kind == DescriptorKind::Parseable
    }

    pub fn is_array(&self) -> bool {
        self.has(TypeFlags::ARRAY)
    }

    pub fn is_enum(&self) -> bool {
        self.has(TypeFlags::ENUM)
    }

    pub fn is_domain_type(&self) -> bool {
        self.kind == DescriptorKind::Domain
    }

    pub fn is_value_type(&self) -> bool {
        self.has(TypeFlags::VALUE_TYPE)
    }

    pub fn is_interface(&self) -> bool {
        self.has(TypeFlags::INTERFACE)
    }

    pub fn is_abstract(&self) -> bool {
        self.has(TypeFlags::ABSTRACT)
    }

    pub fn is_generic(&self) -> bool {
        self.has(TypeFlags::GENERIC)
    }

    pub fn is_public(&self) -> bool {
        self.has(TypeFlags::PUBLIC)
    }

    pub fn is_primitive(&self) -> bool {
        self.has(TypeFlags::PRIMITIVE)
    }

    /// Whether a value of this type can stand where `other` is expected.
    ///
    /// True for the same identity, any base type and any implemented
    /// interface, searched transitively.
    pub fn can_be(&self, other: &TypeDescriptor) -> bool {
        can_be(&self.native, other.key())
    }

    /// Whether this type is a sequence of items
    pub fn can_be_collection(&self) -> bool {
        self.is_array()
    }

    /// Item type of a sequence
    pub fn item_type(&self) -> Option<NativeType> {
        self.native.element_type()
    }

    /// Parse text into a value of this type
    pub fn parse(&self, text: &str) -> DomainResult<Value> {
        self.native.parse(text)
    }

    /// Enum value names
    pub fn enum_names(&self) -> &[String] {
        self.native.enum_names()
    }

    /// Enum values aligned with the names
    pub fn enum_values(&self) -> &[Value] {
        self.native.enum_values()
    }

    /// Public initializers
    pub fn initializers(&self) -> &[NativeInitializer] {
        self.native.initializers()
    }

    /// Instance members
    pub fn members(&self) -> &[NativeMember] {
        self.native.members()
    }

    /// Instance operations
    pub fn operations(&self) -> &[NativeOperation] {
        self.native.operations()
    }

    /// Attribute names
    pub fn attributes(&self) -> &[String] {
        self.native.attributes()
    }
}

fn can_be(native: &NativeType, target: &TypeKey) -> bool {
    if native.key() == target {
        return true;
    }
    if let Some(base) = native.base_type() {
        if can_be(&base, target) {
            return true;
        }
    }
    native.interfaces().iter().any(|i| can_be(i, target))
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TypeDescriptor {}

impl std::hash::Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("key", self.key())
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelkit_domain::Reflect;

    struct Shape;
    struct Circle;
    struct Drawable;

    impl Reflect for Drawable {
        fn native_type() -> NativeType {
            NativeType::builder_of::<Drawable>()
                .flags(TypeFlags::INTERFACE)
                .build()
        }
    }

    impl Reflect for Shape {
        fn native_type() -> NativeType {
            NativeType::builder_of::<Shape>()
                .implements(Drawable::native_type)
                .build()
        }
    }

    impl Reflect for Circle {
        fn native_type() -> NativeType {
            NativeType::builder_of::<Circle>().base(Shape::native_type).build()
        }
    }

    fn descriptor<T: Reflect>() -> TypeDescriptor {
        TypeDescriptor::new(T::native_type(), DescriptorKind::Reflected)
    }

    #[test]
    fn test_can_be_walks_base_and_interfaces() {
        let circle = descriptor::<Circle>();
        assert!(circle.can_be(&descriptor::<Circle>()));
        assert!(circle.can_be(&descriptor::<Shape>()));
        assert!(circle.can_be(&descriptor::<Drawable>()));
        assert!(!descriptor::<Shape>().can_be(&circle));
    }

    #[test]
    fn test_flags() {
        let drawable = descriptor::<Drawable>();
        assert!(drawable.is_interface());
        assert!(drawable.is_public());
        assert!(!drawable.is_array());
    }
}
