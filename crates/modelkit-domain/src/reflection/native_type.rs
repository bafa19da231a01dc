//! Native type handle and builder

use std::fmt;
use std::sync::Arc;

use super::{NativeInitializer, NativeMember, NativeOperation};
use crate::{DomainError, DomainResult, TypeKey, Value};

/// Lazy reference to another native type
pub type TypeFn = fn() -> NativeType;

/// Parses text into a value of the owning type
pub type ParseFn = Arc<dyn Fn(&str) -> DomainResult<Value> + Send + Sync>;

bitflags::bitflags! {
    /// Structural flags of a native type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u16 {
        /// Copied by value rather than shared by reference
        const VALUE_TYPE   = 0b0000_0000_0001;
        /// Closed set of named values
        const ENUM         = 0b0000_0000_0010;
        /// Homogeneous sequence with an element type
        const ARRAY        = 0b0000_0000_0100;
        /// Contract only, no instances of its own
        const INTERFACE    = 0b0000_0000_1000;
        /// Cannot be instantiated directly
        const ABSTRACT     = 0b0000_0001_0000;
        /// Has generic arguments
        const GENERIC      = 0b0000_0010_0000;
        /// Has unbound generic parameters
        const OPEN_GENERIC = 0b0000_0100_0000;
        /// Visible outside its module
        const PUBLIC       = 0b0000_1000_0000;
        /// Built-in scalar
        const PRIMITIVE    = 0b0001_0000_0000;
    }
}

/// Implemented by types that can describe themselves to modelkit
pub trait Reflect {
    /// Describe the implementing type
    fn native_type() -> NativeType;
}

struct NativeTypeData {
    key: TypeKey,
    name: String,
    namespace: Option<String>,
    flags: TypeFlags,
    base: Option<TypeFn>,
    interfaces: Vec<TypeFn>,
    generic_arguments: Vec<TypeFn>,
    element: Option<TypeFn>,
    enum_names: Vec<String>,
    enum_values: Vec<Value>,
    parse: Option<ParseFn>,
    initializers: Vec<NativeInitializer>,
    members: Vec<NativeMember>,
    static_members: Vec<NativeMember>,
    operations: Vec<NativeOperation>,
    static_operations: Vec<NativeOperation>,
    attributes: Vec<String>,
}

/// Immutable description of one native type.
///
/// Cheap to clone. Equality and hashing go through the [`TypeKey`] only.
///
/// # Examples
/// ```
/// # use modelkit_domain::{NativeType, NativeMember, Reflect, TypeKey};
/// let order = NativeType::builder(TypeKey::new("shop::Order"))
///     .member(NativeMember::new("no", i64::native_type))
///     .build();
///
/// assert_eq!(order.name(), "Order");
/// assert_eq!(order.members().len(), 1);
/// ```
#[derive(Clone)]
pub struct NativeType(Arc<NativeTypeData>);

impl NativeType {
    /// Start describing the type with the given key
    pub fn builder(key: TypeKey) -> NativeTypeBuilder {
        NativeTypeBuilder::new(key)
    }

    /// Start describing a Rust type, keyed by its type name
    pub fn builder_of<T: ?Sized>() -> NativeTypeBuilder {
        NativeTypeBuilder::new(TypeKey::of::<T>())
    }

    /// Description of a reflectable type
    pub fn of<T: Reflect>() -> Self {
        T::native_type()
    }

    /// The unit type, standing for "returns nothing"
    pub fn void() -> Self {
        <()>::native_type()
    }

    /// Identity
    pub fn key(&self) -> &TypeKey {
        &self.0.key
    }

    /// Short display name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Namespace or module path, if any
    pub fn namespace(&self) -> Option<&str> {
        self.0.namespace.as_deref()
    }

    /// Namespace and name joined with `::`
    pub fn full_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{ns}::{}", self.name()),
            None => self.name().to_string(),
        }
    }

    /// Structural flags
    pub fn flags(&self) -> TypeFlags {
        self.0.flags
    }

    /// Whether this is the unit type
    pub fn is_void(&self) -> bool {
        self.0.key == TypeKey::of::<()>()
    }

    /// Whether text can be parsed into this type
    pub fn is_parseable(&self) -> bool {
        self.0.parse.is_some()
    }

    /// Parse text into a value of this type
    pub fn parse(&self, text: &str) -> DomainResult<Value> {
        match &self.0.parse {
            Some(parse) => parse(text),
            None => Err(DomainError::parse(text, self.name())),
        }
    }

    /// Base type, if any
    pub fn base_type(&self) -> Option<NativeType> {
        self.0.base.map(|base| base())
    }

    /// Implemented interfaces
    pub fn interfaces(&self) -> Vec<NativeType> {
        self.0.interfaces.iter().map(|i| i()).collect()
    }

    /// Generic arguments
    pub fn generic_arguments(&self) -> Vec<NativeType> {
        self.0.generic_arguments.iter().map(|g| g()).collect()
    }

    /// Element type of an array
    pub fn element_type(&self) -> Option<NativeType> {
        self.0.element.map(|element| element())
    }

    /// Enum value names, in declaration order
    pub fn enum_names(&self) -> &[String] {
        &self.0.enum_names
    }

    /// Enum values, aligned with [`Self::enum_names`]
    pub fn enum_values(&self) -> &[Value] {
        &self.0.enum_values
    }

    /// Initializers
    pub fn initializers(&self) -> &[NativeInitializer] {
        &self.0.initializers
    }

    /// Instance members
    pub fn members(&self) -> &[NativeMember] {
        &self.0.members
    }

    /// Static members
    pub fn static_members(&self) -> &[NativeMember] {
        &self.0.static_members
    }

    /// Instance operations
    pub fn operations(&self) -> &[NativeOperation] {
        &self.0.operations
    }

    /// Static operations
    pub fn static_operations(&self) -> &[NativeOperation] {
        &self.0.static_operations
    }

    /// Attribute names attached to the type
    pub fn attributes(&self) -> &[String] {
        &self.0.attributes
    }
}

impl PartialEq for NativeType {
    fn eq(&self, other: &Self) -> bool {
        self.0.key == other.0.key
    }
}

impl Eq for NativeType {}

impl std::hash::Hash for NativeType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.key.hash(state);
    }
}

impl fmt::Debug for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeType")
            .field("key", &self.0.key)
            .field("flags", &self.0.flags)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.key)
    }
}

/// Builder for [`NativeType`]
pub struct NativeTypeBuilder {
    data: NativeTypeData,
}

impl NativeTypeBuilder {
    fn new(key: TypeKey) -> Self {
        let name = key.short_name().to_string();
        let namespace = key.namespace().map(str::to_string);
        Self {
            data: NativeTypeData {
                key,
                name,
                namespace,
                flags: TypeFlags::PUBLIC,
                base: None,
                interfaces: Vec::new(),
                generic_arguments: Vec::new(),
                element: None,
                enum_names: Vec::new(),
                enum_values: Vec::new(),
                parse: None,
                initializers: Vec::new(),
                members: Vec::new(),
                static_members: Vec::new(),
                operations: Vec::new(),
                static_operations: Vec::new(),
                attributes: Vec::new(),
            },
        }
    }

    /// Override the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    /// Override the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.data.namespace = Some(namespace.into());
        self
    }

    /// Add flags
    pub fn flags(mut self, flags: TypeFlags) -> Self {
        self.data.flags |= flags;
        self
    }

    /// Remove the public flag
    pub fn private(mut self) -> Self {
        self.data.flags.remove(TypeFlags::PUBLIC);
        self
    }

    /// Declare a base type
    pub fn base(mut self, base: TypeFn) -> Self {
        self.data.base = Some(base);
        self
    }

    /// Declare an implemented interface
    pub fn implements(mut self, interface: TypeFn) -> Self {
        self.data.interfaces.push(interface);
        self
    }

    /// Declare a generic argument
    pub fn generic_argument(mut self, argument: TypeFn) -> Self {
        self.data.flags |= TypeFlags::GENERIC;
        self.data.generic_arguments.push(argument);
        self
    }

    /// Declare an array of the given element type
    pub fn array_of(mut self, element: TypeFn) -> Self {
        self.data.flags |= TypeFlags::ARRAY;
        self.data.element = Some(element);
        self
    }

    /// Declare an enum with aligned names and values
    pub fn enumeration<N, S>(mut self, names: N, values: Vec<Value>) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.flags |= TypeFlags::ENUM | TypeFlags::VALUE_TYPE;
        self.data.enum_names = names.into_iter().map(Into::into).collect();
        self.data.enum_values = values;
        self
    }

    /// Make the type parseable from text
    pub fn parse_with<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> DomainResult<Value> + Send + Sync + 'static,
    {
        self.data.parse = Some(Arc::new(parse));
        self
    }

    /// Add an initializer
    pub fn initializer(mut self, initializer: NativeInitializer) -> Self {
        let initializer = initializer.declared_by(&self.data.key);
        self.data.initializers.push(initializer);
        self
    }

    /// Add an instance member
    pub fn member(mut self, member: NativeMember) -> Self {
        let member = member.declared_by(&self.data.key);
        self.data.members.push(member);
        self
    }

    /// Add a static member
    pub fn static_member(mut self, member: NativeMember) -> Self {
        let member = member.declared_by(&self.data.key);
        self.data.static_members.push(member);
        self
    }

    /// Add an instance operation
    pub fn operation(mut self, operation: NativeOperation) -> Self {
        let operation = operation.declared_by(&self.data.key);
        self.data.operations.push(operation);
        self
    }

    /// Add a static operation
    pub fn static_operation(mut self, operation: NativeOperation) -> Self {
        let operation = operation.declared_by(&self.data.key);
        self.data.static_operations.push(operation);
        self
    }

    /// Attach an attribute name
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.data.attributes.push(name.into());
        self
    }

    /// Finish the description
    pub fn build(self) -> NativeType {
        NativeType(Arc::new(self.data))
    }
}

impl Reflect for () {
    fn native_type() -> NativeType {
        NativeType::builder_of::<()>()
            .name("void")
            .flags(TypeFlags::VALUE_TYPE | TypeFlags::PRIMITIVE)
            .build()
    }
}

impl Reflect for String {
    fn native_type() -> NativeType {
        NativeType::builder_of::<String>().build()
    }
}

impl Reflect for bool {
    fn native_type() -> NativeType {
        NativeType::builder_of::<bool>()
            .flags(TypeFlags::VALUE_TYPE | TypeFlags::PRIMITIVE)
            .parse_with(|text| {
                text.trim()
                    .parse::<bool>()
                    .map(Value::Bool)
                    .map_err(|_| DomainError::parse(text, "bool"))
            })
            .build()
    }
}

macro_rules! reflect_integer {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn native_type() -> NativeType {
                    NativeType::builder_of::<$ty>()
                        .flags(TypeFlags::VALUE_TYPE | TypeFlags::PRIMITIVE)
                        .parse_with(|text| {
                            text.trim()
                                .parse::<$ty>()
                                .map(|v| Value::Integer(v as i64))
                                .map_err(|_| DomainError::parse(text, stringify!($ty)))
                        })
                        .build()
                }
            }
        )*
    };
}

reflect_integer!(i32, i64, u32);

impl Reflect for f64 {
    fn native_type() -> NativeType {
        NativeType::builder_of::<f64>()
            .flags(TypeFlags::VALUE_TYPE | TypeFlags::PRIMITIVE)
            .parse_with(|text| {
                text.trim()
                    .parse::<f64>()
                    .map(Value::Float)
                    .map_err(|_| DomainError::parse(text, "f64"))
            })
            .build()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn native_type() -> NativeType {
        NativeType::builder_of::<Vec<T>>()
            .array_of(T::native_type)
            .generic_argument(T::native_type)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Animal;
    struct Dog;

    impl Reflect for Animal {
        fn native_type() -> NativeType {
            NativeType::builder_of::<Animal>()
                .flags(TypeFlags::ABSTRACT)
                .build()
        }
    }

    impl Reflect for Dog {
        fn native_type() -> NativeType {
            NativeType::builder_of::<Dog>().base(Animal::native_type).build()
        }
    }

    #[test]
    fn test_void() {
        let void = NativeType::void();
        assert!(void.is_void());
        assert_eq!(void.name(), "void");
        assert!(!NativeType::of::<String>().is_void());
    }

    #[test]
    fn test_equality_is_by_key() {
        assert_eq!(NativeType::of::<Dog>(), NativeType::of::<Dog>());
        assert_ne!(NativeType::of::<Dog>(), NativeType::of::<Animal>());
    }

    #[test]
    fn test_base_type_is_lazy() {
        let dog = NativeType::of::<Dog>();
        let base = dog.base_type().unwrap();
        assert_eq!(base, NativeType::of::<Animal>());
        assert!(base.flags().contains(TypeFlags::ABSTRACT));
    }

    #[test]
    fn test_primitive_parsing() {
        let int = NativeType::of::<i32>();
        assert!(int.is_parseable());
        assert_eq!(int.parse(" 42 ").unwrap(), Value::Integer(42));
        assert!(int.parse("forty-two").is_err());

        assert_eq!(NativeType::of::<bool>().parse("true").unwrap(), Value::Bool(true));
        assert!(!NativeType::of::<String>().is_parseable());
    }

    #[test]
    fn test_vec_is_array() {
        let list = NativeType::of::<Vec<i64>>();
        assert!(list.flags().contains(TypeFlags::ARRAY | TypeFlags::GENERIC));
        assert_eq!(list.element_type().unwrap(), NativeType::of::<i64>());
    }

    #[test]
    fn test_enumeration() {
        let status = NativeType::builder(TypeKey::new("shop::Status"))
            .enumeration(["Open", "Closed"], vec!["Open".into(), "Closed".into()])
            .build();

        assert!(status.flags().contains(TypeFlags::ENUM));
        assert_eq!(status.enum_names(), &["Open".to_string(), "Closed".to_string()]);
        assert_eq!(status.full_name(), "shop::Status");
    }
}
