//! Native members, operations, initializers and parameters

use std::fmt;
use std::sync::Arc;

use super::{NativeType, TypeFn};
use crate::{DomainError, DomainResult, TypeKey, Value};

/// Reads a member value from a target object
pub type FetchFn = Arc<dyn Fn(&Value) -> DomainResult<Value> + Send + Sync>;

/// Invokes an operation on a target with positional arguments
pub type InvokeFn = Arc<dyn Fn(&Value, &[Value]) -> DomainResult<Value> + Send + Sync>;

/// Constructs a new object from positional arguments
pub type ConstructFn = Arc<dyn Fn(&[Value]) -> DomainResult<Value> + Send + Sync>;

/// Anything with an ordered parameter list (operations and initializers)
pub trait Parametric {
    /// Name shared by every overload of this element
    fn name(&self) -> &str;

    /// Ordered parameters
    fn parameters(&self) -> &[NativeParameter];

    /// Attribute names attached to the element
    fn attributes(&self) -> &[String];
}

/// One parameter of an operation or initializer
#[derive(Clone)]
pub struct NativeParameter {
    name: String,
    index: usize,
    value_type: TypeFn,
    optional: bool,
    default_value: Option<Value>,
    attributes: Vec<String>,
}

impl NativeParameter {
    /// Required parameter of the given type
    pub fn new(name: impl Into<String>, value_type: TypeFn) -> Self {
        Self {
            name: name.into(),
            index: 0,
            value_type,
            optional: false,
            default_value: None,
            attributes: Vec::new(),
        }
    }

    /// Mark the parameter optional with a default value
    pub fn with_default(mut self, default_value: impl Into<Value>) -> Self {
        self.optional = true;
        self.default_value = Some(default_value.into());
        self
    }

    /// Mark the parameter optional without a default value
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach an attribute name
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero based position in its owner's parameter list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Declared parameter type
    pub fn value_type(&self) -> NativeType {
        (self.value_type)()
    }

    /// Key of the declared parameter type
    pub fn value_type_key(&self) -> TypeKey {
        self.value_type().key().clone()
    }

    /// Whether callers may omit this parameter
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether a default value was declared
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// Declared default value
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Attribute names
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl fmt::Debug for NativeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeParameter")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("type", &self.value_type_key())
            .field("optional", &self.optional)
            .finish()
    }
}

fn indexed(parameters: Vec<NativeParameter>) -> Vec<NativeParameter> {
    parameters
        .into_iter()
        .enumerate()
        .map(|(index, mut p)| {
            p.index = index;
            p
        })
        .collect()
}

/// A readable property of a native type
#[derive(Clone)]
pub struct NativeMember {
    name: String,
    value_type: TypeFn,
    fetch: Option<FetchFn>,
    declaring: Option<TypeKey>,
    attributes: Vec<String>,
}

impl NativeMember {
    /// Member with the given value type and no accessor bound yet
    pub fn new(name: impl Into<String>, value_type: TypeFn) -> Self {
        Self {
            name: name.into(),
            value_type,
            fetch: None,
            declaring: None,
            attributes: Vec::new(),
        }
    }

    /// Bind the accessor
    pub fn with_fetch<F>(mut self, fetch: F) -> Self
    where
        F: Fn(&Value) -> DomainResult<Value> + Send + Sync + 'static,
    {
        self.fetch = Some(Arc::new(fetch));
        self
    }

    /// Attach an attribute name
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    pub(crate) fn declared_by(mut self, key: &TypeKey) -> Self {
        self.declaring.get_or_insert_with(|| key.clone());
        self
    }

    /// Member name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value type
    pub fn value_type(&self) -> NativeType {
        (self.value_type)()
    }

    /// Key of the type that declares this member
    pub fn declaring_type(&self) -> Option<&TypeKey> {
        self.declaring.as_ref()
    }

    /// Attribute names
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Read the member from a target object
    pub fn fetch_from(&self, target: &Value) -> DomainResult<Value> {
        match &self.fetch {
            Some(fetch) => fetch(target),
            None => Err(DomainError::NotSupported(format!(
                "member '{}' has no accessor",
                self.name
            ))),
        }
    }
}

impl fmt::Debug for NativeMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeMember")
            .field("name", &self.name)
            .field("type", self.value_type().key())
            .finish()
    }
}

/// A callable method of a native type
#[derive(Clone)]
pub struct NativeOperation {
    name: String,
    parameters: Vec<NativeParameter>,
    return_type: TypeFn,
    invoke: Option<InvokeFn>,
    declaring: Option<TypeKey>,
    attributes: Vec<String>,
}

impl NativeOperation {
    /// Operation with the given return type and no parameters yet
    pub fn new(name: impl Into<String>, return_type: TypeFn) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            invoke: None,
            declaring: None,
            attributes: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn param(mut self, parameter: NativeParameter) -> Self {
        self.parameters.push(parameter);
        self.parameters = indexed(std::mem::take(&mut self.parameters));
        self
    }

    /// Bind the implementation
    pub fn with_invoke<F>(mut self, invoke: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> DomainResult<Value> + Send + Sync + 'static,
    {
        self.invoke = Some(Arc::new(invoke));
        self
    }

    /// Attach an attribute name
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    pub(crate) fn declared_by(mut self, key: &TypeKey) -> Self {
        self.declaring.get_or_insert_with(|| key.clone());
        self
    }

    /// Declared return type
    pub fn return_type(&self) -> NativeType {
        (self.return_type)()
    }

    /// Key of the type that declares this operation
    pub fn declaring_type(&self) -> Option<&TypeKey> {
        self.declaring.as_ref()
    }

    /// Invoke on a target with positional arguments
    pub fn invoke(&self, target: &Value, args: &[Value]) -> DomainResult<Value> {
        match &self.invoke {
            Some(invoke) => invoke(target, args),
            None => Err(DomainError::NotSupported(format!(
                "operation '{}' has no implementation",
                self.name
            ))),
        }
    }
}

impl Parametric for NativeOperation {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &[NativeParameter] {
        &self.parameters
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl fmt::Debug for NativeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeOperation")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("returns", self.return_type().key())
            .finish()
    }
}

/// A constructor or factory producing instances of a native type
#[derive(Clone)]
pub struct NativeInitializer {
    name: String,
    parameters: Vec<NativeParameter>,
    initialized: Option<TypeFn>,
    construct: Option<ConstructFn>,
    declaring: Option<TypeKey>,
    attributes: Vec<String>,
}

impl NativeInitializer {
    /// Initializer producing its declaring type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            initialized: None,
            construct: None,
            declaring: None,
            attributes: Vec::new(),
        }
    }

    /// Declare that this initializer produces another type
    pub fn initializes(mut self, initialized: TypeFn) -> Self {
        self.initialized = Some(initialized);
        self
    }

    /// Append a parameter
    pub fn param(mut self, parameter: NativeParameter) -> Self {
        self.parameters.push(parameter);
        self.parameters = indexed(std::mem::take(&mut self.parameters));
        self
    }

    /// Bind the implementation
    pub fn with_construct<F>(mut self, construct: F) -> Self
    where
        F: Fn(&[Value]) -> DomainResult<Value> + Send + Sync + 'static,
    {
        self.construct = Some(Arc::new(construct));
        self
    }

    /// Attach an attribute name
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    pub(crate) fn declared_by(mut self, key: &TypeKey) -> Self {
        self.declaring.get_or_insert_with(|| key.clone());
        self
    }

    /// Explicitly declared produced type, if any
    pub fn initialized_type(&self) -> Option<NativeType> {
        self.initialized.map(|initialized| initialized())
    }

    /// Key of the type this initializer produces.
    ///
    /// Falls back to the declaring type when no explicit type was given.
    pub fn initialized_type_key(&self) -> Option<TypeKey> {
        match self.initialized {
            Some(initialized) => Some(initialized().key().clone()),
            None => self.declaring.clone(),
        }
    }

    /// Construct a new object from positional arguments
    pub fn construct(&self, args: &[Value]) -> DomainResult<Value> {
        match &self.construct {
            Some(construct) => construct(args),
            None => Err(DomainError::NotSupported(format!(
                "initializer '{}' has no implementation",
                self.name
            ))),
        }
    }
}

impl Parametric for NativeInitializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &[NativeParameter] {
        &self.parameters
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl fmt::Debug for NativeInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeInitializer")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("initializes", &self.initialized_type_key())
            .finish()
    }
}
