//! Dynamic object values
//!
//! Everything that flows through the object model (located objects, member
//! values, arguments, static instances) is a `Value`. Plain data uses the
//! scalar variants; live business objects ride in `Value::Object`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::TypeKey;

/// Shared handle to a live business object.
///
/// Equality is identity: two handles are equal only when they point at the
/// same allocation.
#[derive(Clone)]
pub struct ObjectRef {
    type_key: TypeKey,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// Wrap a Rust value, keyed by its own type name
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Wrap a value under an explicit type key
    pub fn with_key<T: Any + Send + Sync>(type_key: TypeKey, value: T) -> Self {
        Self {
            type_key,
            inner: Arc::new(value),
        }
    }

    /// Key of the native type this object belongs to
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// Borrow the object as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether both handles share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type_key", &self.type_key)
            .finish_non_exhaustive()
    }
}

/// A dynamically typed value in the object model
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Live business object
    Object(ObjectRef),
}

impl Value {
    /// Wrap a Rust value as an object
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(ObjectRef::new(value))
    }

    /// Whether this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text content, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Float content; integers widen
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Boolean content, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// List content, if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Object handle, if this is an object
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Borrow a live object as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_object().and_then(ObjectRef::downcast_ref::<T>)
    }

    /// Short variant name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(obj) => write!(f, "{}", obj.type_key()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Self::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
