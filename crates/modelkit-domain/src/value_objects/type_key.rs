//! Native type identity
//!
//! A `TypeKey` is the stable identity of one native type. Two native type
//! descriptions with the same key describe the same type, whatever else they
//! carry.

use std::fmt;
use std::sync::Arc;

/// Identity of a native type, usually its fully qualified name.
///
/// Cloning is cheap: the name is shared behind an `Arc<str>`.
///
/// # Examples
/// ```
/// # use modelkit_domain::TypeKey;
/// let key = TypeKey::new("shop::Order");
/// assert_eq!(key.short_name(), "Order");
/// assert_eq!(key.namespace(), Some("shop"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    /// Create a type key from a fully qualified name
    pub fn new(full_name: impl AsRef<str>) -> Self {
        Self(Arc::from(full_name.as_ref()))
    }

    /// Key for a Rust type, derived from `std::any::type_name`
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Full name as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, ignoring generic arguments
    pub fn short_name(&self) -> &str {
        let base = self.0.split('<').next().unwrap_or(&self.0);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Everything before the last path segment, if any
    pub fn namespace(&self) -> Option<&str> {
        let base = self.0.split('<').next().unwrap_or(&self.0);
        base.rfind("::").map(|pos| &base[..pos])
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&&*self.0).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeKey {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_and_namespace() {
        let key = TypeKey::new("shop::orders::OrderLine");
        assert_eq!(key.short_name(), "OrderLine");
        assert_eq!(key.namespace(), Some("shop::orders"));

        let bare = TypeKey::new("bool");
        assert_eq!(bare.short_name(), "bool");
        assert_eq!(bare.namespace(), None);
    }

    #[test]
    fn test_generic_arguments_are_ignored() {
        let key = TypeKey::new("alloc::vec::Vec<shop::Order>");
        assert_eq!(key.short_name(), "Vec");
        assert_eq!(key.namespace(), Some("alloc::vec"));
    }

    #[test]
    fn test_of_uses_type_name() {
        assert_eq!(TypeKey::of::<u32>().as_str(), "u32");
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
    }
}
