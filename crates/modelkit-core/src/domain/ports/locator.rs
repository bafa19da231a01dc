//! Object location ports

use modelkit_domain::Value;

use crate::domain::value_objects::TypeDescriptor;
use crate::error::{Error, Result};

/// Resolves identifiers of one type back to live objects.
///
/// Implementations must return exactly one object per requested id, in the
/// order of the ids.
pub trait Locator: Send + Sync {
    /// Locate a batch of objects
    fn locate_many(&self, ty: &TypeDescriptor, ids: &[String]) -> Result<Vec<Value>>;

    /// Locate a single object
    fn locate(&self, ty: &TypeDescriptor, id: &str) -> Result<Value> {
        let ids = [id.to_string()];
        let mut located = self.locate_many(ty, &ids)?;
        if located.len() != 1 {
            return Err(Error::LocateCountMismatch {
                type_name: ty.name().to_string(),
                expected: 1,
                actual: located.len(),
                ids: ids.to_vec(),
            });
        }
        Ok(located.remove(0))
    }
}

/// A locator that may decline a request
pub trait OptionalLocator: Send + Sync {
    /// Whether this locator claims the request
    fn can_locate(&self, ty: &TypeDescriptor, id: &str) -> bool;

    /// Produce the object for a claimed request
    fn locate_one(&self, ty: &TypeDescriptor, id: &str) -> Result<Value>;
}
