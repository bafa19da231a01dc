//! Locator returning one fixed value

use crate::domain::ports::{Locator, OptionalLocator};
use crate::domain::value_objects::{TypeDescriptor, Value};
use crate::error::Result;

/// Answers every request with the same value
#[derive(Debug, Clone, Default)]
pub struct ConstantLocator(pub Value);

impl OptionalLocator for ConstantLocator {
    fn can_locate(&self, _ty: &TypeDescriptor, _id: &str) -> bool {
        true
    }

    fn locate_one(&self, _ty: &TypeDescriptor, _id: &str) -> Result<Value> {
        Ok(self.0.clone())
    }
}

impl Locator for ConstantLocator {
    fn locate_many(&self, _ty: &TypeDescriptor, ids: &[String]) -> Result<Vec<Value>> {
        Ok(vec![self.0.clone(); ids.len()])
    }
}
