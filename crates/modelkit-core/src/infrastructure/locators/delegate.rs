//! Closure-backed locator

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{Locator, OptionalLocator};
use crate::domain::value_objects::{TypeDescriptor, Value};
use crate::error::{Error, Result};

type LocateFn = Arc<dyn Fn(&TypeDescriptor, &str) -> Result<Value> + Send + Sync>;
type WhenFn = Arc<dyn Fn(&TypeDescriptor, &str) -> bool + Send + Sync>;

/// Locates objects one id at a time through a closure.
///
/// Claims every request unless restricted with [`when`](Self::when). Null
/// results are accepted unless [`accept_null_result`](Self::accept_null_result)
/// turns them into [`Error::CannotLocate`].
#[derive(Clone)]
pub struct DelegateLocator {
    locate: LocateFn,
    when: Option<WhenFn>,
    accept_null_result: bool,
}

impl DelegateLocator {
    pub fn by<F>(locate: F) -> Self
    where
        F: Fn(&TypeDescriptor, &str) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            locate: Arc::new(locate),
            when: None,
            accept_null_result: true,
        }
    }

    /// Only claim requests matching `when`
    pub fn when<P>(mut self, when: P) -> Self
    where
        P: Fn(&TypeDescriptor, &str) -> bool + Send + Sync + 'static,
    {
        self.when = Some(Arc::new(when));
        self
    }

    pub fn accept_null_result(mut self, accept: bool) -> Self {
        self.accept_null_result = accept;
        self
    }
}

impl OptionalLocator for DelegateLocator {
    fn can_locate(&self, ty: &TypeDescriptor, id: &str) -> bool {
        self.when.as_ref().is_none_or(|when| when(ty, id))
    }

    fn locate_one(&self, ty: &TypeDescriptor, id: &str) -> Result<Value> {
        let located = (self.locate)(ty, id)?;
        if located.is_null() && !self.accept_null_result {
            return Err(Error::cannot_locate(ty.name(), id));
        }
        Ok(located)
    }
}

impl Locator for DelegateLocator {
    fn locate_many(&self, ty: &TypeDescriptor, ids: &[String]) -> Result<Vec<Value>> {
        ids.iter().map(|id| self.locate_one(ty, id)).collect()
    }
}

impl fmt::Debug for DelegateLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateLocator")
            .field("conditional", &self.when.is_some())
            .field("accept_null_result", &self.accept_null_result)
            .finish()
    }
}
