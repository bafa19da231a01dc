//! Ordered chain of optional locators with a fail policy

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{Locator, OptionalLocator};
use crate::domain::value_objects::{TypeDescriptor, Value};
use crate::error::{Error, Result};

type FailFactory = Arc<dyn Fn(&TypeDescriptor, &str) -> Error + Send + Sync>;

#[derive(Clone, Default)]
enum FailPolicy {
    #[default]
    CannotLocate,
    Return(Value),
    Throw(FailFactory),
}

/// Asks its locators in order; the first one that claims a request answers
/// it.
///
/// When no locator claims the request the fail policy decides: return a
/// configured value, raise a configured error, or raise
/// [`Error::CannotLocate`] naming the type and id.
///
/// # Examples
/// ```
/// # use modelkit::{DelegateLocator, LocatorChain, Locator, TypeCache, Value};
/// # use std::sync::Arc;
/// let mut chain = LocatorChain::new();
/// chain
///     .add(Arc::new(DelegateLocator::by(|_, id| Ok(Value::from(id))).when(|_, id| id.starts_with('a'))))
///     .on_fail_return(Value::from("default"));
///
/// let ty = TypeCache::new().get_of::<String>();
/// assert_eq!(chain.locate(&ty, "abc").unwrap(), Value::from("abc"));
/// assert_eq!(chain.locate(&ty, "xyz").unwrap(), Value::from("default"));
/// ```
#[derive(Clone, Default)]
pub struct LocatorChain {
    locators: Vec<Arc<dyn OptionalLocator>>,
    fail: FailPolicy,
}

impl LocatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locator
    pub fn add(&mut self, locator: Arc<dyn OptionalLocator>) -> &mut Self {
        self.locators.push(locator);
        self
    }

    /// Append the last locator of a fluent sequence
    pub fn done(&mut self, locator: Arc<dyn OptionalLocator>) -> &mut Self {
        self.add(locator)
    }

    /// Append the locators of another chain, keeping their order.
    ///
    /// The other chain's fail policy is not taken over.
    pub fn merge(&mut self, other: &LocatorChain) -> &mut Self {
        self.locators.extend(other.locators.iter().cloned());
        self
    }

    /// Return `value` when no locator claims a request
    pub fn on_fail_return(&mut self, value: Value) -> &mut Self {
        self.fail = FailPolicy::Return(value);
        self
    }

    /// Raise `error` when no locator claims a request
    pub fn on_fail_throw(&mut self, error: Error) -> &mut Self {
        self.fail = FailPolicy::Throw(Arc::new(move |_: &TypeDescriptor, _: &str| error.clone()));
        self
    }

    /// Raise the error built by `factory` when no locator claims a request
    pub fn on_fail_throw_with<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&TypeDescriptor, &str) -> Error + Send + Sync + 'static,
    {
        self.fail = FailPolicy::Throw(Arc::new(factory));
        self
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    fn fail(&self, ty: &TypeDescriptor, id: &str) -> Result<Value> {
        tracing::debug!(type_name = %ty.name(), id, "no locator claimed the request");
        match &self.fail {
            FailPolicy::Return(value) => Ok(value.clone()),
            FailPolicy::Throw(factory) => Err(factory(ty, id)),
            FailPolicy::CannotLocate => Err(Error::cannot_locate(ty.name(), id)),
        }
    }
}

impl Locator for LocatorChain {
    fn locate_many(&self, ty: &TypeDescriptor, ids: &[String]) -> Result<Vec<Value>> {
        ids.iter().map(|id| Locator::locate(self, ty, id)).collect()
    }

    fn locate(&self, ty: &TypeDescriptor, id: &str) -> Result<Value> {
        match self.locators.iter().find(|l| l.can_locate(ty, id)) {
            Some(locator) => locator.locate_one(ty, id),
            None => self.fail(ty, id),
        }
    }
}

impl OptionalLocator for LocatorChain {
    fn can_locate(&self, ty: &TypeDescriptor, id: &str) -> bool {
        self.locators.iter().any(|l| l.can_locate(ty, id))
    }

    fn locate_one(&self, ty: &TypeDescriptor, id: &str) -> Result<Value> {
        Locator::locate(self, ty, id)
    }
}

impl fmt::Debug for LocatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fail = match &self.fail {
            FailPolicy::CannotLocate => "cannot-locate",
            FailPolicy::Return(_) => "return",
            FailPolicy::Throw(_) => "throw",
        };
        f.debug_struct("LocatorChain")
            .field("locators", &self.locators.len())
            .field("fail", &fail)
            .finish()
    }
}
