//! Locator adapters
//!
//! Closure-backed and constant locators usable both on their own and as
//! links of a [`LocatorChain`](crate::LocatorChain).

mod constant;
mod delegate;

pub use constant::ConstantLocator;
pub use delegate::DelegateLocator;
