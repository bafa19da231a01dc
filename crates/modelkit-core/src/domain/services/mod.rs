//! Domain services
//!
//! Stateless algorithms over domain entities: locating through a chain of
//! locators and picking an overload group for named arguments.

pub mod locator_chain;
pub mod parameter_resolver;

pub use locator_chain::LocatorChain;
pub use parameter_resolver::{ParameterResolver, Resolution, Signature, select_group};
