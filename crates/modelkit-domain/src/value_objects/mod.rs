//! Domain Value Objects
//!
//! Immutable objects that represent concepts in the domain
//! with no conceptual identity, only defined by their attributes.

mod marks;
mod type_key;
mod value;

pub use marks::Marks;
pub use type_key::TypeKey;
pub use value::{ObjectRef, Value};
