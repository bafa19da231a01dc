//! Domain layer
//!
//! Entities, value objects, domain services and the ports the core consumes.
//! Nothing in here knows how a coding style is configured or where
//! descriptors are cached.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use services::*;
pub use value_objects::*;
