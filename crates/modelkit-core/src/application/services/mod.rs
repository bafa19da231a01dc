//! Application services orchestrating domain-type construction

pub mod core_context;
pub mod domain_type_builder;

pub use core_context::CoreContext;
pub use domain_type_builder::{BuiltType, DomainTypeBuilder};
