//! Application layer - Use cases and orchestration
//!
//! Builds domain types through the coding style and exposes them as
//! object models.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{BuiltType, CoreContext, DomainTypeBuilder};
