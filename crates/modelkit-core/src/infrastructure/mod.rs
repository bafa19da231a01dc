//! Infrastructure layer - Caching and stock adapters
//!
//! The type descriptor cache, the conventional coding style and locator
//! adapters.

pub mod conventional;
pub mod locators;
pub mod type_cache;

pub use conventional::*;
pub use locators::*;
pub use type_cache::TypeCache;
