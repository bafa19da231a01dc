//! Ports - Interfaces the core consumes from its collaborators
//!
//! The convention engine, locators and extractors are supplied by
//! configuration. The core only ever talks to them through these traits.

mod coding_style;
mod extractors;
mod locator;
mod lookup;

pub use coding_style::CodingStyle;
pub use extractors::{IdExtractor, ValueBy, ValueExtractor};
pub use locator::{Locator, OptionalLocator};
pub use lookup::DomainTypeLookup;
