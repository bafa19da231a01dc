//! Convention-based coding style
//!
//! The stock [`CodingStyle`](crate::CodingStyle) implementation: ordered
//! conventions per query, plus reusable patterns.

mod coding_style;
pub mod convention;
pub mod patterns;

pub use coding_style::ConventionalCodingStyle;
pub use convention::{Convention, Conventions, ListConventions};
pub use patterns::{normalize_model_id, shorten_model_id};
