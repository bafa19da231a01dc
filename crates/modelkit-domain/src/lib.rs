//! modelkit Domain Layer - Pure Value Objects
//!
//! This crate contains the dependency-light building blocks of modelkit:
//! type identities, marks, dynamic object values and the native type
//! description that stands in for runtime reflection.
//!
//! ## Architecture
//!
//! - **Value Objects**: Immutable concepts defined by their attributes
//!   (`TypeKey`, `Marks`, `Value`)
//! - **Reflection**: Explicit, registry-style descriptions of native types
//!   (`NativeType`, `NativeMember`, `NativeOperation`, `NativeInitializer`)
//!
//! Nothing in here knows about coding styles, caches or locators. Those live
//! in the `modelkit` core crate.

#![warn(missing_docs)]

pub mod reflection;
pub mod value_objects;

// Re-export core types
pub use reflection::{
    NativeInitializer, NativeMember, NativeOperation, NativeParameter, NativeType,
    NativeTypeBuilder, Parametric, Reflect, TypeFlags, TypeFn,
};
pub use value_objects::{Marks, ObjectRef, TypeKey, Value};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// Raised by native members, operations and initializers while fetching,
/// invoking or constructing values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Target value has an unexpected shape for the accessor
    #[error("Invalid target: expected {expected}, got {actual}")]
    InvalidTarget {
        /// Expected target description
        expected: String,
        /// Actual target description
        actual: String,
    },

    /// Argument at a position has an unexpected shape
    #[error("Invalid argument at position {position}: {message}")]
    InvalidArgument {
        /// Zero based parameter position
        position: usize,
        /// Error description
        message: String,
    },

    /// Text could not be parsed into the requested type
    #[error("Cannot parse '{input}' as {type_name}")]
    Parse {
        /// Input text
        input: String,
        /// Target type name
        type_name: String,
    },

    /// Operation has no implementation bound to it
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// General domain logic error
    #[error("Domain logic error: {0}")]
    Logic(String),
}

impl DomainError {
    /// Create an invalid target error
    pub fn invalid_target(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidTarget {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            position,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            type_name: type_name.into(),
        }
    }
}

impl From<String> for DomainError {
    fn from(error: String) -> Self {
        Self::Logic(error)
    }
}
