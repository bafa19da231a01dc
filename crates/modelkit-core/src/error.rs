//! Error types for modelkit operations

use std::sync::Arc;

use modelkit_domain::DomainError;

/// Result type alias for modelkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for modelkit operations
///
/// Cloneable so that a configured failure (see
/// [`LocatorChain::on_fail_throw`](crate::LocatorChain::on_fail_throw)) can be
/// handed out more than once.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The coding style has no mapping for a type
    #[error("Type '{type_name}' is not configured: {reason}")]
    TypeNotConfigured {
        /// Name of the unconfigured type
        type_name: String,
        /// Why the coding style rejected it
        reason: String,
    },

    /// An initializer produces a different type than its owner
    #[error("Initializer '{initializer}' should initialize {expected} but initializes {actual}")]
    InitializedTypeMismatch {
        /// Initializer name
        initializer: String,
        /// Owning type
        expected: String,
        /// Type the initializer actually produces
        actual: String,
    },

    /// Overloads of one operation disagree on the return type
    #[error("Return type of '{name}' should be {expected} but it is {actual}")]
    ReturnTypesDoNotMatch {
        /// Operation name
        name: String,
        /// Return type of the existing groups
        expected: String,
        /// Return type of the rejected group
        actual: String,
    },

    /// Overloads declare the same parameter name with different types
    #[error("Parameter '{parameter}' of '{name}' is declared as {actual} but other groups declare it as {expected}")]
    ParameterTypesDoNotMatch {
        /// Operation or initializer name
        name: String,
        /// Parameter name
        parameter: String,
        /// Type declared by the existing groups
        expected: String,
        /// Type declared by the rejected group
        actual: String,
    },

    /// A group with the same parameter names was already added
    #[error("'{name}' already has a group with signature ({signature})")]
    IdenticalSignatureAlreadyAdded {
        /// Operation or initializer name
        name: String,
        /// Comma separated parameter names
        signature: String,
    },

    /// Two members with the same name were offered for one type
    #[error("Member '{name}' is already defined on {owner}")]
    DuplicateMember {
        /// Owning type
        owner: String,
        /// Member name
        name: String,
    },

    /// No locator in the chain accepted the request
    #[error("Cannot locate {type_name} with id(s) [{}]", .ids.join(", "))]
    CannotLocate {
        /// Requested type
        type_name: String,
        /// Requested ids
        ids: Vec<String>,
    },

    /// A locator returned a different number of objects than ids requested
    #[error("Locator returned {actual} object(s) for {expected} id(s) [{}] of type {type_name}", .ids.join(", "))]
    LocateCountMismatch {
        /// Requested type
        type_name: String,
        /// Number of requested ids
        expected: usize,
        /// Number of returned objects
        actual: usize,
        /// Requested ids
        ids: Vec<String>,
    },

    /// Domain types were requested before the first build
    #[error("Domain types are not built yet, call build_domain_types first")]
    ContextNotInitialized,

    /// Failure raised by a collaborator (locator, extractor, converter), passed through as is
    #[error(transparent)]
    External(Arc<dyn std::error::Error + Send + Sync>),

    /// Failure raised by a native member, operation or initializer
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Invalid configuration document
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a type-not-configured error
    pub fn type_not_configured(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TypeNotConfigured {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a cannot-locate error for a single id
    pub fn cannot_locate(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::CannotLocate {
            type_name: type_name.into(),
            ids: vec![id.into()],
        }
    }

    /// Create a cannot-locate error for several ids
    pub fn cannot_locate_many(type_name: impl Into<String>, ids: &[String]) -> Self {
        Self::CannotLocate {
            type_name: type_name.into(),
            ids: ids.to_vec(),
        }
    }

    /// Wrap a collaborator failure without altering it
    pub fn external<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::External(Arc::new(error))
    }

    /// Whether this error means "skip the element and keep building"
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::TypeNotConfigured { .. }
                | Self::InitializedTypeMismatch { .. }
                | Self::ReturnTypesDoNotMatch { .. }
                | Self::ParameterTypesDoNotMatch { .. }
                | Self::IdenticalSignatureAlreadyAdded { .. }
                | Self::DuplicateMember { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
