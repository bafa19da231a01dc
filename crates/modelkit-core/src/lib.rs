//! # modelkit
//!
//! Runtime domain models derived from native type descriptions.
//!
//! Given a set of business types and a coding style (a convention engine),
//! modelkit builds one [`DomainType`] per type: identity, members,
//! operations, initializers and marks, ready for a generic service or
//! client layer.
//!
//! ## Architecture
//!
//! - **Type cache** ([`TypeCache`]): reference-stable, lazily classified
//!   descriptors with proxy substitution
//! - **Domain-type builder** ([`DomainTypeBuilder`]): asks the
//!   [`CodingStyle`] about a type and keeps every element that validates
//! - **Locator chain** ([`LocatorChain`]): ordered fallback from ids to
//!   objects
//! - **Parameter resolver** ([`ParameterResolver`]): picks the overload
//!   group that fits a set of named arguments
//!
//! [`CoreContext`] ties these together for one coding style.

#![warn(rust_2018_idioms)]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    entities::{
        DomainInitializer, DomainMember, DomainOperation, DomainParameter, DomainType,
        OperationResult, OverloadSet, ParameterGroup,
    },
    ports::{
        CodingStyle, DomainTypeLookup, IdExtractor, Locator, OptionalLocator, ValueBy,
        ValueExtractor,
    },
    services::{LocatorChain, ParameterResolver, Resolution, Signature, select_group},
    value_objects::{
        BuildDiagnostic, BuildReport, DescriptorKind, ElementKind, Marks, ObjectRef,
        ParameterData, ParameterValueData, TypeDescriptor, TypeKey, Value,
    },
};

// Application layer exports
pub use application::{
    BuiltType, CoreContext, DomainTypeBuilder,
    dto::{
        ApplicationModel, InitializerModel, MemberModel, ObjectModel, OperationModel,
        ParameterModel, ResultModel, StaticInstanceModel,
    },
};

// Infrastructure exports
pub use infrastructure::{
    ConstantLocator, DelegateLocator, TypeCache,
    conventional::{ConventionalCodingStyle, Conventions, ListConventions, patterns},
};

pub use config::{ModelConfig, ShortModelId};
pub use error::{Error, Result};

// Native description re-exports
pub use modelkit_domain::{
    DomainError, DomainResult, NativeInitializer, NativeMember, NativeOperation, NativeParameter,
    NativeType, NativeTypeBuilder, Parametric, Reflect, TypeFlags, TypeFn,
};

/// Convenient re-exports for describing and building a domain model
pub mod prelude {
    pub use super::{
        CodingStyle, ConventionalCodingStyle, CoreContext, DelegateLocator, DomainType, Error,
        Locator, LocatorChain, NativeInitializer, NativeMember, NativeOperation, NativeParameter,
        NativeType, OptionalLocator, ParameterValueData, Reflect, Result, TypeCache, TypeKey,
        Value,
    };
}
