//! Data Transfer Objects for the application layer
//!
//! Read-only, serializable snapshots of built domain types for the
//! description layer.

pub mod object_model;

pub use object_model::{
    ApplicationModel, InitializerModel, MemberModel, ObjectModel, OperationModel, ParameterModel,
    ResultModel, StaticInstanceModel,
};
