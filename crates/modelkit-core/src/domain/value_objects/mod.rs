//! Core value objects
//!
//! Re-exports the pure value objects of `modelkit-domain` next to the
//! descriptor produced by the type cache and the argument payloads used
//! for invocation.

mod build_report;
mod parameter_data;
mod type_descriptor;

pub use build_report::{BuildDiagnostic, BuildReport, ElementKind};
pub use modelkit_domain::{Marks, ObjectRef, TypeKey, Value};
pub use parameter_data::{ParameterData, ParameterValueData};
pub use type_descriptor::{DescriptorKind, TypeDescriptor};
