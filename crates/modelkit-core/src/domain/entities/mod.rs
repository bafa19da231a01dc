//! Domain entities
//!
//! The domain type aggregate and its parts. Entities are created by the
//! domain-type builder and never change afterwards.

mod domain_initializer;
mod domain_member;
mod domain_operation;
mod domain_parameter;
mod domain_type;
mod overload_set;

pub use domain_initializer::DomainInitializer;
pub use domain_member::DomainMember;
pub use domain_operation::{DomainOperation, OperationResult};
pub use domain_parameter::DomainParameter;
pub use domain_type::DomainType;
pub use overload_set::{OverloadSet, ParameterGroup};
