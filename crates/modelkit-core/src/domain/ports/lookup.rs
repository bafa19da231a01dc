//! Domain type lookup port

use std::sync::Arc;

use crate::domain::entities::DomainType;
use crate::error::Result;

/// Finds built domain types by id.
///
/// Invocation needs it to locate arguments through the domain type of each
/// parameter; the core context implements it.
pub trait DomainTypeLookup {
    fn domain_type_by_id(&self, id: &str) -> Result<Arc<DomainType>>;
}
