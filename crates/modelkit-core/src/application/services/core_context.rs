//! Core context owning one build of the domain-type set

use std::collections::HashMap;
use std::sync::Arc;

use modelkit_domain::Reflect;
use parking_lot::RwLock;

use super::DomainTypeBuilder;
use crate::application::dto::{ApplicationModel, ObjectModel};
use crate::domain::entities::DomainType;
use crate::domain::ports::{CodingStyle, DomainTypeLookup};
use crate::domain::value_objects::{BuildReport, TypeDescriptor, TypeKey};
use crate::error::{Error, Result};
use crate::infrastructure::TypeCache;

#[derive(Debug, Default)]
struct DomainTypeSet {
    ordered: Vec<Arc<DomainType>>,
    by_id: HashMap<String, usize>,
    by_key: HashMap<TypeKey, usize>,
}

impl DomainTypeSet {
    fn insert(&mut self, domain_type: DomainType) -> Result<()> {
        if let Some(&existing) = self.by_id.get(domain_type.id()) {
            return Err(Error::Config(format!(
                "type id '{}' is used by both {} and {}",
                domain_type.id(),
                self.ordered[existing].descriptor().key(),
                domain_type.descriptor().key()
            )));
        }

        let index = self.ordered.len();
        self.by_id.insert(domain_type.id().to_string(), index);
        self.by_key.insert(domain_type.descriptor().key().clone(), index);
        self.ordered.push(Arc::new(domain_type));
        Ok(())
    }
}

/// Builds and serves the domain types of one coding style.
///
/// Lookups fail with [`Error::ContextNotInitialized`] until
/// [`build_domain_types`](Self::build_domain_types) has run. Each build
/// replaces the whole set with new instances; between builds every lookup
/// for the same type returns the same `Arc`.
pub struct CoreContext {
    coding_style: Arc<dyn CodingStyle>,
    cache: Arc<TypeCache>,
    domain_types: RwLock<Option<Arc<DomainTypeSet>>>,
}

impl CoreContext {
    pub fn new(coding_style: Arc<dyn CodingStyle>, cache: Arc<TypeCache>) -> Self {
        Self {
            coding_style,
            cache,
            domain_types: RwLock::new(None),
        }
    }

    /// Context over the process-wide type cache
    pub fn with_shared_cache(coding_style: Arc<dyn CodingStyle>) -> Self {
        Self::new(coding_style, TypeCache::shared())
    }

    pub fn coding_style(&self) -> &Arc<dyn CodingStyle> {
        &self.coding_style
    }

    pub fn cache(&self) -> &Arc<TypeCache> {
        &self.cache
    }

    /// Build a domain type for every type of the coding style.
    ///
    /// Returns the elements left out along the way. A type whose type-level
    /// queries fail aborts the build and keeps the previous set in place.
    pub fn build_domain_types(&self) -> Result<BuildReport> {
        let types = self.coding_style.types();
        self.cache.add_domain_types(types.iter().cloned());

        let builder = DomainTypeBuilder::new(self.coding_style.as_ref(), &self.cache);
        let mut set = DomainTypeSet::default();
        let mut report = BuildReport::new();

        for native in &types {
            let descriptor = self.cache.get(native);
            let built = builder.build(&descriptor)?;
            report.append(built.report);
            set.insert(built.domain_type)?;
        }

        tracing::debug!(types = set.ordered.len(), skipped = report.len(), "domain types built");
        *self.domain_types.write() = Some(Arc::new(set));
        Ok(report)
    }

    /// Every domain type, in coding style order
    pub fn domain_types(&self) -> Result<Vec<Arc<DomainType>>> {
        Ok(self.current()?.ordered.clone())
    }

    pub fn domain_type(&self, ty: &TypeDescriptor) -> Result<Arc<DomainType>> {
        let set = self.current()?;
        set.by_key
            .get(ty.key())
            .map(|&index| Arc::clone(&set.ordered[index]))
            .ok_or_else(|| Error::type_not_configured(ty.full_name(), "no domain type was built for it"))
    }

    pub fn domain_type_of<T: Reflect>(&self) -> Result<Arc<DomainType>> {
        self.domain_type(&self.cache.get_of::<T>())
    }

    pub fn domain_type_by_id(&self, id: &str) -> Result<Arc<DomainType>> {
        let set = self.current()?;
        set.by_id
            .get(id)
            .map(|&index| Arc::clone(&set.ordered[index]))
            .ok_or_else(|| Error::type_not_configured(id, "no domain type has this id"))
    }

    /// Object models of every domain type
    pub fn application_model(&self) -> Result<ApplicationModel> {
        let models = self
            .current()?
            .ordered
            .iter()
            .map(|domain_type| ObjectModel::from_domain_type(domain_type))
            .collect::<Result<Vec<_>>>()?;
        Ok(ApplicationModel { models })
    }

    fn current(&self) -> Result<Arc<DomainTypeSet>> {
        self.domain_types
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(Error::ContextNotInitialized)
    }
}

impl DomainTypeLookup for CoreContext {
    fn domain_type_by_id(&self, id: &str) -> Result<Arc<DomainType>> {
        CoreContext::domain_type_by_id(self, id)
    }
}

impl std::fmt::Debug for CoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let built = self.domain_types.read().as_ref().map(|set| set.ordered.len());
        f.debug_struct("CoreContext")
            .field("cache", &self.cache)
            .field("domain_types", &built)
            .finish()
    }
}
