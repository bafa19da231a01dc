//! Type descriptor cache
//!
//! Maps native type identities to lazily classified, reference-stable
//! descriptors.

use dashmap::DashMap;
use modelkit_domain::{NativeType, Reflect, TypeFlags, TypeKey};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::domain::value_objects::{DescriptorKind, TypeDescriptor};

type ProxyPredicate = Arc<dyn Fn(&NativeType) -> bool + Send + Sync>;
type ProxyUnwrap = Arc<dyn Fn(&NativeType) -> NativeType + Send + Sync>;

#[derive(Clone)]
struct ProxyMatcher {
    matches: ProxyPredicate,
    unwrap: ProxyUnwrap,
}

impl Default for ProxyMatcher {
    fn default() -> Self {
        Self {
            matches: Arc::new(|_| false),
            unwrap: Arc::new(NativeType::clone),
        }
    }
}

static SHARED: Lazy<Arc<TypeCache>> = Lazy::new(|| Arc::new(TypeCache::new()));

/// Thread-safe cache of type descriptors
///
/// Hits are served from a sharded `DashMap` without taking the miss lock.
/// Misses are serialized by a single mutex and re-checked under it, so
/// concurrent first requests for one type always observe the same
/// `Arc<TypeDescriptor>`.
///
/// # Design Philosophy
/// - One descriptor instance per identity for the lifetime of the cache
/// - Proxy identities share the descriptor of their real type
/// - Registering domain types or a proxy matcher invalidates everything
///
/// # Examples
/// ```
/// # use modelkit::TypeCache;
/// # use std::sync::Arc;
/// let cache = TypeCache::new();
/// let first = cache.get_of::<String>();
/// let second = cache.get_of::<String>();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub struct TypeCache {
    entries: DashMap<TypeKey, Arc<TypeDescriptor>>,
    miss_lock: Mutex<()>,
    domain_types: RwLock<Vec<NativeType>>,
    proxy: RwLock<ProxyMatcher>,
}

impl TypeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            miss_lock: Mutex::new(()),
            domain_types: RwLock::new(Vec::new()),
            proxy: RwLock::new(ProxyMatcher::default()),
        }
    }

    /// Process-wide cache instance
    pub fn shared() -> Arc<TypeCache> {
        Arc::clone(&SHARED)
    }

    /// Descriptor of a native type
    pub fn get(&self, native: &NativeType) -> Arc<TypeDescriptor> {
        if let Some(hit) = self.cached(native.key()) {
            return hit;
        }

        let _guard = self.miss_lock.lock();

        if let Some(hit) = self.cached(native.key()) {
            return hit;
        }

        let proxy = self.proxy.read().clone();
        if (proxy.matches)(native) {
            let actual = (proxy.unwrap)(native);
            let descriptor = match self.cached(actual.key()) {
                Some(descriptor) => descriptor,
                None => self.create(actual),
            };

            tracing::trace!(proxy = %native.key(), actual = %descriptor.key(), "proxy type resolved");
            self.entries
                .insert(native.key().clone(), Arc::clone(&descriptor));

            return descriptor;
        }

        self.create(native.clone())
    }

    /// Descriptor of an optional native type; absent in, absent out
    pub fn get_opt(&self, native: Option<&NativeType>) -> Option<Arc<TypeDescriptor>> {
        native.map(|native| self.get(native))
    }

    /// Descriptor of a reflectable Rust type
    pub fn get_of<T: Reflect>(&self) -> Arc<TypeDescriptor> {
        self.get(&T::native_type())
    }

    /// Descriptor of the unit type
    pub fn void(&self) -> Arc<TypeDescriptor> {
        self.get(&NativeType::void())
    }

    /// Register business types; already registered identities are ignored.
    ///
    /// Invalidates every cached descriptor.
    pub fn add_domain_types<I>(&self, types: I)
    where
        I: IntoIterator<Item = NativeType>,
    {
        let _guard = self.miss_lock.lock();
        {
            let mut domain_types = self.domain_types.write();
            for native in types {
                if !domain_types.contains(&native) {
                    domain_types.push(native);
                }
            }
        }
        self.entries.clear();
    }

    /// Descriptors of the registered business types, in registration order
    pub fn domain_types(&self) -> Vec<Arc<TypeDescriptor>> {
        let registered = self.domain_types.read().clone();
        registered.iter().map(|native| self.get(native)).collect()
    }

    /// Install a proxy matcher.
    ///
    /// Types matching `matches` are replaced by `unwrap(type)`; both
    /// identities then resolve to one descriptor. Invalidates every cached
    /// descriptor.
    pub fn set_proxy_matcher<M, U>(&self, matches: M, unwrap: U)
    where
        M: Fn(&NativeType) -> bool + Send + Sync + 'static,
        U: Fn(&NativeType) -> NativeType + Send + Sync + 'static,
    {
        self.install_proxy(ProxyMatcher {
            matches: Arc::new(matches),
            unwrap: Arc::new(unwrap),
        });
    }

    /// Remove the proxy matcher. Invalidates every cached descriptor.
    pub fn reset_proxy_matcher(&self) {
        self.install_proxy(ProxyMatcher::default());
    }

    /// Drop cached descriptors, registered domain types and the proxy matcher
    pub fn clear(&self) {
        let _guard = self.miss_lock.lock();
        self.domain_types.write().clear();
        *self.proxy.write() = ProxyMatcher::default();
        self.entries.clear();
    }

    /// Number of cached identities (proxies included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn install_proxy(&self, matcher: ProxyMatcher) {
        let _guard = self.miss_lock.lock();
        *self.proxy.write() = matcher;
        self.entries.clear();
    }

    fn cached(&self, key: &TypeKey) -> Option<Arc<TypeDescriptor>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    // Caller holds the miss lock.
    fn create(&self, native: NativeType) -> Arc<TypeDescriptor> {
        let kind = self.classify(&native);
        tracing::trace!(key = %native.key(), ?kind, "type classified");

        let key = native.key().clone();
        let descriptor = Arc::new(TypeDescriptor::new(native, kind));
        self.entries.insert(key, Arc::clone(&descriptor));
        descriptor
    }

    fn classify(&self, native: &NativeType) -> DescriptorKind {
        let flags = native.flags();

        if native.is_void() {
            DescriptorKind::Void
        } else if native.is_parseable() {
            DescriptorKind::Parseable
        } else if flags.contains(TypeFlags::ARRAY) {
            DescriptorKind::Array
        } else if flags.contains(TypeFlags::ENUM) {
            DescriptorKind::Enum
        } else if flags.contains(TypeFlags::OPEN_GENERIC) {
            DescriptorKind::OpenGeneric
        } else if self.domain_types.read().contains(native) {
            DescriptorKind::Domain
        } else {
            DescriptorKind::Reflected
        }
    }
}

impl Default for TypeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCache")
            .field("cached", &self.entries.len())
            .field("domain_types", &self.domain_types.read().len())
            .finish()
    }
}
