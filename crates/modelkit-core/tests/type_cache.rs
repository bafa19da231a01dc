//! Type cache identity, proxy and concurrency behavior

mod common;

use common::{Customer, Order};
use modelkit::prelude::*;
use modelkit::DescriptorKind;
use std::sync::Arc;
use std::thread;

fn proxy_of(target: &NativeType) -> NativeType {
    NativeType::builder(TypeKey::new(format!("proxies::{}Proxy", target.name()))).build()
}

#[test]
fn test_same_type_same_descriptor() {
    let cache = TypeCache::new();

    let first = cache.get_of::<Order>();
    let second = cache.get(&Order::native_type());

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_registered_domain_types_are_classified() {
    let cache = TypeCache::new();
    cache.add_domain_types([Order::native_type(), Customer::native_type()]);
    cache.add_domain_types([Order::native_type()]);

    let domain_types = cache.domain_types();
    assert_eq!(domain_types.len(), 2);
    assert!(domain_types.iter().all(|ty| ty.is_domain_type()));
    assert_eq!(cache.get_of::<Order>().kind(), DescriptorKind::Domain);
    assert_eq!(cache.get_of::<Vec<Order>>().kind(), DescriptorKind::Array);
}

#[test]
fn test_proxy_shares_descriptor_with_actual_type() {
    let cache = TypeCache::new();
    let actual = cache.get_of::<Order>();

    cache.set_proxy_matcher(
        |native| native.namespace() == Some("proxies"),
        |_| Order::native_type(),
    );

    let proxy = proxy_of(&Order::native_type());
    let via_proxy = cache.get(&proxy);
    let direct = cache.get_of::<Order>();

    assert!(Arc::ptr_eq(&via_proxy, &direct));
    assert_eq!(via_proxy.key().as_str(), "shop::Order");
    // Installing the matcher invalidated the earlier entry
    assert!(!Arc::ptr_eq(&actual, &direct));
}

#[test]
fn test_reset_proxy_matcher_restores_plain_lookup() {
    let cache = TypeCache::new();
    cache.set_proxy_matcher(|native| native.namespace() == Some("proxies"), |_| Order::native_type());
    cache.reset_proxy_matcher();

    let proxy = proxy_of(&Order::native_type());
    assert_eq!(cache.get(&proxy).key().as_str(), "proxies::OrderProxy");
}

#[test]
fn test_concurrent_first_requests_observe_one_descriptor() {
    let cache = Arc::new(TypeCache::new());
    cache.add_domain_types([Order::native_type()]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get_of::<Order>())
        })
        .collect();

    let descriptors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &descriptors[0];
    assert!(descriptors.iter().all(|d| Arc::ptr_eq(d, first)));
}

#[test]
fn test_shared_cache_is_process_wide() {
    assert!(Arc::ptr_eq(&TypeCache::shared(), &TypeCache::shared()));
}
