//! Property-based tests for value object invariants

use modelkit_domain::{Marks, NativeType, Reflect, TypeKey, Value};
use proptest::prelude::*;

proptest! {
    /// Marks never hold duplicates and keep first-insertion order
    #[test]
    fn marks_are_deduplicated_in_order(tags in prop::collection::vec("[a-d]{1,2}", 0..12)) {
        let marks = Marks::new(tags.clone());

        let mut expected: Vec<String> = Vec::new();
        for tag in tags {
            if !expected.contains(&tag) {
                expected.push(tag);
            }
        }

        prop_assert_eq!(marks.list(), expected.clone());
        prop_assert_eq!(marks.len(), expected.len());
        prop_assert!(expected.iter().all(|tag| marks.has(tag)));
    }

    /// Extending with existing marks changes nothing
    #[test]
    fn marks_extend_is_idempotent(tags in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let mut marks = Marks::new(tags.clone());
        let before = marks.clone();
        marks.extend(tags);
        prop_assert_eq!(marks, before);
    }

    /// Short name and namespace split a path at its last separator
    #[test]
    fn type_key_splits_last_segment(
        modules in prop::collection::vec("[a-z]{1,5}", 1..4),
        name in "[A-Z][a-z]{0,6}",
    ) {
        let namespace = modules.join("::");
        let full = format!("{namespace}::{name}");
        let key = TypeKey::new(&full);

        prop_assert_eq!(key.short_name(), name.as_str());
        prop_assert_eq!(key.namespace(), Some(namespace.as_str()));
        prop_assert_eq!(key.to_string(), full);
    }

    /// Integers parse back to the value they print as
    #[test]
    fn integer_text_parses_back(n in any::<i64>()) {
        let parsed = i64::native_type().parse(&n.to_string()).unwrap();
        prop_assert_eq!(parsed, Value::Integer(n));
    }

    /// Object handles compare by identity, not by content
    #[test]
    fn object_equality_is_identity(n in any::<i64>()) {
        let a = Value::object(n);
        let b = Value::object(n);
        prop_assert_eq!(a.clone(), a.clone());
        prop_assert_ne!(a, b);
    }
}

#[test]
fn native_type_identity_is_the_key() {
    let plain = NativeType::builder(TypeKey::new("shop::Order")).build();
    let decorated = NativeType::builder(TypeKey::new("shop::Order"))
        .attribute("audited")
        .build();

    assert_eq!(plain, decorated);
    assert_ne!(plain, NativeType::builder(TypeKey::new("shop::Customer")).build());
}
