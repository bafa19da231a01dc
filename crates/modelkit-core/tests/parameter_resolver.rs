//! Overload group selection and argument materialization

mod common;

use common::{Customer, Order};
use maplit::hashmap;
use modelkit::prelude::*;
use modelkit::select_group;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn names<'a>(supplied: &[&'a str]) -> HashSet<&'a str> {
    supplied.iter().copied().collect()
}

#[test]
fn test_exact_group_beats_larger_group() {
    let groups = vec![vec!["address"], vec!["address", "express"]];

    assert_eq!(select_group(&groups, &names(&["address"])), Some(0));
    assert_eq!(select_group(&groups, &names(&["address", "express"])), Some(1));
}

#[test]
fn test_no_exact_match_falls_back_to_matched_count() {
    let groups = vec![vec!["a"], vec!["a", "b"]];

    assert_eq!(select_group(&groups, &names(&["a", "c"])), Some(0));
    assert_eq!(select_group(&groups, &names(&["b", "c"])), Some(1));
}

#[test]
fn test_partial_match_prefers_fewest_unmatched() {
    let groups = vec![vec!["a", "b", "c"], vec!["a", "d"]];

    // Both groups match one name; the two-parameter group leaves less unmatched
    assert_eq!(select_group(&groups, &names(&["a"])), Some(1));
    // "b" and "c" outweigh the smaller group
    assert_eq!(select_group(&groups, &names(&["b", "c", "x"])), Some(0));
}

#[test]
fn test_nothing_supplied_picks_smallest_group() {
    let groups = vec![vec!["a", "b"], vec!["c"]];
    assert_eq!(select_group(&groups, &names(&[])), Some(1));
}

#[test]
fn test_perform_with_exact_group() {
    let context = common::shop_context();
    let order = context.domain_type_of::<Order>().unwrap();
    let target = order.locate("12").unwrap();

    let ship = order.operation("Ship").unwrap();
    let result = ship
        .perform(
            &context,
            &target,
            &hashmap! { "address".to_string() => ParameterValueData::reference("Main St") },
        )
        .unwrap();

    assert_eq!(result, Value::from("12 to Main St"));
}

#[test]
fn test_perform_fills_optional_default() {
    let context = common::shop_context();
    let order = context.domain_type_of::<Order>().unwrap();
    let target = order.locate("12").unwrap();
    let ship = order.operation("Ship").unwrap();

    let explicit = ship
        .perform(
            &context,
            &target,
            &hashmap! {
                "address".to_string() => ParameterValueData::reference("Main St"),
                "express".to_string() => ParameterValueData::reference("true"),
            },
        )
        .unwrap();
    assert_eq!(explicit, Value::from("12 to Main St express=true"));

    // The unknown name is ignored and the smaller group leaves nothing unmatched
    let ignored = ship
        .perform(
            &context,
            &target,
            &hashmap! {
                "address".to_string() => ParameterValueData::reference("Main St"),
                "priority".to_string() => ParameterValueData::reference("high"),
            },
        )
        .unwrap();
    assert_eq!(ignored, Value::from("12 to Main St"));

    let remind = order.operation("Remind").unwrap();
    let defaulted = remind.perform(&context, &target, &HashMap::new()).unwrap();
    assert_eq!(defaulted, Value::from("in 7 days"));
}

#[test]
fn test_domain_argument_is_located() {
    let context = common::shop_context();
    let order = context.domain_type_of::<Order>().unwrap();
    let target = order.locate("3").unwrap();

    let transfer = order.operation("Transfer").unwrap();
    let result = transfer
        .perform(
            &context,
            &target,
            &hashmap! { "customer".to_string() => ParameterValueData::reference("c2") },
        )
        .unwrap();

    assert_eq!(result, Value::from("Grace"));
}

#[test]
fn test_unlocatable_argument_fails_the_call() {
    let context = common::shop_context();
    let order = context.domain_type_of::<Order>().unwrap();
    let target = order.locate("3").unwrap();

    let err = order
        .operation("Transfer")
        .unwrap()
        .perform(
            &context,
            &target,
            &hashmap! { "customer".to_string() => ParameterValueData::reference("c9") },
        )
        .unwrap_err();

    assert!(matches!(err, Error::CannotLocate { ref ids, .. } if ids == &["c9".to_string()]));
}

#[test]
fn test_initialize_with_nested_initialization() {
    let context = common::shop_context();
    let customer = context.domain_type_of::<Customer>().unwrap();

    let created = customer
        .initializer()
        .unwrap()
        .initialize(
            &context,
            &hashmap! {
                "id".to_string() => ParameterValueData::reference("c7"),
                "name".to_string() => ParameterValueData::reference("Linus"),
            },
        )
        .unwrap();

    assert_eq!(
        created.downcast_ref::<Customer>(),
        Some(&Customer {
            id: "c7".into(),
            name: "Linus".into()
        })
    );
    assert_eq!(customer.id_of(&created).unwrap(), "c7");
}

#[test]
fn test_missing_required_argument_is_null() {
    let context = common::shop_context();
    let customer = context.domain_type_of::<Customer>().unwrap();

    let values: HashMap<String, ParameterValueData> =
        hashmap! { "id".to_string() => ParameterValueData::reference("c8") };
    let created = customer.initializer().unwrap().initialize(&context, &values).unwrap();

    assert_eq!(created.downcast_ref::<Customer>().map(|c| c.name.as_str()), Some(""));
}

proptest! {
    #[test]
    fn prop_selection_is_total_and_deterministic(
        groups in prop::collection::vec(
            prop::collection::vec("[a-e]", 0..4),
            1..5,
        ),
        supplied in prop::collection::hash_set("[a-f]", 0..5),
    ) {
        let supplied: HashSet<&str> = supplied.iter().map(String::as_str).collect();

        let first = select_group(&groups, &supplied);
        let second = select_group(&groups, &supplied);

        prop_assert!(first.is_some());
        prop_assert!(first.unwrap() < groups.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_exact_match_is_chosen(
        groups in prop::collection::vec(
            prop::collection::btree_set("[a-e]", 1..4),
            2..5,
        ),
        pick in any::<prop::sample::Index>(),
    ) {
        let groups: Vec<Vec<String>> = groups.into_iter().map(|g| g.into_iter().collect()).collect();
        let chosen = pick.index(groups.len());
        let supplied: HashSet<&str> = groups[chosen].iter().map(String::as_str).collect();

        let selected = select_group(&groups, &supplied).unwrap();
        let selected_names: HashSet<&str> = groups[selected].iter().map(String::as_str).collect();

        prop_assert_eq!(selected_names, supplied);
    }
}
