#![cfg(feature = "collection")]
//! Integration tests for the collection module.
//!
//! These tests exercise the combinators together and across both collection
//! shapes, the way downstream code composes them.

use indexmap::IndexMap;
use rstest::rstest;
use utilbelt::collection::{
    Each, contains, every, filter, first, index_of, last, map, pluck, reduce, reduce1, reject,
    some, sort_by, sort_by_field, uniq,
};

fn person(name: &str, age: i32) -> IndexMap<String, i32> {
    let mut fields = IndexMap::new();
    fields.insert("age".to_string(), age);
    fields.insert("name_length".to_string(), i32::try_from(name.len()).unwrap_or(0));
    fields
}

// =============================================================================
// Pipelines over sequences
// =============================================================================

#[rstest]
fn filter_map_reduce_pipeline() {
    let values = vec![9, 2, 7, 4, 5];
    let evens = filter(&values, |value| value % 2 == 0);
    let squared = map(&evens, |value| value * value);
    let total = reduce(&squared, 0, |sum, value| sum + value);
    assert_eq!(total, 4 + 16);
}

#[rstest]
fn uniq_then_sort_by_orders_deduplicated_values() {
    let values = vec![3, 1, 3, 2, 1];
    let ordered = sort_by(&uniq(&values), |value| *value);
    assert_eq!(ordered, vec![1, 2, 3]);
}

#[rstest]
fn first_last_and_index_of_compose_with_sorting() {
    let values = vec![40, 10, 30, 20];
    let ordered = sort_by(&values, |value| *value);
    assert_eq!(first(&ordered), Some(&10));
    assert_eq!(last(&ordered), Some(&40));
    assert_eq!(index_of(&ordered, &30), Some(2));
    // The original order is untouched.
    assert_eq!(index_of(&values, &30), Some(2));
    assert_eq!(values, vec![40, 10, 30, 20]);
}

#[rstest]
fn reduce1_matches_seeded_reduce_over_a_filtered_view() {
    let values = vec![1, 2, 3, 4, 5, 6];
    let evens = filter(&values, |value| value % 2 == 0);
    assert_eq!(
        reduce1(&evens, |maximum, value| maximum.max(*value)),
        Some(6)
    );
    assert_eq!(reduce(&evens, i32::MIN, |maximum, value| maximum.max(*value)), 6);
}

// =============================================================================
// Mappings flow through the same combinators
// =============================================================================

#[rstest]
fn mapping_values_flow_through_shape_agnostic_combinators() {
    let mut inventory: IndexMap<String, i32> = IndexMap::new();
    inventory.insert("apples".to_string(), 4);
    inventory.insert("pears".to_string(), 0);
    inventory.insert("plums".to_string(), 7);

    assert_eq!(map(&inventory, |count| count * 2), vec![8, 0, 14]);
    assert_eq!(filter(&inventory, |count| *count > 0), vec![4, 7]);
    assert_eq!(reject(&inventory, |count| *count > 0), vec![0]);
    assert!(contains(&inventory, &7));
    assert!(some(&inventory, |count| *count == 0));
    assert!(!every(&inventory, |count| *count > 0));
    assert_eq!(reduce(&inventory, 0, |sum, count| sum + count), 11);
}

#[rstest]
fn each_exposes_keys_while_combinators_stay_value_only() {
    let mut inventory: IndexMap<String, i32> = IndexMap::new();
    inventory.insert("apples".to_string(), 4);
    inventory.insert("plums".to_string(), 7);

    let mut labels = Vec::new();
    inventory.each(|count, key, _collection| labels.push(format!("{key}={count}")));
    assert_eq!(labels, vec!["apples=4", "plums=7"]);
}

// =============================================================================
// Field-driven combinators
// =============================================================================

#[rstest]
fn sort_by_field_orders_people_by_age_stably() {
    let people = vec![
        person("Noel", 3),
        person("Ada", 1),
        person("Grace", 2),
        person("Brendan", 1),
    ];
    let ordered = sort_by_field(&people, &"age".to_string());
    let ages: Vec<i32> = ordered.iter().map(|fields| fields["age"]).collect();
    assert_eq!(ages, vec![1, 1, 2, 3]);

    // Stable: Ada (length 3) came before Brendan (length 7) in the input.
    let name_lengths: Vec<i32> = ordered
        .iter()
        .map(|fields| fields["name_length"])
        .collect();
    assert_eq!(name_lengths, vec![3, 7, 5, 4]);
}

#[rstest]
fn pluck_feeds_sequence_combinators() {
    let people = vec![person("Ada", 36), person("Grace", 45), person("Noel", 36)];
    let ages: Vec<i32> = pluck(&people, &"age".to_string())
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(uniq(&ages), vec![36, 45]);
    assert!(every(&ages, |age| *age > 30));
}
