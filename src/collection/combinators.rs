//! Shape-agnostic derived combinators.
//!
//! Every function in this module accepts any [`Each`] implementor and is
//! expressed in terms of [`Each::each`] or [`reduce`]; none of them
//! introduces a new traversal mechanism, only a new accumulation or
//! selection policy. Outputs are freshly-built sequences (or scalars); the
//! input collection is never mutated.
//!
//! # Composition
//!
//! The derivation chains mirror each function's definition:
//!
//! - [`reduce`], [`map`], [`filter`] fold or accumulate directly over `each`
//! - [`reject`] is [`filter`] with a negated predicate
//! - [`contains`] is a [`reduce`] to a boolean
//! - [`some`] is the De Morgan dual of [`every`]
//! - [`pluck`] is [`map`] specialized to [`Field`] access
//! - [`sort_by`] collects through [`map`] before sorting; [`sort_by_field`]
//!   is [`sort_by`] specialized to [`Field`] access

use std::cmp::Ordering;

use super::each::Each;
use super::field::Field;

/// Returns the value unchanged.
///
/// The unit element of function composition, and the building block for
/// truthiness-style default predicates: where the combinator contracts speak
/// of "the value's own truthiness", pass `identity`-shaped predicates such as
/// `|flag| *flag` for boolean elements.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::{every, identity};
///
/// assert_eq!(identity(42), 42);
///
/// let flags = vec![true, true];
/// assert!(every(&flags, |flag| identity(*flag)));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Left fold from an explicit seed.
///
/// Threads an accumulator through the collection in traversal order,
/// invoking `function(accumulator, element)` exactly once per element.
/// An empty collection returns the seed unchanged.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::reduce;
///
/// let numbers = vec![1, 2, 3];
/// let sum = reduce(&numbers, 0, |total, number| total + number);
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<C, B, F>(collection: &C, seed: B, mut function: F) -> B
where
    C: Each + ?Sized,
    F: FnMut(B, &C::Item) -> B,
{
    let mut accumulator = Some(seed);
    collection.each(|value, _key, _collection| {
        if let Some(current) = accumulator.take() {
            accumulator = Some(function(current, value));
        }
    });
    match accumulator {
        Some(result) => result,
        None => unreachable!("accumulator is restored after every step"),
    }
}

/// Left fold seeded by the first element.
///
/// The first element becomes the initial accumulator and is never passed to
/// `function`; folding starts at the second element, so `function` runs
/// `len - 1` times. A single-element collection returns that element
/// unmodified without invoking `function` at all.
///
/// Returns `None` for an empty collection: the no-seed fold of an empty
/// collection has no meaningful value, and `None` is the defined rendering
/// of that case. Supply [`reduce`] with an explicit seed when emptiness is
/// expected.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::reduce1;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(reduce1(&numbers, |total, number| total + number), Some(6));
///
/// // Single element: returned as-is, the closure is never invoked.
/// let single = vec![5];
/// assert_eq!(reduce1(&single, |total, number| total + number * number), Some(5));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce1(&empty, |total, number| total + number), None);
/// ```
pub fn reduce1<C, F>(collection: &C, mut function: F) -> Option<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut accumulator: Option<C::Item> = None;
    collection.each(|value, _key, _collection| {
        accumulator = Some(match accumulator.take() {
            Some(current) => function(current, value),
            None => value.clone(),
        });
    });
    accumulator
}

/// Applies `iterator` to each element, collecting the results.
///
/// The output has the same length as the input and preserves traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::map;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(map(&values, |value| value * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, B, F>(collection: &C, mut iterator: F) -> Vec<B>
where
    C: Each + ?Sized,
    F: FnMut(&C::Item) -> B,
{
    let mut results = Vec::new();
    collection.each(|value, _key, _collection| results.push(iterator(value)));
    results
}

/// Returns the elements for which `predicate` holds, in traversal order.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::filter;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(filter(&values, |value| value % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    collection.each(|value, _key, _collection| {
        if predicate(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// The complement of [`filter`]: the elements for which `predicate` does
/// not hold, in traversal order.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::reject;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(reject(&values, |value| value % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// True iff some element (or mapping value) equals `target`.
///
/// Comparison is `==` only, with no deep or structural special-casing beyond
/// what the element's `PartialEq` provides.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use utilbelt::collection::contains;
///
/// assert!(contains(&vec![1, 2, 3], &2));
/// assert!(!contains(&vec![1, 2, 3], &9));
///
/// let mut mapping: IndexMap<String, i32> = IndexMap::new();
/// mapping.insert("answer".to_string(), 42);
/// assert!(contains(&mapping, &42));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Each + ?Sized,
    C::Item: PartialEq,
{
    reduce(collection, false, |was_found, value| {
        was_found || value == target
    })
}

/// True iff every element satisfies `predicate`.
///
/// Vacuously true for an empty collection.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::every;
///
/// assert!(every(&vec![2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&vec![2, 3, 6], |value| value % 2 == 0));
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(every(&empty, |value| *value > 100));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Each + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(collection, true, |all_matched, value| {
        all_matched && predicate(value)
    })
}

/// True iff at least one element satisfies `predicate`.
///
/// Vacuously false for an empty collection. Expressed through [`every`]:
/// some element matches iff not every element fails.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::some;
///
/// assert!(some(&vec![1, 2, 3], |value| *value > 2));
/// assert!(!some(&vec![1, 2, 3], |value| *value > 9));
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(!some(&empty, |value| *value > 0));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Each + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// [`map`] specialized to [`Field`] access: extracts `element[key]` per
/// element.
///
/// An element missing the key yields `None`, so the output always has the
/// same length as the input.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use utilbelt::collection::pluck;
///
/// let people: Vec<IndexMap<String, u32>> = vec![
///     IndexMap::from([("age".to_string(), 36)]),
///     IndexMap::from([("age".to_string(), 45)]),
///     IndexMap::new(),
/// ];
/// let ages = pluck(&people, &"age".to_string());
/// assert_eq!(ages, vec![Some(36), Some(45), None]);
/// ```
pub fn pluck<C>(
    collection: &C,
    key: &<C::Item as Field>::Key,
) -> Vec<Option<<C::Item as Field>::Value>>
where
    C: Each + ?Sized,
    C::Item: Field,
    <C::Item as Field>::Value: Clone,
{
    map(collection, |element| element.field(key).cloned())
}

/// Returns a new sequence of the collection's elements sorted ascending by
/// the key that `key` derives from each element.
///
/// One general comparator-based stable sort: ties keep their original
/// traversal order, and the derived keys compare through their natural
/// [`Ord`] ordering whatever the element type is. The input is never
/// mutated.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::sort_by;
///
/// let words = vec!["grape", "fig", "apple"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "apple", "grape"]);
/// assert_eq!(
///     sort_by(&words, |word| word.to_string()),
///     vec!["apple", "fig", "grape"]
/// );
/// ```
pub fn sort_by<C, K, F>(collection: &C, key: F) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&C::Item) -> K,
{
    let mut sorted = map(collection, Clone::clone);
    sorted.sort_by_key(key);
    sorted
}

/// [`sort_by`] specialized to [`Field`] access: sorts ascending by
/// `element[key]`.
///
/// Elements missing the key sort after every element that has it; among
/// themselves they keep their original traversal order, as do elements with
/// equal keys.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use utilbelt::collection::sort_by_field;
///
/// let people: Vec<IndexMap<String, i32>> = vec![
///     IndexMap::from([("age".to_string(), 3)]),
///     IndexMap::from([("age".to_string(), 1)]),
///     IndexMap::from([("age".to_string(), 2)]),
/// ];
/// let ordered = sort_by_field(&people, &"age".to_string());
/// assert_eq!(ordered[0].get("age"), Some(&1));
/// assert_eq!(ordered[2].get("age"), Some(&3));
/// ```
pub fn sort_by_field<C>(collection: &C, key: &<C::Item as Field>::Key) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Field + Clone,
    <C::Item as Field>::Value: Ord,
{
    let mut sorted = map(collection, Clone::clone);
    sorted.sort_by(|left, right| match (left.field(key), right.field(key)) {
        (Some(left_value), Some(right_value)) => left_value.cmp(right_value),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_map_is_pointwise_and_length_preserving(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let widened = map(&values, |value| i64::from(*value) * 2);
            prop_assert_eq!(widened.len(), values.len());
            for (index, value) in values.iter().enumerate() {
                prop_assert_eq!(widened[index], i64::from(*value) * 2);
            }
        }

        #[test]
        fn prop_filter_reject_partition(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let kept = filter(&values, |value| value % 3 == 0);
            let dropped = reject(&values, |value| value % 3 == 0);
            prop_assert_eq!(kept.len() + dropped.len(), values.len());
            // Both halves preserve relative order of the original.
            let expected_kept: Vec<i32> =
                values.iter().copied().filter(|value| value % 3 == 0).collect();
            let expected_dropped: Vec<i32> =
                values.iter().copied().filter(|value| value % 3 != 0).collect();
            prop_assert_eq!(kept, expected_kept);
            prop_assert_eq!(dropped, expected_dropped);
        }

        #[test]
        fn prop_reduce_seeded_matches_iterator_fold(
            values in prop::collection::vec(-1000i64..1000, 0..50),
            seed in -1000i64..1000,
        ) {
            let folded = reduce(&values, seed, |total, number| total + number);
            let expected: i64 = seed + values.iter().sum::<i64>();
            prop_assert_eq!(folded, expected);
        }

        #[test]
        fn prop_reduce1_agrees_with_seeded_reduce_on_nonempty(
            values in prop::collection::vec(-1000i64..1000, 1..50)
        ) {
            let unseeded = reduce1(&values, |total, number| total + number);
            let seeded = reduce(&values[1..], values[0], |total, number| total + number);
            prop_assert_eq!(unseeded, Some(seeded));
        }

        #[test]
        fn prop_contains_agrees_with_std(
            values in prop::collection::vec(0i32..20, 0..30),
            target in 0i32..20,
        ) {
            prop_assert_eq!(contains(&values, &target), values.contains(&target));
        }

        #[test]
        fn prop_some_is_dual_of_every(
            values in prop::collection::vec(any::<i32>(), 0..30)
        ) {
            let negative = |value: &i32| *value < 0;
            prop_assert_eq!(
                some(&values, negative),
                !every(&values, |value| !negative(value))
            );
        }

        #[test]
        fn prop_sort_by_is_a_sorted_permutation(
            values in prop::collection::vec(any::<i32>(), 0..30)
        ) {
            let sorted = sort_by(&values, |value| *value);
            prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
            let mut expected = values.clone();
            expected.sort_unstable();
            let mut actual = sorted;
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_sort_by_is_stable(
            values in prop::collection::vec((0i32..5, any::<i32>()), 0..30)
        ) {
            // Sort by the first component only; ties must keep input order of
            // the second component.
            let sorted = sort_by(&values, |pair| pair.0);
            for bucket in 0..5 {
                let input_bucket: Vec<i32> = values
                    .iter()
                    .filter(|pair| pair.0 == bucket)
                    .map(|pair| pair.1)
                    .collect();
                let output_bucket: Vec<i32> = sorted
                    .iter()
                    .filter(|pair| pair.0 == bucket)
                    .map(|pair| pair.1)
                    .collect();
                prop_assert_eq!(input_bucket, output_bucket);
            }
        }
    }
}
