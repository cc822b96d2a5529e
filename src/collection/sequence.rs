//! Sequence-only combinators.
//!
//! Positional operations that only make sense on ordered sequences:
//! prefix/suffix selection, index lookup, and first-seen deduplication.
//! All of them take the sequence by shared reference and never mutate or
//! reorder the input.

use super::combinators::contains;
use super::each::Each;

/// Returns the first element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements, clamped to the sequence length.
///
/// The result may be empty; the input is untouched.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::first_n;
///
/// let values = [1, 2, 3];
/// assert_eq!(first_n(&values, 2), &[1, 2]);
/// assert_eq!(first_n(&values, 10), &[1, 2, 3]);
/// assert_eq!(first_n(&values, 0), &[] as &[i32]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, clamped to the sequence length.
///
/// Trailing elements keep their original relative order; the input is
/// neither reordered nor consumed.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::last_n;
///
/// let values = [1, 2, 3];
/// assert_eq!(last_n(&values, 2), &[2, 3]);
/// assert_eq!(last_n(&values, 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len() - count.min(sequence.len())..]
}

/// Returns the index of the first element equal to `target`, or `None` if
/// the target is absent.
///
/// Comparison is `==` only.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::index_of;
///
/// let values = [10, 20, 30, 20];
/// assert_eq!(index_of(&values, &20), Some(1));
/// assert_eq!(index_of(&values, &99), None);
/// ```
pub fn index_of<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    let mut found = None;
    sequence.each(|value, index, _sequence| {
        if found.is_none() && value == target {
            found = Some(index);
        }
    });
    found
}

/// Returns a duplicate-free copy of the sequence, preserving first-seen
/// order.
///
/// A later element equal (`==`) to an earlier one is dropped.
///
/// # Examples
///
/// ```rust
/// use utilbelt::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut seen: Vec<T> = Vec::new();
    sequence.each(|value, _index, _sequence| {
        if !contains(&seen, value) {
            seen.push(value.clone());
        }
    });
    seen
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================
