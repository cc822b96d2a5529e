//! Mapping merge helpers.
//!
//! [`extend`] and [`defaults`] fold one or more source mappings into a
//! target, in source order, and differ only in overwrite policy: `extend`
//! lets later sources win, `defaults` only fills keys the target does not
//! have yet. Both mutate the target in place and hand it back for
//! chaining, the one documented exception to the library's no-mutation
//! rule.
//!
//! A key that already exists in the target keeps its original insertion
//! position when its value is overwritten, so enumeration order stays
//! stable across merges.

use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Copies every key/value of every source into `target`, in source order,
/// overwriting pre-existing keys; later sources win. Returns `target`.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use utilbelt::merge::extend;
///
/// let mut target = IndexMap::from([("a".to_string(), 1)]);
/// extend(
///     &mut target,
///     [IndexMap::from([("a".to_string(), 2), ("b".to_string(), 3)])],
/// );
/// assert_eq!(target.get("a"), Some(&2));
/// assert_eq!(target.get("b"), Some(&3));
/// ```
pub fn extend<'a, K, V, S, I>(
    target: &'a mut IndexMap<K, V, S>,
    sources: I,
) -> &'a mut IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    I: IntoIterator<Item = IndexMap<K, V, S>>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
    target
}

/// Like [`extend`], but never overwrites: a source key is copied only when
/// `target` does not already have it. Once a key is set (pre-existing or
/// assigned by an earlier source), later sources cannot change it.
/// Returns `target`.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use utilbelt::merge::defaults;
///
/// let mut target = IndexMap::from([("a".to_string(), 1)]);
/// defaults(
///     &mut target,
///     [IndexMap::from([("a".to_string(), 2), ("b".to_string(), 3)])],
/// );
/// assert_eq!(target.get("a"), Some(&1));
/// assert_eq!(target.get("b"), Some(&3));
/// ```
pub fn defaults<'a, K, V, S, I>(
    target: &'a mut IndexMap<K, V, S>,
    sources: I,
) -> &'a mut IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    I: IntoIterator<Item = IndexMap<K, V, S>>,
{
    for source in sources {
        for (key, value) in source {
            target.entry(key).or_insert(value);
        }
    }
    target
}
