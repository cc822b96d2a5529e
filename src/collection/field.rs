//! Key-based field access.
//!
//! This module provides the [`Field`] trait, the seam through which
//! [`pluck`](super::combinators::pluck) and
//! [`sort_by_field`](super::sequence::sort_by_field) read `element[key]`
//! without knowing the element's concrete type.
//!
//! It is implemented for [`IndexMap`], and user types can implement it to
//! participate in key-driven combinators:
//!
//! ```rust
//! use utilbelt::collection::{Field, pluck};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Field for Person {
//!     type Key = str;
//!     type Value = u32;
//!
//!     fn field(&self, key: &str) -> Option<&u32> {
//!         match key {
//!             "age" => Some(&self.age),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let people = vec![
//!     Person { name: "Ada".to_string(), age: 36 },
//!     Person { name: "Grace".to_string(), age: 45 },
//! ];
//! assert_eq!(pluck(&people, "age"), vec![Some(36), Some(45)]);
//! assert_eq!(people[0].name, "Ada");
//! ```

use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A type whose named fields can be read by key.
///
/// `field` returns `None` when the key is absent; combinators built on this
/// trait render an absent key as `None` rather than failing.
pub trait Field {
    /// The key type used to address a field.
    type Key: ?Sized;

    /// The value type stored behind a field.
    type Value;

    /// Returns a reference to the value at `key`, or `None` if the key is
    /// absent.
    fn field(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K, V, S> Field for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn field(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}
