//! Collection iteration primitives and derived combinators.
//!
//! The module splits into three layers:
//!
//! - [`each`]: the [`Each`] trait, the iteration core and the only place
//!   collection-shape dispatch occurs
//! - [`combinators`]: shape-agnostic operations derived from `each`/`reduce`
//! - [`sequence`]: positional operations that only make sense on ordered
//!   sequences
//!
//! plus the [`Field`] seam ([`field`]) through which key-driven combinators
//! read `element[key]`.
//!
//! # Examples
//!
//! ```rust
//! use utilbelt::collection::{filter, reduce, sort_by};
//!
//! let values = vec![5, 3, 8, 1];
//! let big = filter(&values, |value| *value > 2);
//! let ordered = sort_by(&big, |value| *value);
//! let total = reduce(&ordered, 0, |sum, value| sum + value);
//! assert_eq!(ordered, vec![3, 5, 8]);
//! assert_eq!(total, 16);
//! ```

pub mod combinators;
pub mod each;
pub mod field;
pub mod sequence;

pub use combinators::{
    contains, every, filter, identity, map, pluck, reduce, reduce1, reject, some, sort_by,
    sort_by_field,
};
pub use each::Each;
pub use field::Field;
pub use sequence::{first, first_n, index_of, last, last_n, uniq};
