//! # utilbelt
//!
//! A utility belt of generic collection-iteration primitives, function
//! decorators, and object-merge helpers.
//!
//! ## Overview
//!
//! The library is built around a single iteration primitive and a handful of
//! combinators derived from it:
//!
//! - **Iteration Core**: the [`collection::Each`] trait walks ordered
//!   sequences and insertion-ordered mappings through one uniform interface.
//! - **Derived Combinators**: `map`, `filter`, `reject`, `reduce`, `every`,
//!   `some`, `contains`, `uniq`, `pluck`, `sort_by` and friends, all expressed
//!   in terms of the Iteration Core.
//! - **Function Decorators**: [`decorate::once()`], [`decorate::delay()`],
//!   and [`decorate::throttle()`] wrap a function value and alter its
//!   invocation timing or call-count semantics.
//! - **Merge Helpers**: [`merge::extend`] and [`merge::defaults`] fold one or
//!   more source mappings into a target, differing only in overwrite policy.
//!
//! ## Feature Flags
//!
//! - `collection`: the iteration core and derived combinators
//! - `merge`: mapping merge helpers (implies `collection`)
//! - `decorate`: function decorators (pulls in the tokio timer)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use utilbelt::prelude::*;
//!
//! let values = vec![1, 2, 2, 3, 1];
//! let doubled = map(&uniq(&values), |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, types, and traits.
///
/// # Usage
///
/// ```rust
/// use utilbelt::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "decorate")]
    pub use crate::decorate::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "decorate")]
pub mod decorate;
