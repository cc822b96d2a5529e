//! Function decorators.
//!
//! Decorators take a function value and return a wrapped version with
//! modified invocation timing or call-count semantics; the wrapped
//! function's result semantics are untouched:
//!
//! - [`once()`]: run at most one time, caching the first result
//! - [`delay()`]: run once, later, after at least a given wait
//! - [`throttle()`]: run at most once per time window, coalescing the
//!   freshest intra-window call onto a trailing edge
//!
//! Each decoration call produces a wrapper owning its own private state;
//! no two independently-created wrappers share anything. [`delay()`] and
//! [`throttle()`] schedule deferred work on the tokio timer and therefore
//! need a surrounding tokio runtime; [`once()`] is purely synchronous.

pub mod delay;
pub mod once;
pub mod throttle;

pub use delay::delay;
pub use once::{Once, once};
pub use throttle::{Throttle, throttle};
