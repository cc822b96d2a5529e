//! Call-at-most-once function wrapping.
//!
//! [`once`] wraps a function so that only the first invocation runs it; the
//! result is cached and every later invocation returns the cached value,
//! whatever arguments it is given.
//!
//! # Examples
//!
//! ```rust
//! use utilbelt::decorate::once;
//!
//! let mut initialize = once(|size: usize| vec![0u8; size]);
//!
//! let buffer = initialize.call(4);
//! assert_eq!(buffer.len(), 4);
//!
//! // Later arguments are ignored; the cached result comes back.
//! let again = initialize.call(1024);
//! assert_eq!(again.len(), 4);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A function wrapper that runs its underlying function at most once.
///
/// Created by [`once`]. The first [`call`](Self::call) invokes the wrapped
/// function with the given arguments and caches the result; subsequent
/// calls return a clone of the cached result without re-invoking.
///
/// # Re-entry
///
/// `call` takes `&mut self`, so a re-entrant call from within the wrapped
/// function's first execution is rejected by the borrow checker rather than
/// re-triggering the function.
///
/// # State
///
/// Each `once` invocation produces a wrapper owning its own cache; no two
/// independently-created wrappers share state.
pub struct Once<F, A, R> {
    function: F,
    result: Option<R>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so it can run at most one time.
///
/// The result type must be [`Clone`]: later calls hand back clones of the
/// cached first result.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use utilbelt::decorate::once;
///
/// let runs = Cell::new(0);
/// let mut wrapped = once(|value: i32| {
///     runs.set(runs.get() + 1);
///     value * 2
/// });
///
/// assert_eq!(wrapped.call(21), 42);
/// assert_eq!(wrapped.call(-7), 42);
/// assert_eq!(runs.get(), 1);
/// ```
pub fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    Once {
        function,
        result: None,
        _arguments: PhantomData,
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Invokes the wrapped function on the first call; returns the cached
    /// result on every call after that.
    pub fn call(&mut self, arguments: A) -> R {
        if let Some(result) = &self.result {
            return result.clone();
        }
        let result = (self.function)(arguments);
        self.result = Some(result.clone());
        result
    }

    /// Returns whether the wrapped function has already run.
    #[inline]
    pub const fn has_run(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the cached result, or `None` if the wrapped function has not
    /// run yet.
    #[inline]
    pub const fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(result) => formatter.debug_tuple("Once").field(result).finish(),
            None => formatter.debug_tuple("Once").field(&"<not run>").finish(),
        }
    }
}
