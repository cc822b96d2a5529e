//! Deferred single invocation.
//!
//! [`delay`] schedules one future invocation of a function on the tokio
//! timer and returns immediately. Timing carries a lower bound only: the
//! function runs after *at least* the requested wait, never before it.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Schedules `function(arguments)` to run once, after at least `wait`.
///
/// Returns immediately without blocking the caller. The deferred call runs
/// on the surrounding tokio runtime, so this must be called from within one.
///
/// The returned [`JoinHandle`] is the allowed extension beyond the base
/// fire-and-forget contract: await it to observe the function's result, or
/// abort it to cancel the pending invocation.
///
/// # Panics
///
/// Panics (from tokio) when called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
/// use utilbelt::decorate::delay;
///
/// let handle = delay(
///     |name: &str| format!("hello, {name}"),
///     Duration::from_millis(10),
///     "deferred",
/// );
///
/// // The caller is free immediately; the call happens later.
/// let greeting = handle.await.unwrap();
/// assert_eq!(greeting, "hello, deferred");
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> JoinHandle<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        function(arguments)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test(start_paused = true)]
    async fn does_not_fire_before_the_wait_elapses() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let handle = delay(
            move |()| flag.store(true, Ordering::SeqCst),
            Duration::from_millis(500),
            (),
        );

        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!fired.load(Ordering::SeqCst));

        handle.await.unwrap();
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn passes_the_supplied_arguments() {
        let handle = delay(
            |(left, right): (i32, i32)| left + right,
            Duration::from_millis(50),
            (20, 22),
        );
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn abort_cancels_the_pending_invocation() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let handle = delay(
            move |()| flag.store(true, Ordering::SeqCst),
            Duration::from_millis(100),
            (),
        );
        handle.abort();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
