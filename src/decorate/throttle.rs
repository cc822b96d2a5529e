//! Rate-limited function wrapping.
//!
//! [`throttle`] wraps a function so that it runs at most once per time
//! window, with a leading and a trailing edge:
//!
//! - **Leading edge**: the first call in a window invokes the function
//!   immediately, on the caller's thread.
//! - **Trailing edge**: calls arriving inside an open window are coalesced.
//!   The freshest arguments are kept and delivered once the window elapses;
//!   each newer intra-window call aborts and replaces the pending timer, so
//!   only the freshest pending call survives. A trailing fire opens the
//!   next window.
//!
//! The wrapped function therefore runs at most twice per window (once per
//! edge), no matter how many calls arrive, and never loses the last set of
//! arguments it was given.
//!
//! # Examples
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! use std::sync::Arc;
//! use std::time::Duration;
//! use parking_lot::Mutex;
//! use utilbelt::decorate::throttle;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let throttled = throttle(move |value: i32| sink.lock().push(value), Duration::from_millis(100));
//!
//! for value in 0..10 {
//!     throttled.call(value);
//! }
//! // Leading edge only so far.
//! assert_eq!(*seen.lock(), vec![0]);
//!
//! tokio::time::sleep(Duration::from_millis(150)).await;
//! // Trailing edge delivered the freshest arguments.
//! assert_eq!(*seen.lock(), vec![0, 9]);
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Private per-wrapper state: the last leading/trailing fire time, the
/// freshest coalesced arguments, and the pending trailing timer.
struct ThrottleState<A> {
    last_fired: Option<Instant>,
    pending: Option<A>,
    timer: Option<JoinHandle<()>>,
}

/// A function wrapper that limits the underlying function to one call per
/// time window, coalescing intra-window calls onto a trailing edge.
///
/// Created by [`throttle`]. Cloning shares the window and pending state;
/// wrappers created by separate `throttle` calls share nothing.
pub struct Throttle<F, A> {
    function: Arc<F>,
    state: Arc<Mutex<ThrottleState<A>>>,
    wait: Duration,
}

impl<F, A> Clone for Throttle<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            state: Arc::clone(&self.state),
            wait: self.wait,
        }
    }
}

/// Wraps `function` so it runs at most once per `wait` window.
///
/// See the [module docs](self) for the leading/trailing-edge policy.
///
/// # Examples
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
/// use utilbelt::decorate::throttle;
///
/// let throttled = throttle(|message: &str| println!("{message}"), Duration::from_millis(100));
/// throttled.call("printed immediately");
/// throttled.call("coalesced onto the trailing edge");
/// # }
/// ```
pub fn throttle<F, A>(function: F, wait: Duration) -> Throttle<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    Throttle {
        function: Arc::new(function),
        state: Arc::new(Mutex::new(ThrottleState {
            last_fired: None,
            pending: None,
            timer: None,
        })),
        wait,
    }
}

impl<F, A> Throttle<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Invokes the wrapped function now if the window is closed; otherwise
    /// records `arguments` as the freshest pending call and (re)arms the
    /// trailing timer.
    ///
    /// # Panics
    ///
    /// Panics (from tokio) when a trailing timer must be armed outside a
    /// tokio runtime.
    pub fn call(&self, arguments: A) {
        let now = Instant::now();
        let mut state = self.state.lock();
        match state.last_fired {
            Some(fired) if now.duration_since(fired) < self.wait => {
                state.pending = Some(arguments);
                if let Some(timer) = state.timer.take() {
                    timer.abort();
                }
                let remaining = self.wait - now.duration_since(fired);
                state.timer = Some(self.arm_trailing(remaining));
            }
            _ => {
                state.last_fired = Some(now);
                drop(state);
                (self.function)(arguments);
            }
        }
    }

    /// Returns whether a coalesced call is waiting for the trailing edge.
    pub fn has_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    fn arm_trailing(&self, remaining: Duration) -> JoinHandle<()> {
        let function = Arc::clone(&self.function);
        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            let flushed = {
                let mut state = shared.lock();
                state.timer = None;
                state.last_fired = Some(Instant::now());
                state.pending.take()
            };
            // The lock is released before the user function runs, so the
            // function may itself call back into the throttle.
            if let Some(arguments) = flushed {
                function(arguments);
            }
        })
    }
}

static_assertions::assert_impl_all!(Throttle<fn(i32), i32>: Send, Sync);
