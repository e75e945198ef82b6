//! Single-invocation guard.

use std::fmt;

enum State<F, R> {
    Pending(F),
    Ready(R),
    Poisoned,
}

/// Wrapper that runs its function on the first call only.
///
/// Every later call returns a clone of the first result without touching
/// the function again. The state lives in the wrapper itself, so two
/// wrappers around equivalent functions never share a result.
///
/// # Examples
/// ```
/// use u_collect::once;
///
/// let mut runs = 0;
/// let mut init = once(|| {
///     runs += 1;
///     "ready"
/// });
/// assert_eq!(init.call(), "ready");
/// assert_eq!(init.call(), "ready");
/// drop(init);
/// assert_eq!(runs, 1);
/// ```
pub struct Once<F, R> {
    state: State<F, R>,
}

/// Wraps `func` in a [`Once`] guard.
pub fn once<F, R>(func: F) -> Once<F, R>
where
    F: FnOnce() -> R,
    R: Clone,
{
    Once {
        state: State::Pending(func),
    }
}

impl<F, R> Once<F, R>
where
    F: FnOnce() -> R,
    R: Clone,
{
    /// Returns the cached result, running the function if this is the
    /// first call.
    ///
    /// # Panics
    /// Panics if a previous call panicked inside the wrapped function.
    pub fn call(&mut self) -> R {
        match std::mem::replace(&mut self.state, State::Poisoned) {
            State::Ready(result) => {
                self.state = State::Ready(result.clone());
                result
            }
            State::Pending(func) => {
                tracing::trace!("once: running wrapped function");
                let result = func();
                self.state = State::Ready(result.clone());
                result
            }
            State::Poisoned => panic!("once: wrapped function panicked on its first call"),
        }
    }

    /// Like [`call`](Self::call); `args` are accepted and ignored.
    pub fn call_with<A>(&mut self, _args: A) -> R {
        self.call()
    }

    /// Returns `true` once the wrapped function has produced its result.
    pub fn has_run(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// How many times the wrapped function has run: 0 or 1.
    pub fn calls(&self) -> usize {
        match self.state {
            State::Pending(_) => 0,
            State::Ready(_) | State::Poisoned => 1,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match &self.state {
            State::Ready(result) => Some(result),
            _ => None,
        };
        f.debug_struct("Once").field("result", &result).finish()
    }
}
