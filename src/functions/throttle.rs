//! Rate limiting for repeated calls.

use std::fmt;
use std::time::{Duration, Instant};

/// Wrapper that runs its function at most once per `wait` window.
///
/// The first call always runs. A call made less than `wait` after the last
/// run returns the last result instead of running again (leading edge
/// only; suppressed calls are not replayed later).
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use u_collect::throttle;
///
/// let mut hits = 0;
/// let mut ping = throttle(|| { hits += 1; hits }, Duration::from_secs(1));
/// let t0 = Instant::now();
/// assert_eq!(ping.call_at(t0), 1);
/// assert_eq!(ping.call_at(t0 + Duration::from_millis(500)), 1);
/// assert_eq!(ping.call_at(t0 + Duration::from_secs(1)), 2);
/// ```
pub struct Throttle<F, R> {
    func: F,
    wait: Duration,
    last: Option<(Instant, R)>,
    invocations: usize,
}

/// Wraps `func` in a [`Throttle`] with window `wait`.
pub fn throttle<F, R>(func: F, wait: Duration) -> Throttle<F, R>
where
    F: FnMut() -> R,
    R: Clone,
{
    Throttle {
        func,
        wait,
        last: None,
        invocations: 0,
    }
}

impl<F, R> Throttle<F, R>
where
    F: FnMut() -> R,
    R: Clone,
{
    /// Calls through the throttle at the current instant.
    pub fn call(&mut self) -> R {
        self.call_at(Instant::now())
    }

    /// Calls through the throttle as if the current instant were `now`.
    pub fn call_at(&mut self, now: Instant) -> R {
        if let Some((at, result)) = &self.last {
            if now.saturating_duration_since(*at) < self.wait {
                tracing::trace!("throttle: call suppressed");
                return result.clone();
            }
        }
        let result = (self.func)();
        self.invocations += 1;
        self.last = Some((now, result.clone()));
        result
    }

    /// Number of times the wrapped function has run.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// Length of the throttling window.
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Throttle<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("last", &self.last)
            .field("invocations", &self.invocations)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn throttle_at_most_once_per_window(
            mut offsets in proptest::collection::vec(0_u64..1000, 1..40),
            wait in 1_u64..200,
        ) {
            offsets.sort_unstable();
            let mut runs = Vec::new();
            let t0 = Instant::now();
            let mut t = throttle(|| (), Duration::from_millis(wait));
            for &ms in &offsets {
                let before = t.invocations();
                t.call_at(t0 + Duration::from_millis(ms));
                if t.invocations() > before {
                    runs.push(ms);
                }
            }
            prop_assert_eq!(runs[0], offsets[0]);
            for pair in runs.windows(2) {
                prop_assert!(pair[1] - pair[0] >= wait);
            }
        }
    }
}
