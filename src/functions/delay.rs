//! Deferred invocation through a pluggable scheduler.
//!
//! [`delay`] never runs anything itself: it packages the call as a [`Task`]
//! and hands it to a [`Scheduler`], then returns a [`DelayHandle`]. Two
//! schedulers are provided:
//!
//! - [`ThreadScheduler`] sleeps on a detached OS thread per task.
//! - [`ManualScheduler`] keeps a virtual clock and runs due tasks when the
//!   owner calls [`ManualScheduler::advance`].
//!
//! Outstanding tasks are only ordered by their own due time; no other
//! ordering between them is promised.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks no earlier than a given delay. Fire-and-forget.
pub trait Scheduler {
    /// Arranges for `task` to run once, no earlier than `delay` from now.
    fn schedule(&self, task: Task, delay: Duration);
}

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Handle to a call scheduled by [`delay`].
///
/// Dropping the handle does not cancel the call.
#[derive(Debug, Clone)]
pub struct DelayHandle {
    state: Arc<AtomicU8>,
}

impl DelayHandle {
    /// Prevents the call from running if it has not started yet.
    ///
    /// Returns `true` if this call to `cancel` stopped it.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if cancelled {
            tracing::debug!("delay: cancelled pending call");
        }
        cancelled
    }

    /// Returns `true` while the call has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == PENDING
    }

    /// Returns `true` once the call has started running.
    pub fn has_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == FIRED
    }

    /// Returns `true` if the call was cancelled before it ran.
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }
}

/// Schedules `func(args)` to run once, no earlier than `wait` from now.
///
/// Returns immediately; the call happens whenever `scheduler` gets to it.
///
/// # Examples
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use u_collect::{delay, ManualScheduler};
///
/// let scheduler = ManualScheduler::new();
/// let (tx, rx) = mpsc::channel();
/// delay(&scheduler, move |(a, b)| tx.send(format!("{a}{b}")).unwrap(),
///       Duration::from_millis(500), ("a", "b"));
///
/// scheduler.advance(Duration::from_millis(499));
/// assert!(rx.try_recv().is_err());
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(rx.try_recv().unwrap(), "ab");
/// ```
pub fn delay<S, F, A>(scheduler: &S, func: F, wait: Duration, args: A) -> DelayHandle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let state = Arc::new(AtomicU8::new(PENDING));
    let task_state = Arc::clone(&state);
    tracing::debug!(?wait, "delay: scheduling call");
    scheduler.schedule(
        Box::new(move || {
            if task_state
                .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                func(args);
            }
        }),
        wait,
    );
    DelayHandle { state }
}

/// Scheduler backed by one sleeping thread per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, task: Task, delay: Duration) {
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            tracing::trace!("thread scheduler: running task");
            task();
        });
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Pending>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Tasks run inside [`advance`](Self::advance), on the caller's thread, in
/// due-time order; tasks due at the same instant run in scheduling order.
/// A task may schedule further tasks, which run in the same `advance` if
/// they fall due before it ends.
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<Clock>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// A task may call `advance` itself; the clock never moves backwards,
    /// so the outer call ends at whichever target is later.
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        let mut clock = self.lock();
        clock.now = clock.now.max(target);
        drop(clock);
        if ran > 0 {
            tracing::trace!(ran, "manual scheduler: advanced clock");
        }
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.lock();
        let (index, _) = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))?;
        let next = clock.queue.swap_remove(index);
        clock.now = clock.now.max(next.due);
        Some(next.task)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, task: Task, delay: Duration) {
        let mut clock = self.lock();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.push(Pending { due, seq, task });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}
