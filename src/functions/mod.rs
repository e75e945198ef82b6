//! Wrappers that add behavior around a function.
//!
//! - [`Once`] runs its function on the first call only.
//! - [`Memoize`] caches one result per distinct argument.
//! - [`Throttle`] runs its function at most once per time window.
//! - [`delay`] hands a call to a [`Scheduler`] to run later.
//!
//! Each wrapper owns its state and mutates it through `&mut self`, so
//! exclusive access is checked at compile time and no state is shared
//! between two wrappers.

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::{delay, DelayHandle, ManualScheduler, Scheduler, Task, ThreadScheduler};
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle};
