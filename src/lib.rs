//! # u-collect
//!
//! Functional collection primitives for the U-Engine ecosystem.
//!
//! This crate provides small, composable building blocks for iterating,
//! filtering, transforming, aggregating, and set-combining ordered sequences
//! and string-keyed maps, plus a few function wrappers. It knows nothing
//! about any consumer domain.
//!
//! ## Modules
//!
//! - [`traverse`] — The [`Container`] traversal contract every operation
//!   is built on
//! - [`predicates`] — `contains`, `select`, `reject`, `every`, `any`
//! - [`sets`] — `uniq`, `intersection`, `difference`
//! - [`transform`] — `map`, `pluck`, `reduce`, `first`/`last`, `flatten`, `zip`
//! - [`sorting`] — Stable sorts by key function or record property
//! - [`random`] — Fisher-Yates shuffling over an injected RNG
//! - [`functions`] — `once`, `memoize`, `throttle`, `delay`
//! - [`objects`] — Shallow record merging: `extend`, `defaults`
//! - [`chain`] — Fluent pipelines over the operations above
//!
//! ## Design Philosophy
//!
//! - **One traversal**: every collection operation is a fold over
//!   [`Container::each`]; sequences and maps go through the same code
//! - **Non-mutating**: inputs are borrowed immutably unless a signature
//!   says `&mut`
//! - **Total where possible**: absent input yields `None` or an empty
//!   result; only ordering can fail, with a [`CollectError`]
//! - **Property-based testing**: invariants verified via proptest

pub mod chain;
pub mod error;
pub mod functions;
pub mod objects;
pub mod predicates;
pub mod random;
pub mod sets;
pub mod sorting;
pub mod transform;
pub mod traverse;

pub use chain::{chain, Chain};
pub use error::{CollectError, Result};
pub use functions::{
    delay, memoize, once, throttle, DelayHandle, ManualScheduler, Memoize, Once, Scheduler,
    Task, ThreadScheduler, Throttle,
};
pub use objects::{defaults, extend};
pub use predicates::{any, any_truthy, contains, every, reject, select, Truthy};
pub use random::{create_rng, shuffle, shuffle_in_place, shuffled_indices};
pub use sets::{difference, intersection, uniq};
pub use sorting::{sort_by, sort_by_property};
pub use transform::{
    first, first_n, flatten, last, last_n, map, pluck, reduce, zip, zip2, Nested, Sequence,
};
pub use traverse::{each, Container, Record};
