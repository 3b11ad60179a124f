//! Utilities for bounding how much asynchronous work is in flight at once.
//!
//! # Method
//! Nothing here spawns tasks. [`limit_concurrency`] and [`ConcurrencyLimit`] suspend callers on a
//! fair (FIFO) semaphore, while [`call_concurrently`] polls every task it starts on the caller's
//! own task. Concurrency therefore means interleaved futures, not parallel threads, and no work is
//! cancelled once it has started unless the caller drops it.
//!
//! Timeouts aren't built into either, [`timeout`] can be composed with them instead.

mod call;
mod error;
mod limit;
mod tests;
mod time;

pub use call::*;
pub use error::*;
pub use limit::*;
pub use time::*;
