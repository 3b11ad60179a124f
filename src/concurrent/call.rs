use std::future::Future;
use std::num::NonZeroUsize;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, trace};

/// The maximum number of tasks [`call_concurrently`] keeps in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Bounded(NonZeroUsize),
    Unbounded,
}

impl Limit {
    /// Returns true if another task can be started while `running` are in flight.
    pub const fn admits(&self, running: usize) -> bool {
        match self {
            Limit::Bounded(limit) => running < limit.get(),
            Limit::Unbounded => true,
        }
    }
}

impl From<NonZeroUsize> for Limit {
    fn from(value: NonZeroUsize) -> Self {
        Limit::Bounded(value)
    }
}

/// Starts a task from each factory in turn, keeping no more than `limit` in flight, and collects
/// their results in the order the factories were supplied.
///
/// Factories are pulled lazily: the next one is only invoked once a running task has settled and
/// freed a slot. All tasks are polled on the calling task, so they interleave rather than run in
/// parallel.
///
/// # Errors
/// If a task fails, no further factories are pulled. The tasks already running are left to finish
/// and then the first error is returned, discarding any successful results. The error therefore
/// only reaches the caller once the slowest of those in-flight tasks has settled.
///
/// # Examples
/// ```
/// # use std::num::NonZeroUsize;
/// # use utility_lib::concurrent::{call_concurrently, Limit};
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let tasks = (1..=3).map(|n| move || async move { Ok::<_, ()>(n * 10) });
/// assert_eq!(call_concurrently(tasks, Limit::Unbounded).await, Ok(vec![10, 20, 30]));
/// # });
/// ```
pub async fn call_concurrently<I, F, Fut, T, E>(
    factories: I,
    limit: impl Into<Limit>,
) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let limit = limit.into();
    let mut factories = factories.into_iter().fuse();
    let mut in_flight = FuturesUnordered::new();
    let mut results: Vec<Option<T>> = Vec::new();
    let mut failure = None;

    loop {
        while failure.is_none() && limit.admits(in_flight.len()) {
            let Some(factory) = factories.next() else {
                break;
            };

            let index = results.len();
            results.push(None);

            let task = factory();
            in_flight.push(async move { (index, task.await) });
            trace!(index, running = in_flight.len(), "started task");
        }

        match in_flight.next().await {
            Some((index, Ok(value))) => results[index] = Some(value),
            Some((index, Err(error))) => {
                debug!(index, running = in_flight.len(), "task failed, waiting for running tasks");
                if failure.is_none() {
                    failure = Some(error);
                }
            },
            None => break,
        }
    }

    match failure {
        Some(error) => Err(error),
        // Every slot is filled when nothing failed.
        None => Ok(results.into_iter().flatten().collect()),
    }
}
