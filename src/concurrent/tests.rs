#![cfg(test)]

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use futures::future;

use super::*;

const DELAY: Duration = Duration::from_millis(100);

fn non_zero(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Counts how many tasks are running at once, remembering the highest count seen.
#[derive(Debug, Default)]
struct InFlight {
    current: AtomicUsize,
    max: AtomicUsize,
}

impl InFlight {
    async fn track<T>(&self, delay: Duration, value: T) -> T {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.max.fetch_max(now, Ordering::SeqCst);
        sleep(delay).await;
        self.current.fetch_sub(1, Ordering::SeqCst);
        value
    }

    fn max(&self) -> usize {
        self.max.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn test_limit_concurrency_serializes() {
    let limited = limit_concurrency(|delay: Duration| sleep(delay), NonZeroUsize::MIN);

    let start = Instant::now();
    let results = future::join_all((0..3).map(|_| limited.call((DELAY,)))).await;

    assert_eq!(results, [DELAY; 3]);
    assert!(
        start.elapsed() >= DELAY * 3,
        "A limit of 1 should run each call one after the other."
    );
    assert_eq!(limited.limit().running(), 0);
}

#[tokio::test]
async fn test_limit_concurrency_bound() {
    let in_flight = Arc::new(InFlight::default());
    let limited = limit_concurrency(
        |n: usize| {
            let in_flight = Arc::clone(&in_flight);
            async move { in_flight.track(Duration::from_millis(20), n).await }
        },
        non_zero(2),
    );

    let results = future::join_all((0..6).map(|n| limited.call((n,)))).await;

    assert_eq!(results, [0, 1, 2, 3, 4, 5], "Each caller should get its own result.");
    assert_eq!(in_flight.max(), 2, "No more than 2 calls should have been in flight.");
}

#[tokio::test]
async fn test_limit_concurrency_fifo() {
    let started = Arc::new(Mutex::new(Vec::new()));
    let limited = limit_concurrency(
        |n: usize| {
            let started = Arc::clone(&started);
            async move {
                started.lock().unwrap().push(n);
                sleep(Duration::from_millis(5)).await;
            }
        },
        NonZeroUsize::MIN,
    );

    future::join_all((0..5).map(|n| limited.call((n,)))).await;

    assert_eq!(
        *started.lock().unwrap(),
        [0, 1, 2, 3, 4],
        "Waiting calls should be admitted in the order they arrived."
    );
}

#[tokio::test]
async fn test_limit_concurrency_shared_between_clones() {
    let in_flight = Arc::new(InFlight::default());
    let limited = limit_concurrency(
        || {
            let in_flight = Arc::clone(&in_flight);
            async move { in_flight.track(Duration::from_millis(10), ()).await }
        },
        NonZeroUsize::MIN,
    );
    let other = limited.clone();

    future::join(
        future::join_all((0..3).map(|_| limited.call(()))),
        future::join_all((0..3).map(|_| other.call(()))),
    ).await;

    assert_eq!(in_flight.max(), 1, "Clones should share a single limit.");
}

#[tokio::test]
async fn test_limit_concurrency_failure_releases_slot() {
    let limited = limit_concurrency(
        |n: u32| async move {
            sleep(Duration::from_millis(5)).await;
            if n % 2 == 0 { Err(format!("{n} is even")) } else { Ok(n) }
        },
        NonZeroUsize::MIN,
    );

    let results = future::join_all((0..4).map(|n| limited.call((n,)))).await;

    assert_eq!(
        results,
        [Err("0 is even".to_owned()), Ok(1), Err("2 is even".to_owned()), Ok(3)],
        "Errors should be returned to their caller unchanged, without affecting other calls."
    );
    assert_eq!(limited.limit().running(), 0, "Failed calls should release their slot.");
}

#[tokio::test]
async fn test_limit_concurrency_cancel_releases_slot() {
    let limited = limit_concurrency(|| sleep(Duration::from_secs(60)), NonZeroUsize::MIN);

    let result = timeout(Duration::from_millis(10), limited.call(())).await;
    assert_eq!(result, Err(TimeoutError { after: Duration::from_millis(10) }));
    assert_eq!(limited.limit().running(), 0, "Dropped calls should release their slot.");
}

#[tokio::test]
async fn test_concurrency_limit_run() {
    let limit = ConcurrencyLimit::new(non_zero(3));
    assert_eq!(limit.limit(), 3);

    let first = limit.acquire().await;
    let second = limit.acquire().await;
    assert_eq!(limit.running(), 2);

    assert_eq!(limit.run(async { limit.running() }).await, 3);
    drop(first);
    drop(second);
    assert_eq!(limit.running(), 0);

    let limit = ConcurrencyLimit::new(NonZeroUsize::MAX);
    assert_eq!(limit.limit(), tokio::sync::Semaphore::MAX_PERMITS);
}

#[tokio::test]
async fn test_call_concurrently_preserves_order() {
    let in_flight = Arc::new(InFlight::default());
    let delays = [50_u64, 10, 40, 20, 30];
    let tasks = delays.map(|ms| {
        let in_flight = Arc::clone(&in_flight);
        move || async move { Ok::<_, ()>(in_flight.track(Duration::from_millis(ms), ms).await) }
    });

    let results = call_concurrently(tasks, Limit::Unbounded).await;

    assert_eq!(results, Ok(delays.to_vec()), "Results should follow the task order.");
    assert_eq!(in_flight.max(), 5, "Unbounded tasks should all run at once.");
}

#[tokio::test]
async fn test_call_concurrently_serializes() {
    let delays = [30_u64, 10, 20];
    let tasks = delays.map(|ms| move || async move {
        Ok::<_, ()>(sleep(Duration::from_millis(ms)).await)
    });

    let start = Instant::now();
    let results = call_concurrently(tasks, NonZeroUsize::MIN).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(
        start.elapsed() >= Duration::from_millis(60),
        "A limit of 1 should take at least the sum of all delays."
    );
}

#[tokio::test]
async fn test_call_concurrently_bound() {
    let in_flight = Arc::new(InFlight::default());
    let tasks = (0..10).map(|n| {
        let in_flight = Arc::clone(&in_flight);
        move || async move { Ok::<_, ()>(in_flight.track(Duration::from_millis(10), n).await) }
    });

    let results = call_concurrently(tasks, non_zero(3)).await;

    assert_eq!(results, Ok((0..10).collect()));
    assert_eq!(in_flight.max(), 3, "No more than 3 tasks should have been in flight.");
}

#[tokio::test]
async fn test_call_concurrently_failure() {
    let pulled = Arc::new(AtomicUsize::new(0));
    let finished = Arc::new(AtomicUsize::new(0));
    let tasks = (0..10).map(|n| {
        pulled.fetch_add(1, Ordering::SeqCst);
        let finished = Arc::clone(&finished);
        move || async move {
            // The failing task settles first, while the others are still running.
            let delay = if n == 1 { 5 } else { 30 };
            sleep(Duration::from_millis(delay)).await;
            finished.fetch_add(1, Ordering::SeqCst);
            if n == 1 { Err(format!("task {n} failed")) } else { Ok(n) }
        }
    });

    let results = call_concurrently(tasks, non_zero(3)).await;

    assert_eq!(results, Err("task 1 failed".to_owned()));
    assert_eq!(
        pulled.load(Ordering::SeqCst),
        3,
        "No more factories should be pulled after a failure."
    );
    assert_eq!(
        finished.load(Ordering::SeqCst),
        3,
        "Tasks that were already running should be left to finish."
    );
}

#[tokio::test]
async fn test_call_concurrently_empty() {
    let tasks: Vec<fn() -> future::Ready<Result<u8, ()>>> = Vec::new();
    assert_eq!(call_concurrently(tasks, Limit::Unbounded).await, Ok(vec![]));
}

#[tokio::test]
async fn test_timeout() {
    assert_eq!(
        timeout(Duration::from_millis(100), sleep(Duration::from_millis(1))).await,
        Ok(Duration::from_millis(1))
    );

    let error = timeout(Duration::from_millis(1), sleep(Duration::from_millis(100)))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "operation timed out after 1ms");
}

#[test]
fn test_limit_admits() {
    assert!(Limit::Unbounded.admits(usize::MAX));
    assert!(Limit::from(non_zero(2)).admits(1));
    assert!(!Limit::from(non_zero(2)).admits(2));
}
