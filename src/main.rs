use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use utility_lib::collections::BinarySearch;
use utility_lib::concurrent::{Limit, call_concurrently, limit_concurrency, sleep};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            warn!(%error, "failed to start runtime");
            return;
        },
    };

    println!("\n[BinarySearch]\n");

    match BinarySearch::new(vec![1, 4, 8, 12, 16, 20, 22]) {
        Ok(mut search) => {
            info!(index = ?search.index_of(&12), "exact lookup");
            info!(index = search.closest_index_of(&3), "closest lookup");
            search.insert(10);
            info!(elements = ?search.as_slice(), "after insert");
        },
        Err(error) => warn!(%error, "failed to build search"),
    }

    println!("\n[Concurrency]\n");

    runtime.block_on(async {
        let two = NonZeroUsize::MIN.saturating_add(1);
        let limited = limit_concurrency(|ms: u64| sleep(Duration::from_millis(ms)), two);
        let slept = futures::future::join_all([30, 10, 20].map(|ms| limited.call((ms,)))).await;
        info!(?slept, "limited calls finished");

        let tasks = (1..=5_u64).map(|n| move || async move {
            sleep(Duration::from_millis(10 * n)).await;
            if n == 4 { Err(format!("task {n} failed")) } else { Ok(n * n) }
        });
        match call_concurrently(tasks, Limit::Bounded(two)).await {
            Ok(squares) => info!(?squares, "all tasks succeeded"),
            Err(error) => warn!(%error, "a task failed"),
        }
    });
}
