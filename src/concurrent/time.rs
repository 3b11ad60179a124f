use std::future::Future;
use std::time::Duration;

use tracing::debug;

use super::TimeoutError;

/// Waits for `duration` to pass, resolving to the same duration.
///
/// Requires a Tokio runtime with its time driver enabled.
pub async fn sleep(duration: Duration) -> Duration {
    tokio::time::sleep(duration).await;
    duration
}

/// Races `future` against a timer, returning its output if it settles within `duration` and a
/// [`TimeoutError`] otherwise. The future is dropped when the timer wins.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use utility_lib::concurrent::{sleep, timeout};
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let quick = timeout(Duration::from_millis(50), sleep(Duration::from_millis(1))).await;
/// assert_eq!(quick, Ok(Duration::from_millis(1)));
///
/// let slow = timeout(Duration::from_millis(1), sleep(Duration::from_millis(50))).await;
/// assert!(slow.is_err());
/// # });
/// ```
pub async fn timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, TimeoutError> {
    match tokio::time::timeout(duration, future).await {
        Ok(output) => Ok(output),
        Err(_) => {
            debug!(?duration, "future timed out");
            Err(TimeoutError { after: duration })
        },
    }
}
