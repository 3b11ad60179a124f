use std::time::Duration;

use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("operation timed out after {after:?}")]
pub struct TimeoutError {
    pub after: Duration,
}
