//! Grouping of unordered items.

mod group_by;

pub use group_by::*;
