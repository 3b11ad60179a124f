//! Collection helpers built on top of [`Vec`] and [`HashMap`](std::collections::HashMap).
//!
//! # Method
//! [`BinarySearch`](search::BinarySearch) implements [`Deref<Target = [T]>`](std::ops::Deref), so
//! read-only slice functionality comes for free while mutation is limited to methods that keep the
//! elements sorted.

pub mod group;
pub mod search;

pub use group::group_by;
pub use search::BinarySearch;
