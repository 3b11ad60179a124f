//! A module containing [`BinarySearch`] and the comparison traits it is ordered by.
//!
//! [`Comparator`] is implemented for any closure returning a [`Difference`], with [`Subtract`]
//! used by default for [`Numeric`] elements.
//!
//! [`BinarySearch`] is also re-exported under the parent module.

mod binary_search;
mod comparator;
mod error;

pub use binary_search::*;
pub use comparator::*;
pub use error::*;
