//! Small functional helpers: composition, one-shot and cached functions, panic capture and
//! comparator combination.
//!
//! The composition macros [`pipe!`](crate::pipe!) and [`flow!`](crate::flow!) are exported at the
//! crate root.

mod attempt;
mod combinators;
mod comparator;
mod memoize;
mod once;
mod pipe;

pub use attempt::*;
pub use combinators::*;
pub use comparator::*;
pub use memoize::*;
pub use once::*;
pub use pipe::*;
