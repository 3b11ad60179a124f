//! String utilities.

mod hash;
mod tests;

pub use hash::*;
