//! Scoped cleanup.

mod deferral;
mod tests;

pub use deferral::*;
