//! Two dimensional geometry.

mod vector;

pub use vector::*;
