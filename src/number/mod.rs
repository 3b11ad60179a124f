//! Number utilities.

mod round;

pub use round::*;
