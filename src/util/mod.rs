#[cfg(test)]
pub mod panic;
#[cfg(feature = "async")]
pub mod result;
