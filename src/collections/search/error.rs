use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("binary search requires at least 2 elements, got {len}")]
pub struct ConstructionError {
    pub len: usize,
}
