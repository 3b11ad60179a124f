use std::cmp::Ordering;

/// The value produced by a [`Comparator`]. Its sign orders two elements and its magnitude measures
/// how far apart they are, which is what [`closest_index_of`](super::BinarySearch::closest_index_of)
/// ranks candidates by.
pub trait Difference: PartialOrd + Sized {
    /// Returns the sign of the difference relative to zero.
    fn ordering(&self) -> Ordering;

    /// Returns the absolute distance represented by the difference.
    fn magnitude(&self) -> Self;
}

macro_rules! impl_difference_signed {
    ($($t:ty),*) => {
        $(
            impl Difference for $t {
                fn ordering(&self) -> Ordering {
                    self.cmp(&0)
                }

                fn magnitude(&self) -> Self {
                    self.saturating_abs()
                }
            }
        )*
    };
}

impl_difference_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_difference_float {
    ($($t:ty),*) => {
        $(
            impl Difference for $t {
                /// NaN is treated as equal, so a comparator that produces it ends a search early
                /// rather than looping.
                fn ordering(&self) -> Ordering {
                    self.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
                }

                fn magnitude(&self) -> Self {
                    self.abs()
                }
            }
        )*
    };
}

impl_difference_float!(f32, f64);

/// Plain [`Ordering`]s carry no distance, so every unequal pair is considered equally far apart.
impl Difference for Ordering {
    fn ordering(&self) -> Ordering {
        *self
    }

    fn magnitude(&self) -> Self {
        match self {
            Ordering::Equal => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

/// A total order over `T`, returning a negative [`Difference`] if `a` sorts before `b`, zero if
/// they are equal and a positive one if `a` sorts after `b`.
///
/// Any closure of the form `Fn(&T, &T) -> D` is a Comparator, so callers rarely need to implement
/// this directly.
///
/// # Examples
/// ```
/// # use utility_lib::collections::search::Comparator;
/// let descending = |a: &i32, b: &i32| b - a;
/// assert!(descending.compare(&1, &2) > 0);
/// ```
pub trait Comparator<T> {
    type Output: Difference;

    fn compare(&self, a: &T, b: &T) -> Self::Output;
}

impl<T, D: Difference, F: Fn(&T, &T) -> D> Comparator<T> for F {
    type Output = D;

    fn compare(&self, a: &T, b: &T) -> D {
        self(a, b)
    }
}

/// Types with a signed difference that can't overflow. Integers are widened to [`i128`] and floats
/// to [`f64`], so unsigned values can be subtracted without wrapping.
pub trait Numeric: Copy {
    type Difference: Difference;

    fn difference(self, other: Self) -> Self::Difference;
}

macro_rules! impl_numeric {
    ($diff:ty => $($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Difference = $diff;

                fn difference(self, other: Self) -> $diff {
                    self as $diff - other as $diff
                }
            }
        )*
    };
}

impl_numeric!(i128 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric!(f64 => f32, f64);

// u128 and i128 can't be widened any further.
impl Numeric for i128 {
    type Difference = i128;

    fn difference(self, other: Self) -> i128 {
        self.saturating_sub(other)
    }
}

impl Numeric for u128 {
    type Difference = i128;

    fn difference(self, other: Self) -> i128 {
        if self >= other {
            i128::try_from(self - other).unwrap_or(i128::MAX)
        } else {
            i128::try_from(other - self).map_or(i128::MIN, |diff| -diff)
        }
    }
}

/// The default [`Comparator`], computing `a - b` for [`Numeric`] types. Because it is only
/// implemented for numeric elements, a [`BinarySearch`](super::BinarySearch) over anything else
/// must be given an explicit comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Subtract;

impl<T: Numeric> Comparator<T> for Subtract {
    type Output = T::Difference;

    fn compare(&self, a: &T, b: &T) -> T::Difference {
        a.difference(*b)
    }
}
