use std::convert::Infallible;
use std::f64::consts::PI;
use std::ops::{Div, Mul};
use std::str::FromStr;

use derive_more::{Add, Display, From, Neg, Sub};

/// A two dimensional vector of `f64` components. The y axis points down, so [`Vector2::UP`] has a
/// negative y component.
///
/// Vectors can be added, subtracted, negated and scaled with the usual operators. Multiplying or
/// dividing by another vector works component-wise.
///
/// # Examples
/// ```
/// # use utility_lib::geometry::Vector2;
/// let a = Vector2::new(3.0, 4.0);
/// assert_eq!(a.len(), 5.0);
/// assert_eq!(a + Vector2::ONE, Vector2::new(4.0, 5.0));
/// assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
/// assert_eq!(a.to_string(), "Vector2(3, 4)");
/// ```
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Add, Sub, Neg, From)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[display("Vector2({x}, {y})")]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::splat(0.0);
    pub const ONE: Vector2 = Vector2::splat(1.0);
    pub const UP: Vector2 = Vector2::new(0.0, -1.0);
    pub const DOWN: Vector2 = Vector2::new(0.0, 1.0);
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    /// Creates a Vector2 with both components set to `value`.
    pub const fn splat(value: f64) -> Vector2 {
        Vector2 { x: value, y: value }
    }

    /// Creates a unit vector pointing at `angle` radians, measured clockwise from
    /// [`Vector2::RIGHT`].
    pub fn from_angle(angle: f64) -> Vector2 {
        Vector2::new(angle.cos(), angle.sin())
    }

    pub fn abs(self) -> Vector2 {
        Vector2::new(self.x.abs(), self.y.abs())
    }

    /// Returns the length (magnitude) of this vector.
    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn dist(self, other: Vector2) -> f64 {
        (self - other).len()
    }

    /// Returns a vector of length 1 pointing in the same direction, or [`Vector2::ZERO`] if this
    /// vector has no length.
    pub fn norm(self) -> Vector2 {
        match self.len() {
            0.0 => Vector2::ZERO,
            len => self / len,
        }
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z component of the three dimensional cross product of `self` and `other`.
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates this vector by `angle` radians about the origin.
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns the angle of this vector in radians, in the range `-PI..=PI`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the angle between `self` and `other` in radians, in the range `0..=PI`.
    pub fn angle_to(self, other: Vector2) -> f64 {
        let diff = (other.angle() - self.angle()).abs();
        if diff > PI { 2.0 * PI - diff } else { diff }
    }

    /// Projects this vector onto `onto`. Projecting onto a zero vector gives [`Vector2::ZERO`].
    pub fn project(self, onto: Vector2) -> Vector2 {
        match onto.dot(onto) {
            0.0 => Vector2::ZERO,
            len_squared => onto * (self.dot(onto) / len_squared),
        }
    }

    /// Reflects this vector off a surface with the given `normal`.
    pub fn reflect(self, normal: Vector2) -> Vector2 {
        let normal = normal.norm();
        self - normal * (2.0 * self.dot(normal))
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> [f64; 2] {
        value.to_array()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Component-wise division. Any component that would be NaN, such as `0 / 0`, is 0 instead.
impl Div<Vector2> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2::new(non_nan(self.x / rhs.x), non_nan(self.y / rhs.y))
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Vector2 {
        self / Vector2::splat(rhs)
    }
}

fn non_nan(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Reads the first two unsigned numbers found in a string as the x and y components, so
/// `"(1.5, 2)"`, `"1.5x2"` and `"Vector2(1.5, 2)"` all parse the same way. Missing components are
/// 0.
impl FromStr for Vector2 {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Vector2, Infallible> {
        let s = s.trim_start();
        let mut numbers = s
            .strip_prefix("Vector2")
            .unwrap_or(s)
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter_map(|part| part.parse::<f64>().ok());

        Ok(Vector2::new(
            numbers.next().unwrap_or_default(),
            numbers.next().unwrap_or_default(),
        ))
    }
}
