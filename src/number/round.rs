/// Rounds `value` to the given number of decimal `places`, with halves rounded away from zero.
/// Negative places round to the left of the decimal point.
///
/// # Examples
/// ```
/// # use utility_lib::number::round_to;
/// assert_eq!(round_to(1.2345, 2), 1.23);
/// assert_eq!(round_to(1.2345, 3), 1.235);
/// assert_eq!(round_to(1250.0, -2), 1300.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Linearly interpolates between `a` and `b`, where a `t` of 0 gives `a` and 1 gives `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Returns the sum of the absolute differences between each pair of components. Extra components
/// in the longer of the two slices are ignored.
pub fn manhattan_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(a, b)| (a - b).abs())
        .sum()
}
