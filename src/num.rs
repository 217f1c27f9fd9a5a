/// Round to `digits` decimal places, ties towards positive infinity.
///
/// Matches the dashboard arithmetic `Math.round(x * 10^d) / 10^d`, which differs
/// from `f64::round` for negative half-way values.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale + 0.5).floor() / scale
}
