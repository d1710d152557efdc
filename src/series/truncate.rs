// Rounding the final value to the precision the tolerance supports

use super::config::Tolerance;

/// Number of times the tolerance must be multiplied by 10 to reach 1.0.
///
/// 0.01 gives 2, 0.0005 gives 4, anything >= 1 gives 0.
pub fn decimal_places(tolerance: Tolerance) -> u32 {
    let mut scaled = tolerance.get();
    let mut places = 0;
    while scaled < 1.0 {
        places += 1;
        scaled *= 10.0;
    }
    places
}

/// Round `value` to [`decimal_places`] of `tolerance`.
pub fn truncate(value: f64, tolerance: Tolerance) -> f64 {
    round_to_places(value, decimal_places(tolerance))
}

/// Round half away from zero to `places` decimal digits.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    if !scale.is_finite() {
        // Past f64 range every representable digit is already kept.
        return value;
    }
    (value * scale).round() / scale
}
