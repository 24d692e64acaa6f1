//! Scalar helpers shared by the vector operations.

/// Absolute threshold under which a value is considered zero.
/// Large enough to absorb floating point noise, small enough to stay
/// meaningful for coordinates in a nominal range.
pub const EPSILON: f64 = 1e-12;

/// Number of fractional digits kept when formatting coordinates.
pub const FORMAT_DIGITS: i32 = 5;

/// Number of fractional digits used by [`crate::Point::round_to_default`].
pub const DEFAULT_FIXED_DIGITS: i32 = 8;

#[inline]
pub fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

#[inline]
pub fn mix(a: f64, b: f64, ratio: f64) -> f64 {
    a * (1.0 - ratio) + b * ratio
}

/// Rounds to the nearest integer, halves go toward positive infinity.
/// `2.5 -> 3`, `-2.5 -> -2`
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// Rounds `v` to `digits` fractional digits. When `10^digits` or the scaled
/// value leaves the finite range, `v` is already as precise as it can be and is
/// returned unchanged.
#[inline]
pub fn round_to(v: f64, digits: i32) -> f64 {
    let mult = 10f64.powi(digits);
    let scaled = v * mult;
    if mult == 0.0 || !scaled.is_finite() {
        return v;
    }
    let r = round_half_up(scaled) / mult;
    // -0.0 prints as "-0"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Rounds to [`FORMAT_DIGITS`] without padding trailing zeros.
#[inline]
pub fn format(v: f64) -> f64 {
    round_to(v, FORMAT_DIGITS)
}

/// NaN is the only falsy float left once arguments are typed.
#[inline]
pub(crate) fn or_zero(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}
