//! Numeric comparison over `serde_json::Number`.
//!
//! Integer operands (stored as `i64`/`u64`) are compared and divided exactly in
//! `i128`. An integer is never widened to `f64` when compared with a float.
//! Divisibility between two non-integral operands falls back to `f64`.

use serde_json::Number;
use std::cmp::Ordering;

/// The exact integer value, if the number is stored as an integer.
pub fn as_i128(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// `true` for numbers written without fraction or exponent.
pub fn is_integer(n: &Number) -> bool {
    n.is_i64() || n.is_u64()
}

/// Numeric ordering. `None` only if a float operand is not comparable.
pub fn compare(a: &Number, b: &Number) -> Option<Ordering> {
    match (as_i128(a), as_i128(b)) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        (Some(a), None) => compare_with_float(a, b.as_f64()?),
        (None, Some(b)) => compare_with_float(b, a.as_f64()?).map(Ordering::reverse),
        (None, None) => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

/// Order an exact integer against a float without rounding the integer.
///
/// `floor as i128` saturates, which keeps the answer right for floats
/// beyond the `i128` range.
fn compare_with_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    let floor = float.floor();
    Some(match int.cmp(&(floor as i128)) {
        Ordering::Equal if floor < float => Ordering::Less,
        ordering => ordering,
    })
}

/// Numeric equality: `1` equals `1.0`.
pub fn equal(a: &Number, b: &Number) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

/// Integer stored as such, or a float with no fraction inside the `i128` range.
fn integral_value(n: &Number) -> Option<i128> {
    as_i128(n).or_else(|| {
        let f = n.as_f64()?;
        (f.is_finite() && f.fract() == 0.0 && f.abs() < i128::MAX as f64).then_some(f as i128)
    })
}

/// Relative tolerance, in units of `f64::EPSILON` scaled by the quotient.
const QUOTIENT_ULPS: f64 = 4.0;

/// Whether `value / divisor` is an integer. A zero divisor never divides.
///
/// Integral operands (including `2.0`) use exact remainder. Otherwise the
/// float quotient `q` must lie within `4 * EPSILON * |q|` of the nearest
/// integer, which accepts `0.3 / 0.1` (`2.9999999999999996`), rejects
/// `0.35 / 0.1`, and rejects any nonzero value smaller than the divisor.
pub fn is_multiple_of(value: &Number, divisor: &Number) -> bool {
    if let (Some(v), Some(d)) = (integral_value(value), integral_value(divisor)) {
        return d != 0 && v % d == 0;
    }
    let (Some(v), Some(d)) = (value.as_f64(), divisor.as_f64()) else {
        return false;
    };
    if d == 0.0 {
        return false;
    }
    let q = v / d;
    if !q.is_finite() {
        return false;
    }
    (q - q.round()).abs() <= QUOTIENT_ULPS * f64::EPSILON * q.abs()
}
