//! Utility functions for candle-ta.
//!
//! Tolerance-based float comparison for tests and validation, plus helpers
//! for inspecting the warm-up prefix of an output series.
//!
//! # Example
//!
//! ```
//! use candle_ta::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// # Example
///
/// ```
/// use candle_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than [`approx_eq`] when values span several orders of
/// magnitude, as fixed-point prices often do.
///
/// # Example
///
/// ```
/// use candle_ta::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Count the number of leading warm-up (exactly zero) values.
///
/// A genuine indicator value may also be zero (a flat CCI, a %K at the low of
/// the range), so this is only an upper bound unless the caller knows the
/// series cannot produce zero.
///
/// # Example
///
/// ```
/// use candle_ta::utils::count_warmup_prefix;
///
/// let data = vec![0.0, 0.0, 11.0, 12.0, 0.0];
/// assert_eq!(count_warmup_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_warmup_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| **x == T::zero()).count()
}

/// Fills `output[..len]` with the warm-up value.
///
/// `len` is clamped to the buffer length.
#[inline]
pub fn fill_warmup<T: SeriesElement>(output: &mut [T], len: usize) {
    let end = len.min(output.len());
    for item in &mut output[..end] {
        *item = T::zero();
    }
}
