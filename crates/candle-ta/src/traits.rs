//! Core traits for candle-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], the floating-point type an
//! indicator writes into its output buffers (`f64` across the C boundary,
//! `f32` available for memory-bound callers). The module also provides
//! validation utilities through [`ValidatedInput`] and standalone validation
//! functions shared by every indicator.
//!
//! # Example
//!
//! ```
//! use candle_ta::traits::{validate_indicator_input, SeriesElement};
//! use candle_ta::Candle;
//!
//! fn mean_close<T: SeriesElement>(candles: &[Candle], period: usize) -> candle_ta::Result<T> {
//!     validate_indicator_input(candles, period, "mean_close")?;
//!
//!     let mut sum = T::zero();
//!     for c in &candles[..period] {
//!         sum = sum + T::from_i32(c.close)?;
//!     }
//!     Ok(sum / T::from_usize(period)?)
//! }
//!
//! let candles: Vec<Candle> = (1..=5).map(|c| Candle::from_close(0, c)).collect();
//! let result: f64 = mean_close(&candles, 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::candle::Candle;
use crate::error::{Error, Result};

/// A trait for types that can be used as elements of an output series.
///
/// # Type Bounds
///
/// - `Float`: standard floating-point operations
/// - `NumCast`: conversion from periods and integer prices
/// - `Copy + Default + Send + Sync`: cheap to move between threads
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Used to turn period parameters into divisors.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `i32` fixed-point price.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_i32(value: i32) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "i32 to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used by the EMA smoothing constant `k = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // Safe unwrap: 2 is always representable in Float types
        <Self as NumCast>::from(2).unwrap()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for percentage scaling in RSI and Stochastic.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before indicator computation.
pub trait ValidatedInput {
    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            Err(Error::InsufficientData {
                required: min_length,
                actual: self.len(),
                indicator,
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl ValidatedInput for [Candle] {
    #[inline]
    fn len(&self) -> usize {
        <[Candle]>::len(self)
    }
}

impl ValidatedInput for Vec<Candle> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a candle series is suitable for a windowed indicator.
///
/// Checks, in order:
/// 1. The period is non-zero
/// 2. The series is not empty
/// 3. The series has at least `period` candles
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the series is empty
/// - `Error::InsufficientData` if the series is shorter than the period
#[inline]
pub fn validate_indicator_input(
    candles: &[Candle],
    period: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_period(period)?;
    candles.validate_not_empty()?;
    candles.validate_min_length(period, indicator)?;
    Ok(())
}

/// Validates that an output buffer can hold `required` elements.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if the buffer is shorter than `required`.
#[inline]
pub const fn validate_output_len<T>(
    output: &[T],
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    if output.len() < required {
        Err(Error::BufferTooSmall {
            required,
            actual: output.len(),
            indicator,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closes(values: &[i32]) -> Vec<Candle> {
        values.iter().map(|&c| Candle::from_close(0, c)).collect()
    }

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42).unwrap();
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100).unwrap();
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_i32() {
        let val: f64 = SeriesElement::from_i32(-5).unwrap();
        assert!((val - (-5.0)).abs() < 1e-10);

        let max: f64 = SeriesElement::from_i32(i32::MAX).unwrap();
        assert!((max - 2_147_483_647.0).abs() < 1e-10);
    }

    #[test]
    fn test_series_element_constants() {
        let two: f64 = SeriesElement::two();
        let hundred: f32 = SeriesElement::hundred();
        assert!((two - 2.0).abs() < 1e-10);
        assert!((hundred - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_validated_input_len() {
        let data = closes(&[1, 2, 3]);
        assert_eq!(ValidatedInput::len(&data), 3);
        assert_eq!(ValidatedInput::len(data.as_slice()), 3);
        assert!(ValidatedInput::is_empty(&Vec::<Candle>::new()));
    }

    #[test]
    fn test_validate_min_length_failure() {
        let data = closes(&[1, 2, 3]);
        match data.validate_min_length(5, "test") {
            Err(Error::InsufficientData {
                required,
                actual,
                indicator,
            }) => {
                assert_eq!(required, 5);
                assert_eq!(actual, 3);
                assert_eq!(indicator, "test");
            }
            other => panic!("Expected InsufficientData error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_period_zero() {
        assert!(validate_period(1).is_ok());
        assert!(matches!(
            validate_period(0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    #[test]
    fn test_validate_indicator_input_order() {
        // Period is checked before emptiness
        assert!(matches!(
            validate_indicator_input(&[], 0, "test"),
            Err(Error::InvalidPeriod { .. })
        ));
        assert!(matches!(
            validate_indicator_input(&[], 3, "test"),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            validate_indicator_input(&closes(&[1, 2]), 3, "test"),
            Err(Error::InsufficientData { .. })
        ));
        assert!(validate_indicator_input(&closes(&[1, 2, 3]), 3, "test").is_ok());
    }

    #[test]
    fn test_validate_output_len() {
        let buf = [0.0_f64; 4];
        assert!(validate_output_len(&buf, 4, "test").is_ok());
        assert!(matches!(
            validate_output_len(&buf, 5, "test"),
            Err(Error::BufferTooSmall {
                required: 5,
                actual: 4,
                ..
            })
        ));
    }
}
