//! Average True Range (ATR) indicator.
//!
//! Wilder's volatility measure: a smoothed average of the true range, which
//! extends the candle's high–low range to cover any gap from the previous
//! close.
//!
//! # Formula
//!
//! ```text
//! TR[i]      = max(High[i] - Low[i], |High[i] - Close[i-1]|, |Low[i] - Close[i-1]|)
//! ATR[period] = mean(TR[1..=period])
//! ATR[i]      = (ATR[i-1]·(period - 1) + TR[i]) / period
//! ```
//!
//! TR needs a previous close, so `TR[0]` is never used and indices
//! `0..=period-1` are warm-up zeros.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::atr::atr;
//! use candle_ta::Candle;
//!
//! let candles = vec![
//!     Candle::new(0, 10, 12, 9, 11, 0),
//!     Candle::new(1, 11, 13, 10, 12, 0), // TR 3
//!     Candle::new(2, 12, 16, 12, 15, 0), // TR 4
//!     Candle::new(3, 15, 15, 11, 12, 0), // TR 4
//! ];
//! let result: Vec<f64> = atr(&candles, 2).unwrap();
//!
//! assert_eq!(result, vec![0.0, 0.0, 3.5, 3.75]);
//! ```

use crate::candle::Candle;
use crate::error::{Error, Result};
use crate::incremental::wilder_step;
use crate::traits::{validate_output_len, validate_period, SeriesElement, ValidatedInput};
use crate::utils::fill_warmup;

/// Returns the lookback period for ATR (`period`).
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum number of candles required for ATR (`period + 1`).
#[inline]
#[must_use]
pub const fn atr_min_len(period: usize) -> usize {
    period.saturating_add(1)
}

/// True range of `candles[i]` against the previous close. `i` must be at
/// least 1.
#[inline]
fn true_range_at<T: SeriesElement>(candles: &[Candle], i: usize) -> Result<T> {
    candles[i].true_range(candles[i - 1].close)
}

/// Computes the true range series.
///
/// `TR[0]` has no previous close and is the plain high–low range.
///
/// # Errors
///
/// - `Error::EmptyInput` if there are no candles
/// - `Error::NumericConversion` if a price cannot be represented as `T`
pub fn true_range<T: SeriesElement>(candles: &[Candle]) -> Result<Vec<T>> {
    candles.validate_not_empty()?;
    let mut result = Vec::with_capacity(candles.len());
    result.push(T::from_i32(candles[0].high)? - T::from_i32(candles[0].low)?);
    for i in 1..candles.len() {
        result.push(true_range_at(candles, i)?);
    }
    Ok(result)
}

/// Computes the Average True Range.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are not more candles than `period`
#[must_use = "this returns a Result with the ATR values, which should be used"]
pub fn atr<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    atr_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Average True Range into a caller-supplied buffer.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`atr`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn atr_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_period(period)?;
    candles.validate_not_empty()?;
    if candles.len() < atr_min_len(period) {
        return Err(Error::InsufficientData {
            required: atr_min_len(period),
            actual: candles.len(),
            indicator: "atr",
        });
    }
    validate_output_len(output, candles.len(), "atr")?;

    let period_t = T::from_usize(period)?;
    let period_minus_one_t = T::from_usize(period - 1)?;

    fill_warmup(output, atr_lookback(period));

    let mut sum = T::zero();
    for i in 1..=period {
        sum = sum + true_range_at::<T>(candles, i)?;
    }
    let mut value = sum / period_t;
    output[period] = value;

    for i in (period + 1)..candles.len() {
        value = wilder_step(value, true_range_at(candles, i)?, period_t, period_minus_one_t);
        output[i] = value;
    }

    Ok(candles.len())
}
