//! Simple Moving Average (SMA) indicator.
//!
//! The arithmetic mean of the last `period` closes. The SMA sliding sum is the
//! numerical backbone other indicators reuse: EMA seeds from it and
//! Bollinger Bands take it as the middle band.
//!
//! # Algorithm
//!
//! O(n) with a rolling sum:
//! 1. Sum the first `period` closes; index `period - 1` is `sum / period`
//! 2. For each later index: `sum = sum - close[i - period] + close[i]`
//!
//! The update order matches [`sma_incremental`](crate::incremental::sma_incremental)
//! so live updates reproduce batch values exactly.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::sma::sma;
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = [10, 11, 12, 13, 14]
//!     .iter()
//!     .map(|&c| Candle::from_close(0, c))
//!     .collect();
//! let result: Vec<f64> = sma(&candles, 3).unwrap();
//!
//! assert_eq!(result, vec![0.0, 0.0, 11.0, 12.0, 13.0]);
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::traits::{validate_indicator_input, validate_output_len, SeriesElement};
use crate::utils::fill_warmup;

/// Returns the lookback period for SMA.
///
/// The lookback is the number of warm-up zeros at the start of the output.
///
/// # Example
///
/// ```
/// use candle_ta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(5), 4);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum number of candles required for SMA.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    period
}

/// Runs the SMA sliding sum over the closes of `candles`.
///
/// Calls `emit(i, sum)` for every index `i >= period - 1` with the window sum
/// ending at `i`, and returns the final window sum.
pub(crate) fn sma_running<T, F>(candles: &[Candle], period: usize, mut emit: F) -> Result<T>
where
    T: SeriesElement,
    F: FnMut(usize, T),
{
    validate_indicator_input(candles, period, "sma")?;

    let mut sum = T::zero();
    for c in &candles[..period] {
        sum = sum + T::from_i32(c.close)?;
    }
    emit(period - 1, sum);

    for i in period..candles.len() {
        let new_close = T::from_i32(candles[i].close)?;
        let old_close = T::from_i32(candles[i - period].close)?;
        sum = sum - old_close + new_close;
        emit(i, sum);
    }

    Ok(sum)
}

/// Computes the Simple Moving Average of the closes.
///
/// Returns a vector of the same length as the input, where the first
/// `period - 1` values are `0.0` (warm-up).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than `period`
///
/// # Example
///
/// ```
/// use candle_ta::indicators::sma::sma;
/// use candle_ta::Candle;
///
/// let candles: Vec<Candle> = (1..=5).map(|c| Candle::from_close(0, c)).collect();
/// let result: Vec<f64> = sma(&candles, 2).unwrap();
/// assert_eq!(result[1], 1.5);
/// ```
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    sma_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Simple Moving Average into a caller-supplied buffer.
///
/// Only `output[..candles.len()]` is written.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`sma`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn sma_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, period, "sma")?;
    validate_output_len(output, candles.len(), "sma")?;

    let period_t = T::from_usize(period)?;
    fill_warmup(output, sma_lookback(period));
    sma_running::<T, _>(candles, period, |i, sum| output[i] = sum / period_t)?;

    Ok(candles.len())
}
