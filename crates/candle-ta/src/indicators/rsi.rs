//! Relative Strength Index (RSI) indicator.
//!
//! A momentum oscillator measuring the speed and magnitude of close-to-close
//! changes on a 0–100 scale. Readings above 70 are conventionally read as
//! overbought, below 30 as oversold.
//!
//! # Algorithm
//!
//! Wilder's smoothing, O(n):
//!
//! ```text
//! Change[i] = Close[i] - Close[i-1]
//! Gain[i]   = max(Change[i], 0)
//! Loss[i]   = max(-Change[i], 0)
//!
//! AvgGain[period] = mean(Gain[1..=period])
//! AvgLoss[period] = mean(Loss[1..=period])
//! AvgGain[i] = (AvgGain[i-1]·(period-1) + Gain[i]) / period
//! AvgLoss[i] = (AvgLoss[i-1]·(period-1) + Loss[i]) / period
//!
//! RSI = 100                                  if AvgLoss == 0
//!     = 100 - 100 / (1 + AvgGain / AvgLoss)  otherwise
//! ```
//!
//! # Boundary Conditions
//!
//! - **No losses** (including a flat series): RSI = 100
//! - **No gains**: RSI = 0
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::rsi::rsi;
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = [100; 6].iter().map(|&c| Candle::from_close(0, c)).collect();
//! let result: Vec<f64> = rsi(&candles, 3).unwrap();
//!
//! assert_eq!(result, vec![0.0, 0.0, 0.0, 100.0, 100.0, 100.0]);
//! ```

use crate::candle::Candle;
use crate::error::{Error, Result};
use crate::incremental::{rsi_from_averages, split_change, wilder_step};
use crate::traits::{validate_output_len, validate_period, SeriesElement, ValidatedInput};
use crate::utils::fill_warmup;

/// Returns the lookback period for RSI (`period`).
///
/// RSI needs `period` close-to-close changes, hence `period + 1` candles, so
/// the first `period` outputs are warm-up zeros.
///
/// # Example
///
/// ```
/// use candle_ta::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum number of candles required for RSI (`period + 1`).
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    period.saturating_add(1)
}

fn validate_rsi_inputs(candles: &[Candle], period: usize) -> Result<()> {
    validate_period(period)?;
    candles.validate_not_empty()?;

    if candles.len() < rsi_min_len(period) {
        return Err(Error::InsufficientData {
            required: rsi_min_len(period),
            actual: candles.len(),
            indicator: "rsi",
        });
    }

    Ok(())
}

/// Runs Wilder's RSI recurrence over the closes of `candles`.
///
/// Calls `emit(i, rsi)` for every index `i >= period` and returns the final
/// `(avg_gain, avg_loss)` pair.
pub(crate) fn rsi_running<T, F>(candles: &[Candle], period: usize, mut emit: F) -> Result<(T, T)>
where
    T: SeriesElement,
    F: FnMut(usize, T),
{
    validate_rsi_inputs(candles, period)?;

    let period_t = T::from_usize(period)?;
    let period_minus_one_t = T::from_usize(period - 1)?;

    // Seed: simple mean of the first `period` gains and losses
    let mut sum_gain = T::zero();
    let mut sum_loss = T::zero();
    for i in 1..=period {
        let change = T::from_i32(candles[i].close)? - T::from_i32(candles[i - 1].close)?;
        let (gain, loss) = split_change(change);
        sum_gain = sum_gain + gain;
        sum_loss = sum_loss + loss;
    }

    let mut avg_gain = sum_gain / period_t;
    let mut avg_loss = sum_loss / period_t;
    emit(period, rsi_from_averages(avg_gain, avg_loss));

    for i in (period + 1)..candles.len() {
        let change = T::from_i32(candles[i].close)? - T::from_i32(candles[i - 1].close)?;
        let (gain, loss) = split_change(change);

        avg_gain = wilder_step(avg_gain, gain, period_t, period_minus_one_t);
        avg_loss = wilder_step(avg_loss, loss, period_t, period_minus_one_t);

        emit(i, rsi_from_averages(avg_gain, avg_loss));
    }

    Ok((avg_gain, avg_loss))
}

/// Computes the Relative Strength Index of the closes.
///
/// The first `period` values are `0.0` (warm-up).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are not more candles than `period`
///
/// # Example
///
/// ```
/// use candle_ta::indicators::rsi::rsi;
/// use candle_ta::Candle;
///
/// let candles: Vec<Candle> = [44, 45, 46, 45, 44, 45, 46]
///     .iter()
///     .map(|&c| Candle::from_close(0, c))
///     .collect();
/// let result: Vec<f64> = rsi(&candles, 3).unwrap();
///
/// assert_eq!(result[2], 0.0);
/// assert!(result[3] >= 0.0 && result[3] <= 100.0);
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    rsi_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Relative Strength Index into a caller-supplied buffer.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`rsi`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn rsi_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_rsi_inputs(candles, period)?;
    validate_output_len(output, candles.len(), "rsi")?;

    fill_warmup(output, rsi_lookback(period));
    rsi_running(candles, period, |i, value| output[i] = value)?;

    Ok(candles.len())
}
