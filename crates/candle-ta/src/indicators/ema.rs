//! Exponential Moving Average (EMA) indicator.
//!
//! A trend-following average that weights recent closes more heavily than the
//! SMA does.
//!
//! # Formula
//!
//! ```text
//! k = 2 / (period + 1)
//! EMA[0..period-2] = 0 (warm-up)
//! EMA[period-1]    = SMA(close[0..period])
//! EMA[i]           = close[i]·k + EMA[i-1]·(1 - k)
//! ```
//!
//! Every step after the seed is [`ema_step`](crate::incremental::ema_step),
//! the same function the incremental engine uses.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::ema::ema;
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = [10, 11, 12, 13, 14, 15]
//!     .iter()
//!     .map(|&c| Candle::from_close(0, c))
//!     .collect();
//! let result: Vec<f64> = ema(&candles, 3).unwrap();
//!
//! assert_eq!(result[1], 0.0);
//! assert_eq!(result[2], 11.0); // SMA seed
//! assert_eq!(result[3], 12.0); // 13·0.5 + 11·0.5
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::incremental::{ema_smoothing, ema_step};
use crate::traits::{validate_indicator_input, validate_output_len, SeriesElement};
use crate::utils::fill_warmup;

/// Returns the lookback period for EMA (`period - 1`).
///
/// # Example
///
/// ```
/// use candle_ta::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(5), 4);
/// assert_eq!(ema_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum number of candles required for EMA.
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    period
}

/// Runs the EMA recurrence over the closes of `candles`.
///
/// Calls `emit(i, value)` for every index `i >= period - 1` and returns the
/// final EMA value.
pub(crate) fn ema_running<T, F>(candles: &[Candle], period: usize, mut emit: F) -> Result<T>
where
    T: SeriesElement,
    F: FnMut(usize, T),
{
    validate_indicator_input(candles, period, "ema")?;

    let k = ema_smoothing::<T>(period)?;
    let period_t = T::from_usize(period)?;

    let mut sum = T::zero();
    for c in &candles[..period] {
        sum = sum + T::from_i32(c.close)?;
    }
    let mut value = sum / period_t;
    emit(period - 1, value);

    for (i, c) in candles.iter().enumerate().skip(period) {
        value = ema_step(value, T::from_i32(c.close)?, k);
        emit(i, value);
    }

    Ok(value)
}

/// Computes the Exponential Moving Average of the closes.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than `period`
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    ema_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Exponential Moving Average into a caller-supplied buffer.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`ema`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
///
/// # Example
///
/// ```
/// use candle_ta::indicators::ema::ema_into;
/// use candle_ta::Candle;
///
/// let candles: Vec<Candle> = (1..=5).map(|c| Candle::from_close(0, c)).collect();
/// let mut output = vec![0.0_f64; 5];
/// assert_eq!(ema_into(&candles, 3, &mut output).unwrap(), 5);
/// assert_eq!(output[2], 2.0);
/// ```
#[must_use = "this returns a Result with the count of processed elements"]
pub fn ema_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, period, "ema")?;
    validate_output_len(output, candles.len(), "ema")?;

    fill_warmup(output, ema_lookback(period));
    ema_running(candles, period, |i, value| output[i] = value)?;

    Ok(candles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn closes(values: &[i32]) -> Vec<Candle> {
        values.iter().map(|&c| Candle::from_close(0, c)).collect()
    }

    #[test]
    fn test_ema_seed_is_sma() {
        let result: Vec<f64> = ema(&closes(&[2, 4, 6, 8, 10]), 3).unwrap();
        assert_eq!(result[0], 0.0);
        assert_eq!(result[1], 0.0);
        assert_eq!(result[2], 4.0);
    }

    #[test]
    fn test_ema_recurrence() {
        let candles = closes(&[22, 24, 23, 25, 27, 26, 28, 30]);
        let period = 4;
        let result: Vec<f64> = ema(&candles, period).unwrap();
        let k = 2.0 / 5.0;
        for i in period..candles.len() {
            let expected = f64::from(candles[i].close) * k + result[i - 1] * (1.0 - k);
            assert!((result[i] - expected).abs() < 1e-12, "index {i}");
        }
    }

    #[test]
    fn test_ema_period_one_tracks_close() {
        let result: Vec<f64> = ema(&closes(&[7, 3, 9]), 1).unwrap();
        assert_eq!(result, vec![7.0, 3.0, 9.0]);
    }

    #[test]
    fn test_ema_constant_series() {
        let result: Vec<f64> = ema(&closes(&[50; 10]), 4).unwrap();
        for value in &result[3..] {
            assert!((value - 50.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ema_errors() {
        assert!(matches!(
            ema::<f64>(&closes(&[1]), 0),
            Err(Error::InvalidPeriod { .. })
        ));
        assert!(matches!(
            ema::<f64>(&closes(&[1, 2]), 3),
            Err(Error::InsufficientData { indicator: "ema", .. })
        ));
        let mut short = [0.0_f64; 2];
        assert!(matches!(
            ema_into(&closes(&[1, 2, 3]), 2, &mut short),
            Err(Error::BufferTooSmall { .. })
        ));
    }
}
