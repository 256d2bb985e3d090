//! Weighted Moving Average (WMA) indicator.
//!
//! Linearly weighted mean of the last `period` closes, the newest close
//! carrying weight `period` and the oldest weight `1`.
//!
//! # Formula
//!
//! ```text
//! WMA = (P₁ × n + P₂ × (n-1) + ... + Pₙ × 1) / (n × (n+1) / 2)
//! ```
//!
//! Where `P₁` is the most recent close.
//!
//! Each output index is recomputed with a full inner loop over its window,
//! O(n·period) overall. There is no rolling shortcut.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::wma::wma;
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = (1..=5).map(|c| Candle::from_close(0, c)).collect();
//! let result: Vec<f64> = wma(&candles, 3).unwrap();
//!
//! // WMA[2] = (1×1 + 2×2 + 3×3) / 6 = 14/6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::traits::{validate_indicator_input, validate_output_len, SeriesElement};
use crate::utils::fill_warmup;

/// Returns the lookback period for WMA (`period - 1`).
///
/// # Example
///
/// ```
/// use candle_ta::indicators::wma::wma_lookback;
///
/// assert_eq!(wma_lookback(5), 4);
/// ```
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum number of candles required for WMA.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    period
}

/// Computes the Weighted Moving Average of the closes.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than `period`
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    wma_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Weighted Moving Average into a caller-supplied buffer.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`wma`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn wma_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, period, "wma")?;
    validate_output_len(output, candles.len(), "wma")?;

    // n*(n+1)/2, evaluated in floating point so large periods cannot overflow
    let period_t = T::from_usize(period)?;
    let weight_sum = period_t * (period_t + T::one()) / T::two();

    fill_warmup(output, wma_lookback(period));

    for i in wma_lookback(period)..candles.len() {
        let window = &candles[i + 1 - period..=i];
        let mut weighted_sum = T::zero();
        for (j, c) in window.iter().enumerate() {
            weighted_sum = weighted_sum + T::from_i32(c.close)? * T::from_usize(j + 1)?;
        }
        output[i] = weighted_sum / weight_sum;
    }

    Ok(candles.len())
}
