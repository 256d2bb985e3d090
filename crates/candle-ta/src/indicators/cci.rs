//! Commodity Channel Index (CCI) indicator.
//!
//! Measures how far the typical price sits from its moving average, scaled
//! by the mean absolute deviation so that roughly 70–80% of values fall
//! inside ±100.
//!
//! # Formula
//!
//! ```text
//! TP[i]      = (High[i] + Low[i] + Close[i]) / 3
//! MeanTP[i]  = mean(TP[i-period+1..=i])
//! MeanDev[i] = mean(|TP[j] - MeanTP[i]|) over the same window
//! CCI[i]     = (TP[i] - MeanTP[i]) / (0.015 × MeanDev[i])   (0 when MeanDev == 0)
//! ```
//!
//! The typical-price series is materialized once per call, so there is no
//! upper bound on `period`.

use crate::candle::Candle;
use crate::error::Result;
use crate::traits::{validate_indicator_input, validate_output_len, SeriesElement};
use crate::utils::fill_warmup;

/// Lambert's constant.
pub const CCI_SCALE: f64 = 0.015;

/// Returns the lookback period for CCI (`period - 1`).
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum number of candles required for CCI.
#[inline]
#[must_use]
pub const fn cci_min_len(period: usize) -> usize {
    period
}

/// Computes the Commodity Channel Index.
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
/// use candle_ta::indicators::cci::cci;
/// use candle_ta::Candle;
///
/// let candles: Vec<Candle> = (0..10).map(|i| Candle::new(i, 10, 12 + i as i32, 8, 10 + i as i32, 0)).collect();
/// let result: Vec<f64> = cci(&candles, 5).unwrap();
///
/// assert_eq!(result[3], 0.0);
/// assert!(result[9] > 0.0); // rising typical price
/// ```
#[must_use = "this returns a Result with the CCI values, which should be used"]
pub fn cci<T: SeriesElement>(candles: &[Candle], period: usize) -> Result<Vec<T>> {
    let mut result = vec![T::zero(); candles.len()];
    cci_into(candles, period, &mut result)?;
    Ok(result)
}

/// Computes the Commodity Channel Index into a caller-supplied buffer.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`cci`], plus `Error::BufferTooSmall` if `output` is shorter than
/// the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn cci_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, period, "cci")?;
    validate_output_len(output, candles.len(), "cci")?;

    let typical = typical_prices::<T>(candles)?;
    let period_t = T::from_usize(period)?;
    let scale = T::from_f64(CCI_SCALE)?;

    fill_warmup(output, cci_lookback(period));

    for i in cci_lookback(period)..candles.len() {
        let window = &typical[i + 1 - period..=i];

        let mut sum = T::zero();
        for tp in window {
            sum = sum + *tp;
        }
        let mean = sum / period_t;

        let mut deviation = T::zero();
        for tp in window {
            deviation = deviation + (*tp - mean).abs();
        }
        let mean_deviation = deviation / period_t;

        output[i] = if mean_deviation > T::zero() {
            (typical[i] - mean) / (scale * mean_deviation)
        } else {
            T::zero()
        };
    }

    Ok(candles.len())
}

/// Typical price of every candle, in `T`.
fn typical_prices<T: SeriesElement>(candles: &[Candle]) -> Result<Vec<T>> {
    candles.iter().map(Candle::typical_price::<T>).collect()
}
