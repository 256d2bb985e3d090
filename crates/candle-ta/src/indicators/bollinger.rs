//! Bollinger Bands indicator.
//!
//! A volatility envelope around the SMA of the closes.
//!
//! # Formula
//!
//! ```text
//! Middle = SMA(close, period)
//! σ      = sqrt(Σ(close[j] - Middle)² / period)   (population standard deviation)
//! Upper  = Middle + multiplier × σ
//! Lower  = Middle - multiplier × σ
//! ```
//!
//! The middle band is written by [`sma_into`], so it is bit-identical to the
//! SMA output for the same period.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::bollinger::{bollinger, Bollinger};
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = [2, 4, 4, 4, 5, 5, 7, 9]
//!     .iter()
//!     .map(|&c| Candle::from_close(0, c))
//!     .collect();
//!
//! // Population σ of the full window is exactly 2
//! let bands = bollinger::<f64>(&candles, 8, 2.0).unwrap();
//! assert_eq!(bands.middle[7], 5.0);
//! assert_eq!(bands.upper[7], 9.0);
//! assert_eq!(bands.lower[7], 1.0);
//!
//! let same = Bollinger::new().period(8).compute::<f64>(&candles).unwrap();
//! assert_eq!(same, bands);
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::indicators::sma::{sma_into, sma_lookback};
use crate::traits::{validate_indicator_input, validate_output_len, SeriesElement};
use crate::utils::fill_warmup;

/// Returns the lookback period for Bollinger Bands (`period - 1`).
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    sma_lookback(period)
}

/// Returns the minimum number of candles required for Bollinger Bands.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    period
}

/// Upper, middle and lower bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// Middle band plus `multiplier × σ`.
    pub upper: Vec<T>,
    /// SMA of the closes.
    pub middle: Vec<T>,
    /// Middle band minus `multiplier × σ`.
    pub lower: Vec<T>,
}

impl<T> BollingerOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Computes Bollinger Bands.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than `period`
#[must_use = "this returns a Result with the Bollinger Bands, which should be used"]
pub fn bollinger<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    multiplier: T,
) -> Result<BollingerOutput<T>> {
    let n = candles.len();
    let mut upper = vec![T::zero(); n];
    let mut middle = vec![T::zero(); n];
    let mut lower = vec![T::zero(); n];
    bollinger_into(candles, period, multiplier, &mut middle, &mut upper, &mut lower)?;
    Ok(BollingerOutput {
        upper,
        middle,
        lower,
    })
}

/// Computes Bollinger Bands into caller-supplied buffers.
///
/// Buffers are taken in `middle, upper, lower` order.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`bollinger`], plus `Error::BufferTooSmall` if any buffer is
/// shorter than the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn bollinger_into<T: SeriesElement>(
    candles: &[Candle],
    period: usize,
    multiplier: T,
    middle: &mut [T],
    upper: &mut [T],
    lower: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, period, "bollinger")?;
    let n = candles.len();
    validate_output_len(middle, n, "bollinger")?;
    validate_output_len(upper, n, "bollinger")?;
    validate_output_len(lower, n, "bollinger")?;

    sma_into(candles, period, middle)?;

    let lookback = bollinger_lookback(period);
    fill_warmup(upper, lookback);
    fill_warmup(lower, lookback);

    let period_t = T::from_usize(period)?;
    for i in lookback..n {
        let mean = middle[i];
        let mut sum_sq = T::zero();
        for c in &candles[i + 1 - period..=i] {
            let diff = T::from_i32(c.close)? - mean;
            sum_sq = sum_sq + diff * diff;
        }
        let band = multiplier * (sum_sq / period_t).sqrt();
        upper[i] = mean + band;
        lower[i] = mean - band;
    }

    Ok(n)
}

// ==================== Configuration Type ====================

/// Bollinger Bands configuration with fluent builder API.
///
/// Defaults: `period = 20`, `multiplier = 2.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a configuration with the standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the averaging period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the band width in standard deviations.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Computes the bands with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`bollinger`]. Also fails with `Error::NumericConversion` if the
    /// multiplier cannot be represented as `T`.
    pub fn compute<T: SeriesElement>(&self, candles: &[Candle]) -> Result<BollingerOutput<T>> {
        bollinger(candles, self.period, T::from_f64(self.multiplier)?)
    }

    /// Computes the bands into caller-supplied buffers.
    ///
    /// # Errors
    ///
    /// See [`bollinger_into`].
    pub fn compute_into<T: SeriesElement>(
        &self,
        candles: &[Candle],
        middle: &mut [T],
        upper: &mut [T],
        lower: &mut [T],
    ) -> Result<usize> {
        bollinger_into(
            candles,
            self.period,
            T::from_f64(self.multiplier)?,
            middle,
            upper,
            lower,
        )
    }

    /// Returns the averaging period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the band width in standard deviations.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the warm-up length for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }
}
