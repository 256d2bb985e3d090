//! Stochastic Oscillator (%K and %D).
//!
//! Locates the close within the high–low range of the last `k_period`
//! candles.
//!
//! # Formula
//!
//! ```text
//! HH[i] = max(high[i-k+1..=i])
//! LL[i] = min(low[i-k+1..=i])
//! %K[i] = (close[i] - LL[i]) / (HH[i] - LL[i]) × 100   (0 when HH == LL)
//! %D[i] = mean(%K[i-d+1..=i])
//! ```
//!
//! # Warm-up
//!
//! - %K: the first `k_period - 1` values are `0.0`
//! - %D: the first `k_period - 1 + d_period - 1` values are `0.0`; when that
//!   exceeds the series, the whole %D series is `0.0`
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::stochastic::stochastic;
//! use candle_ta::Candle;
//!
//! let candles = vec![
//!     Candle::new(0, 10, 12, 8, 11, 0),
//!     Candle::new(1, 11, 14, 10, 13, 0),
//!     Candle::new(2, 13, 15, 11, 15, 0),
//!     Candle::new(3, 15, 16, 12, 12, 0),
//! ];
//! let out = stochastic::<f64>(&candles, 3, 2).unwrap();
//!
//! // Window [8..15], close 15 -> top of the range
//! assert_eq!(out.k[2], 100.0);
//! assert_eq!(out.d[2], 0.0); // %D still warming up
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::kernels::rolling_extrema::MonotonicDeque;
use crate::traits::{validate_indicator_input, validate_output_len, validate_period, SeriesElement};
use crate::utils::fill_warmup;

/// Returns the number of warm-up zeros in %K (`k_period - 1`).
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize) -> usize {
    if k_period == 0 {
        0
    } else {
        k_period - 1
    }
}

/// Returns the number of warm-up zeros in %D (`k_period - 1 + d_period - 1`,
/// saturating).
///
/// # Example
///
/// ```
/// use candle_ta::indicators::stochastic::stochastic_d_lookback;
///
/// assert_eq!(stochastic_d_lookback(14, 3), 15);
/// ```
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(k_period: usize, d_period: usize) -> usize {
    let d = if d_period == 0 { 0 } else { d_period - 1 };
    stochastic_k_lookback(k_period).saturating_add(d)
}

/// Returns the minimum number of candles required (`k_period`).
///
/// %D may still be entirely warm-up at this length.
#[inline]
#[must_use]
pub const fn stochastic_min_len(k_period: usize) -> usize {
    k_period
}

/// %K and %D lines of the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// The %K line.
    pub k: Vec<T>,
    /// The %D line, a simple average of %K.
    pub d: Vec<T>,
}

impl<T> StochasticOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.k.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }
}

/// Computes the Stochastic Oscillator.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `k_period` or `d_period` is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than `k_period`
#[must_use = "this returns a Result with the Stochastic output, which should be used"]
pub fn stochastic<T: SeriesElement>(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
) -> Result<StochasticOutput<T>> {
    let mut k = vec![T::zero(); candles.len()];
    let mut d = vec![T::zero(); candles.len()];
    stochastic_into(candles, k_period, d_period, &mut k, &mut d)?;
    Ok(StochasticOutput { k, d })
}

/// Computes the Stochastic Oscillator into caller-supplied buffers.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`stochastic`], plus `Error::BufferTooSmall` if either buffer is
/// shorter than the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn stochastic_into<T: SeriesElement>(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
    k_output: &mut [T],
    d_output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(candles, k_period, "stochastic")?;
    validate_period(d_period)?;
    let n = candles.len();
    validate_output_len(k_output, n, "stochastic")?;
    validate_output_len(d_output, n, "stochastic")?;

    let hundred = T::hundred();
    let k_lookback = stochastic_k_lookback(k_period);
    fill_warmup(k_output, k_lookback);

    let mut highest = MonotonicDeque::new(k_period);
    let mut lowest = MonotonicDeque::new(k_period);

    for (i, c) in candles.iter().enumerate() {
        highest.push_max(i, c.high);
        lowest.push_min(i, c.low);
        if i < k_lookback {
            continue;
        }

        // Both deques hold at least the current candle here
        let hh = highest.extremum().unwrap_or(c.high);
        let ll = lowest.extremum().unwrap_or(c.low);
        let low = T::from_i32(ll)?;
        let range = T::from_i32(hh)? - low;
        k_output[i] = if range > T::zero() {
            (T::from_i32(c.close)? - low) / range * hundred
        } else {
            T::zero()
        };
    }

    let d_lookback = stochastic_d_lookback(k_period, d_period);
    fill_warmup(d_output, d_lookback);

    let d_period_t = T::from_usize(d_period)?;
    for i in d_lookback..n {
        let mut sum = T::zero();
        for value in &k_output[i + 1 - d_period..=i] {
            sum = sum + *value;
        }
        d_output[i] = sum / d_period_t;
    }

    Ok(n)
}

// ==================== Configuration Type ====================

/// Stochastic Oscillator configuration with fluent builder API.
///
/// Defaults: `k_period = 14`, `d_period = 3`.
///
/// # Example
///
/// ```
/// use candle_ta::indicators::stochastic::Stochastic;
/// use candle_ta::Candle;
///
/// let candles: Vec<Candle> = (0..30).map(|i| Candle::new(i, 100, 105 + (i as i32 % 4), 95, 101, 0)).collect();
///
/// let default = Stochastic::default().compute::<f64>(&candles).unwrap();
/// let fast = Stochastic::new().k_period(5).d_period(1).compute::<f64>(&candles).unwrap();
/// assert_eq!(default.len(), fast.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
        }
    }
}

impl Stochastic {
    /// Creates a configuration with the standard parameters (14, 3).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the %K lookback.
    #[must_use]
    pub const fn k_period(mut self, k_period: usize) -> Self {
        self.k_period = k_period;
        self
    }

    /// Sets the %D smoothing length.
    #[must_use]
    pub const fn d_period(mut self, d_period: usize) -> Self {
        self.d_period = d_period;
        self
    }

    /// Computes the oscillator with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`stochastic`].
    pub fn compute<T: SeriesElement>(&self, candles: &[Candle]) -> Result<StochasticOutput<T>> {
        stochastic(candles, self.k_period, self.d_period)
    }

    /// Computes the oscillator into caller-supplied buffers.
    ///
    /// # Errors
    ///
    /// See [`stochastic_into`].
    pub fn compute_into<T: SeriesElement>(
        &self,
        candles: &[Candle],
        k_output: &mut [T],
        d_output: &mut [T],
    ) -> Result<usize> {
        stochastic_into(candles, self.k_period, self.d_period, k_output, d_output)
    }

    /// Returns the %K lookback.
    #[must_use]
    pub const fn get_k_period(&self) -> usize {
        self.k_period
    }

    /// Returns the %D smoothing length.
    #[must_use]
    pub const fn get_d_period(&self) -> usize {
        self.d_period
    }

    /// Returns the %D warm-up length for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        stochastic_d_lookback(self.k_period, self.d_period)
    }
}
