//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! # Formula
//!
//! ```text
//! MACD[i]      = EMA(close, fast)[i] - EMA(close, slow)[i]
//! Signal[i]    = 0                                   for i < slow - 1
//! Signal[slow-1] = MACD[slow-1]
//! Signal[i]    = MACD[i]·k + Signal[i-1]·(1 - k)     k = 2 / (signal + 1)
//! Histogram[i] = MACD[i] - Signal[i]
//! ```
//!
//! Both EMAs carry their own warm-up zeros and the MACD line is their
//! difference at every index. With `fast < slow`, indices
//! `fast-1..slow-1` therefore hold the bare fast EMA.
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::macd::Macd;
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = (0..60).map(|i| Candle::from_close(i, 100 + i as i32)).collect();
//! let out = Macd::default().compute::<f64>(&candles).unwrap();
//!
//! assert_eq!(out.signal[24], 0.0);
//! assert_eq!(out.signal[25], out.macd[25]);
//! assert!(out.macd[59] > 0.0); // uptrend: fast EMA above slow EMA
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::incremental::{ema_smoothing, ema_step};
use crate::indicators::ema::ema_into;
use crate::traits::{validate_output_len, validate_period, SeriesElement, ValidatedInput};
use crate::utils::fill_warmup;

/// Returns the number of warm-up zeros in the signal line (`slow - 1`).
#[inline]
#[must_use]
pub const fn macd_signal_lookback(slow_period: usize) -> usize {
    if slow_period == 0 {
        0
    } else {
        slow_period - 1
    }
}

/// Returns the minimum number of candles required (`max(fast, slow)`).
#[inline]
#[must_use]
pub const fn macd_min_len(fast_period: usize, slow_period: usize) -> usize {
    if fast_period > slow_period {
        fast_period
    } else {
        slow_period
    }
}

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// Fast EMA minus slow EMA.
    pub macd: Vec<T>,
    /// EMA of the MACD line.
    pub signal: Vec<T>,
    /// MACD minus signal.
    pub histogram: Vec<T>,
}

impl<T> MacdOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// Computes MACD.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero
/// - `Error::EmptyInput` if there are no candles
/// - `Error::InsufficientData` if there are fewer candles than the fast or
///   slow period
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    let n = candles.len();
    let mut macd = vec![T::zero(); n];
    let mut signal = vec![T::zero(); n];
    let mut histogram = vec![T::zero(); n];
    macd_into(
        candles,
        fast_period,
        slow_period,
        signal_period,
        &mut macd,
        &mut signal,
        &mut histogram,
    )?;
    Ok(MacdOutput {
        macd,
        signal,
        histogram,
    })
}

/// Computes MACD into caller-supplied buffers.
///
/// # Returns
///
/// The number of elements processed (`candles.len()`).
///
/// # Errors
///
/// Same as [`macd`], plus `Error::BufferTooSmall` if any buffer is shorter
/// than the candle series.
#[must_use = "this returns a Result with the count of processed elements"]
pub fn macd_into<T: SeriesElement>(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    macd_output: &mut [T],
    signal_output: &mut [T],
    histogram_output: &mut [T],
) -> Result<usize> {
    validate_period(fast_period)?;
    validate_period(slow_period)?;
    validate_period(signal_period)?;
    candles.validate_not_empty()?;
    candles.validate_min_length(macd_min_len(fast_period, slow_period), "macd")?;

    let n = candles.len();
    validate_output_len(macd_output, n, "macd")?;
    validate_output_len(signal_output, n, "macd")?;
    validate_output_len(histogram_output, n, "macd")?;

    let mut fast = vec![T::zero(); n];
    let mut slow = vec![T::zero(); n];
    ema_into(candles, fast_period, &mut fast)?;
    ema_into(candles, slow_period, &mut slow)?;

    for ((out, f), s) in macd_output[..n].iter_mut().zip(&fast).zip(&slow) {
        *out = *f - *s;
    }

    let seed = macd_signal_lookback(slow_period);
    let k = ema_smoothing::<T>(signal_period)?;
    fill_warmup(signal_output, seed);
    signal_output[seed] = macd_output[seed];
    for i in (seed + 1)..n {
        signal_output[i] = ema_step(signal_output[i - 1], macd_output[i], k);
    }

    for i in 0..n {
        histogram_output[i] = macd_output[i] - signal_output[i];
    }

    Ok(n)
}

// ==================== Configuration Type ====================

/// MACD configuration with fluent builder API.
///
/// Defaults: `fast = 12`, `slow = 26`, `signal = 9`.
///
/// # Example
///
/// ```
/// use candle_ta::indicators::macd::Macd;
///
/// let cfg = Macd::new().fast_period(5).slow_period(35).signal_period(5);
/// assert_eq!(cfg.get_slow_period(), 35);
/// assert_eq!(cfg.min_len(), 35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// Creates a configuration with the standard parameters (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast_period = period;
        self
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow_period = period;
        self
    }

    /// Sets the signal smoothing period.
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Computes MACD with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`macd`].
    pub fn compute<T: SeriesElement>(&self, candles: &[Candle]) -> Result<MacdOutput<T>> {
        macd(candles, self.fast_period, self.slow_period, self.signal_period)
    }

    /// Computes MACD into caller-supplied buffers.
    ///
    /// # Errors
    ///
    /// See [`macd_into`].
    pub fn compute_into<T: SeriesElement>(
        &self,
        candles: &[Candle],
        macd_output: &mut [T],
        signal_output: &mut [T],
        histogram_output: &mut [T],
    ) -> Result<usize> {
        macd_into(
            candles,
            self.fast_period,
            self.slow_period,
            self.signal_period,
            macd_output,
            signal_output,
            histogram_output,
        )
    }

    /// Returns the fast EMA period.
    #[must_use]
    pub const fn get_fast_period(&self) -> usize {
        self.fast_period
    }

    /// Returns the slow EMA period.
    #[must_use]
    pub const fn get_slow_period(&self) -> usize {
        self.slow_period
    }

    /// Returns the signal smoothing period.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal_period
    }

    /// Returns the minimum number of candles for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        macd_min_len(self.fast_period, self.slow_period)
    }
}
