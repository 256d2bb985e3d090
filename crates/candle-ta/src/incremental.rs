//! O(1) incremental indicator updates for streaming candles.
//!
//! When a live tick closes a new candle there is no need to rescan history:
//! SMA, EMA and RSI each advance from a handful of scalars. The core never
//! keeps those scalars; the caller owns them (one set per symbol, per
//! timeframe, per period) and passes them back on every update.
//!
//! Two layers are provided:
//!
//! - Flat functions ([`sma_incremental`], [`ema_incremental`],
//!   [`rsi_incremental`]) mirroring the C surface: previous state in,
//!   next indicator value out.
//! - State types ([`SmaState`], [`EmaState`], [`RsiState`]) that also return
//!   the next state, plus `seed` constructors that derive the state at the
//!   end of a candle series.
//!
//! The step helpers in this module ([`ema_step`], [`wilder_step`],
//! [`split_change`], [`rsi_from_averages`]) are the exact arithmetic the
//! batch indicators run for every index, so an incremental update fed the
//! batch state at index `i` reproduces the batch value at `i + 1` bit for bit.
//!
//! # Example
//!
//! ```
//! use candle_ta::incremental::{EmaState, SmaState};
//! use candle_ta::indicators::{ema, sma};
//! use candle_ta::Candle;
//!
//! let closes = [10, 11, 12, 13, 14, 15];
//! let candles: Vec<Candle> = closes.iter().map(|&c| Candle::from_close(0, c)).collect();
//!
//! // Batch over history...
//! let history = &candles[..5];
//! let sma_state = SmaState::seed(history, 3).unwrap();
//! let ema_state = EmaState::seed(history, 3).unwrap();
//!
//! // ...then one O(1) step per new candle.
//! let (_, next_sma) = sma_state.update(15.0, 12.0, 3);
//! let next_ema = ema_state.update(15.0, 3);
//!
//! assert_eq!(next_sma, sma::<f64>(&candles, 3).unwrap()[5]);
//! assert_eq!(next_ema.value, ema::<f64>(&candles, 3).unwrap()[5]);
//! ```

use crate::candle::Candle;
use crate::error::Result;
use crate::indicators::{ema::ema_running, rsi::rsi_running, sma::sma_running};
use crate::traits::SeriesElement;

/// Standard EMA smoothing constant `k = 2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `period` cannot be represented in `T`.
#[inline]
pub fn ema_smoothing<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

/// One EMA step: `value·k + prev·(1 − k)`.
#[inline]
#[must_use]
pub fn ema_step<T: SeriesElement>(prev: T, value: T, k: T) -> T {
    value * k + prev * (T::one() - k)
}

/// One step of Wilder's smoothing: `(prev·(period − 1) + value) / period`.
///
/// `period_t` and `period_minus_one_t` are the period and period − 1 already
/// converted to `T`, hoisted out of hot loops by the batch callers.
#[inline]
#[must_use]
pub fn wilder_step<T: SeriesElement>(prev: T, value: T, period_t: T, period_minus_one_t: T) -> T {
    (prev * period_minus_one_t + value) / period_t
}

/// Splits a close-to-close change into `(gain, loss)`, both non-negative.
#[inline]
#[must_use]
pub fn split_change<T: SeriesElement>(change: T) -> (T, T) {
    let zero = T::zero();
    if change > zero {
        (change, zero)
    } else if change < zero {
        (zero, -change)
    } else {
        (zero, zero)
    }
}

/// RSI from Wilder-smoothed averages.
///
/// `100` when `avg_loss` is zero (this includes a perfectly flat series),
/// otherwise `100 − 100 / (1 + avg_gain / avg_loss)`.
#[inline]
#[must_use]
pub fn rsi_from_averages<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    let hundred = T::hundred();
    if avg_loss == T::zero() {
        hundred
    } else {
        hundred - hundred / (T::one() + avg_gain / avg_loss)
    }
}

#[inline]
#[allow(clippy::cast_precision_loss)]
const fn period_f64(period: usize) -> f64 {
    period as f64
}

/// Next SMA value from the previous window sum.
///
/// `(prev_sum − old_close + new_close) / period`, where `old_close` is the
/// close leaving the window and `new_close` the one entering it.
///
/// `period` must be positive; zero yields a non-finite result.
///
/// # Example
///
/// ```
/// use candle_ta::incremental::sma_incremental;
///
/// // Window [11, 12, 13] -> [12, 13, 14]
/// assert_eq!(sma_incremental(36.0, 14.0, 11.0, 3), 13.0);
/// ```
#[inline]
#[must_use]
pub fn sma_incremental(prev_sum: f64, new_close: f64, old_close: f64, period: usize) -> f64 {
    (prev_sum - old_close + new_close) / period_f64(period)
}

/// Next EMA value from the previous EMA.
///
/// `period` must be positive.
///
/// # Example
///
/// ```
/// use candle_ta::incremental::ema_incremental;
///
/// // k = 0.5 for period 3
/// assert_eq!(ema_incremental(10.0, 14.0, 3), 12.0);
/// ```
#[inline]
#[must_use]
pub fn ema_incremental(prev_ema: f64, new_close: f64, period: usize) -> f64 {
    let k = 2.0 / (period_f64(period) + 1.0);
    ema_step(prev_ema, new_close, k)
}

/// Next RSI value from the previous average gain and loss.
///
/// Only the RSI is returned; use [`RsiState::update`] to also obtain the
/// averages needed for the following step.
///
/// # Example
///
/// ```
/// use candle_ta::incremental::rsi_incremental;
///
/// // No prior losses and a rising close keep RSI pinned at 100
/// assert_eq!(rsi_incremental(1.0, 0.0, 101.0, 100.0, 14), 100.0);
/// ```
#[inline]
#[must_use]
pub fn rsi_incremental(
    prev_avg_gain: f64,
    prev_avg_loss: f64,
    new_close: f64,
    prev_close: f64,
    period: usize,
) -> f64 {
    RsiState::new(prev_avg_gain, prev_avg_loss)
        .update(new_close, prev_close, period)
        .1
}

/// Rolling SMA state: the sum of the closes currently in the window.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmaState {
    /// Sum of the last `period` closes.
    pub sum: f64,
}

impl SmaState {
    /// Creates a state from a known window sum.
    #[inline]
    #[must_use]
    pub const fn new(sum: f64) -> Self {
        Self { sum }
    }

    /// Derives the window sum at the last candle of `candles`.
    ///
    /// Runs the same sliding-sum recurrence as [`sma`](crate::indicators::sma()).
    ///
    /// # Errors
    ///
    /// Same preconditions as [`sma`](crate::indicators::sma()).
    pub fn seed(candles: &[Candle], period: usize) -> Result<Self> {
        let sum = sma_running::<f64, _>(candles, period, |_, _| {})?;
        Ok(Self { sum })
    }

    /// The SMA value for this window.
    #[inline]
    #[must_use]
    pub fn average(&self, period: usize) -> f64 {
        self.sum / period_f64(period)
    }

    /// Slides the window by one candle and returns the new state and SMA.
    #[inline]
    #[must_use]
    pub fn update(self, new_close: f64, old_close: f64, period: usize) -> (Self, f64) {
        let next = Self {
            sum: self.sum - old_close + new_close,
        };
        (next, next.average(period))
    }
}

/// Rolling EMA state: the last EMA value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmaState {
    /// The most recent EMA value.
    pub value: f64,
}

impl EmaState {
    /// Creates a state from a known EMA value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Derives the EMA at the last candle of `candles`.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`ema`](crate::indicators::ema()).
    pub fn seed(candles: &[Candle], period: usize) -> Result<Self> {
        let value = ema_running::<f64, _>(candles, period, |_, _| {})?;
        Ok(Self { value })
    }

    /// Advances the EMA by one close.
    #[inline]
    #[must_use]
    pub fn update(self, new_close: f64, period: usize) -> Self {
        Self {
            value: ema_incremental(self.value, new_close, period),
        }
    }
}

/// Rolling RSI state: Wilder-smoothed average gain and average loss.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RsiState {
    /// Smoothed average gain.
    pub avg_gain: f64,
    /// Smoothed average loss, stored as a positive magnitude.
    pub avg_loss: f64,
}

impl RsiState {
    /// Creates a state from known averages.
    #[inline]
    #[must_use]
    pub const fn new(avg_gain: f64, avg_loss: f64) -> Self {
        Self { avg_gain, avg_loss }
    }

    /// Derives the averages at the last candle of `candles`.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`rsi`](crate::indicators::rsi()).
    pub fn seed(candles: &[Candle], period: usize) -> Result<Self> {
        let (avg_gain, avg_loss) = rsi_running::<f64, _>(candles, period, |_, _| {})?;
        Ok(Self { avg_gain, avg_loss })
    }

    /// The RSI implied by the current averages.
    #[inline]
    #[must_use]
    pub fn rsi(&self) -> f64 {
        rsi_from_averages(self.avg_gain, self.avg_loss)
    }

    /// Applies one close-to-close change and returns the new state and RSI.
    #[inline]
    #[must_use]
    pub fn update(self, new_close: f64, prev_close: f64, period: usize) -> (Self, f64) {
        let period_t = period_f64(period);
        let period_minus_one_t = period_f64(period.saturating_sub(1));
        let (gain, loss) = split_change(new_close - prev_close);
        let next = Self {
            avg_gain: wilder_step(self.avg_gain, gain, period_t, period_minus_one_t),
            avg_loss: wilder_step(self.avg_loss, loss, period_t, period_minus_one_t),
        };
        (next, next.rsi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{ema, rsi, sma};

    fn closes(values: &[i32]) -> Vec<Candle> {
        values
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::from_close(i as i64, c))
            .collect()
    }

    #[test]
    fn test_ema_smoothing_constant() {
        let k: f64 = ema_smoothing(3).unwrap();
        assert!((k - 0.5).abs() < 1e-15);
        let k: f64 = ema_smoothing(1).unwrap();
        assert!((k - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_split_change() {
        assert_eq!(split_change(3.0_f64), (3.0, 0.0));
        assert_eq!(split_change(-2.0_f64), (0.0, 2.0));
        assert_eq!(split_change(0.0_f64), (0.0, 0.0));
    }

    #[test]
    fn test_rsi_from_averages_bounds() {
        assert_eq!(rsi_from_averages(0.0_f64, 0.0), 100.0);
        assert_eq!(rsi_from_averages(5.0_f64, 0.0), 100.0);
        assert_eq!(rsi_from_averages(0.0_f64, 5.0), 0.0);
        assert!((rsi_from_averages(1.0_f64, 1.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_sma_incremental_formula() {
        assert!((sma_incremental(30.0, 13.0, 10.0, 3) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_sma_state_matches_batch_every_index() {
        let candles = closes(&[10, 13, 9, 15, 21, 8, 11, 17, 16, 12]);
        let period = 4;
        let batch: Vec<f64> = sma(&candles, period).unwrap();

        for i in (period - 1)..candles.len() - 1 {
            let state = SmaState::seed(&candles[..=i], period).unwrap();
            let new_close = f64::from(candles[i + 1].close);
            let old_close = f64::from(candles[i + 1 - period].close);
            let (_, next) = state.update(new_close, old_close, period);
            assert_eq!(next, batch[i + 1], "mismatch at index {}", i + 1);
            assert_eq!(
                sma_incremental(state.sum, new_close, old_close, period),
                batch[i + 1]
            );
        }
    }

    #[test]
    fn test_ema_state_matches_batch_every_index() {
        let candles = closes(&[10, 13, 9, 15, 21, 8, 11, 17, 16, 12]);
        let period = 3;
        let batch: Vec<f64> = ema(&candles, period).unwrap();

        for i in (period - 1)..candles.len() - 1 {
            let state = EmaState::seed(&candles[..=i], period).unwrap();
            assert_eq!(state.value, batch[i]);
            let next = state.update(f64::from(candles[i + 1].close), period);
            assert_eq!(next.value, batch[i + 1], "mismatch at index {}", i + 1);
        }
    }

    #[test]
    fn test_rsi_state_matches_batch_every_index() {
        let candles = closes(&[44, 45, 43, 46, 47, 45, 44, 48, 49, 47, 46, 50]);
        let period = 5;
        let batch: Vec<f64> = rsi(&candles, period).unwrap();

        for i in period..candles.len() - 1 {
            let state = RsiState::seed(&candles[..=i], period).unwrap();
            assert_eq!(state.rsi(), batch[i]);
            let new_close = f64::from(candles[i + 1].close);
            let prev_close = f64::from(candles[i].close);
            let (_, next) = state.update(new_close, prev_close, period);
            assert_eq!(next, batch[i + 1], "mismatch at index {}", i + 1);
            assert_eq!(
                rsi_incremental(state.avg_gain, state.avg_loss, new_close, prev_close, period),
                batch[i + 1]
            );
        }
    }

    #[test]
    fn test_rsi_state_chain_stays_in_range() {
        let mut state = RsiState::new(0.0, 0.0);
        let mut prev = 100.0;
        for close in [101.0, 99.0, 98.0, 103.0, 103.0, 90.0] {
            let (next, value) = state.update(close, prev, 3);
            assert!((0.0..=100.0).contains(&value));
            state = next;
            prev = close;
        }
    }

    #[test]
    fn test_seed_propagates_errors() {
        let candles = closes(&[1, 2]);
        assert!(SmaState::seed(&candles, 3).is_err());
        assert!(EmaState::seed(&candles, 0).is_err());
        assert!(RsiState::seed(&candles, 2).is_err());
    }
}
