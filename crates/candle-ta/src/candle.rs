//! The OHLCV candle record.
//!
//! [`Candle`] is the unit of input for every indicator in this crate. Its
//! memory layout is part of the public ABI: hosts on the other side of the
//! C boundary build arrays of this exact record and hand them over by pointer.
//!
//! # Layout
//!
//! ```text
//! offset  size  field
//!      0     8  timestamp  (i64, opaque monotonic time value)
//!      8     4  open       (i32, fixed-point price units)
//!     12     4  high
//!     16     4  low
//!     20     4  close
//!     24     8  volume     (i64)
//! total 32 bytes, alignment 8, no padding
//! ```
//!
//! Prices are integers in a fixed-point scale chosen by the caller. Every
//! indicator converts them to floating point before doing arithmetic, so sums
//! such as `high + low + close` cannot overflow.

use crate::error::Result;
use crate::traits::SeriesElement;

/// One OHLCV sample.
///
/// # Example
///
/// ```
/// use candle_ta::Candle;
///
/// let c = Candle::new(0, 100, 110, 95, 105, 1_000);
/// assert!(c.is_bullish());
/// assert_eq!(c.body_size(), 5);
/// assert!((c.typical_price::<f64>().unwrap() - 103.333_333).abs() < 1e-5);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Candle {
    /// Opaque monotonic time value supplied by the caller.
    pub timestamp: i64,
    /// Opening price.
    pub open: i32,
    /// Highest price of the interval.
    pub high: i32,
    /// Lowest price of the interval.
    pub low: i32,
    /// Closing price.
    pub close: i32,
    /// Traded volume.
    pub volume: i64,
}

const _: () = assert!(std::mem::size_of::<Candle>() == 32);
const _: () = assert!(std::mem::align_of::<Candle>() == 8);

impl Candle {
    /// Creates a candle from its raw fields.
    #[inline]
    #[must_use]
    pub const fn new(timestamp: i64, open: i32, high: i32, low: i32, close: i32, volume: i64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a candle whose open, high, low and close all equal `close`.
    ///
    /// Handy for close-only series.
    #[inline]
    #[must_use]
    pub const fn from_close(timestamp: i64, close: i32) -> Self {
        Self::new(timestamp, close, close, close, close, 0)
    }

    /// Typical price `(high + low + close) / 3`, summed in `T`.
    ///
    /// # Errors
    ///
    /// `Error::NumericConversion` if a price cannot be represented as `T`.
    #[inline]
    pub fn typical_price<T: SeriesElement>(&self) -> Result<T> {
        let three = T::from_usize(3)?;
        Ok((T::from_i32(self.high)? + T::from_i32(self.low)? + T::from_i32(self.close)?) / three)
    }

    /// True range against the previous candle's close.
    ///
    /// `max(high - low, |high - prev_close|, |low - prev_close|)`
    ///
    /// # Errors
    ///
    /// `Error::NumericConversion` if a price cannot be represented as `T`.
    #[inline]
    pub fn true_range<T: SeriesElement>(&self, prev_close: i32) -> Result<T> {
        let high = T::from_i32(self.high)?;
        let low = T::from_i32(self.low)?;
        let prev = T::from_i32(prev_close)?;
        Ok((high - low).max((high - prev).abs()).max((low - prev).abs()))
    }

    /// Absolute distance between open and close.
    #[inline]
    #[must_use]
    pub fn body_size(&self) -> i64 {
        (i64::from(self.close) - i64::from(self.open)).abs()
    }

    /// Distance from the top of the body to the high.
    #[inline]
    #[must_use]
    pub fn upper_shadow(&self) -> i64 {
        i64::from(self.high) - i64::from(self.open.max(self.close))
    }

    /// Distance from the bottom of the body to the low.
    #[inline]
    #[must_use]
    pub fn lower_shadow(&self) -> i64 {
        i64::from(self.open.min(self.close)) - i64::from(self.low)
    }

    /// Percentage change from open to close, `0.0` when the open is zero.
    #[inline]
    #[must_use]
    pub fn change_rate(&self) -> f64 {
        if self.open == 0 {
            0.0
        } else {
            (f64::from(self.close) - f64::from(self.open)) / f64::from(self.open) * 100.0
        }
    }

    /// Returns true when the candle closed above its open.
    #[inline]
    #[must_use]
    pub const fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_layout_matches_abi() {
        assert_eq!(size_of::<Candle>(), 32);
        assert_eq!(align_of::<Candle>(), 8);
        assert_eq!(offset_of!(Candle, timestamp), 0);
        assert_eq!(offset_of!(Candle, open), 8);
        assert_eq!(offset_of!(Candle, high), 12);
        assert_eq!(offset_of!(Candle, low), 16);
        assert_eq!(offset_of!(Candle, close), 20);
        assert_eq!(offset_of!(Candle, volume), 24);
    }

    #[test]
    fn test_typical_price_no_overflow() {
        let c = Candle::new(0, i32::MAX, i32::MAX, i32::MAX, i32::MAX, 0);
        let tp: f64 = c.typical_price().unwrap();
        assert!((tp - f64::from(i32::MAX)).abs() < 1e-6);
        let tp32: f32 = c.typical_price().unwrap();
        assert!(tp32.is_finite());
    }

    #[test]
    fn test_true_range_gap_up() {
        // Gap up: |high - prev_close| dominates
        let c = Candle::new(0, 120, 125, 118, 122, 0);
        assert!((c.true_range::<f64>(100).unwrap() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_true_range_gap_down() {
        let c = Candle::new(0, 80, 85, 78, 82, 0);
        assert!((c.true_range::<f64>(100).unwrap() - 22.0).abs() < 1e-12);
    }

    #[test]
    fn test_true_range_inside_bar() {
        let c = Candle::new(0, 100, 105, 95, 101, 0);
        assert!((c.true_range::<f64>(100).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_shadows_and_body() {
        let bear = Candle::new(0, 110, 115, 90, 100, 0);
        assert!(!bear.is_bullish());
        assert_eq!(bear.body_size(), 10);
        assert_eq!(bear.upper_shadow(), 5);
        assert_eq!(bear.lower_shadow(), 10);
    }

    #[test]
    fn test_change_rate() {
        let c = Candle::new(0, 200, 210, 190, 210, 0);
        assert!((c.change_rate() - 5.0).abs() < 1e-12);
        assert!(Candle::new(0, 0, 1, 0, 1, 0).change_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_close() {
        let c = Candle::from_close(7, 42);
        assert_eq!(c.timestamp, 7);
        assert_eq!((c.open, c.high, c.low, c.close), (42, 42, 42, 42));
        assert_eq!(c.volume, 0);
    }
}
