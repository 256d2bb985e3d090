//! Rolling extrema using a monotonic deque for O(n) rolling max/min.
//!
//! # Algorithm
//!
//! The deque holds `(index, value)` pairs whose values are monotonically
//! ordered:
//! - for rolling max, values are decreasing from front to back
//! - for rolling min, values are increasing from front to back
//!
//! The front is always the extremum of the current window. Each index enters
//! and leaves the deque at most once, so a full pass is O(n) instead of the
//! O(n·k) of a naive rescan, and the result is exactly equal to the naive scan.
//!
//! # Example
//!
//! ```
//! use candle_ta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let max = rolling_max(&data, 3).unwrap();
//! assert_eq!(max[2], Some(4)); // max of [3, 1, 4]
//! assert_eq!(max[5], Some(9)); // max of [1, 5, 9]
//!
//! let min = rolling_min(&data, 3).unwrap();
//! assert_eq!(min[0], None); // still warming up
//! assert_eq!(min[5], Some(1)); // min of [1, 5, 9]
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::traits::validate_period;

/// A monotonic deque tracking the extremum of a sliding window.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<V> {
    deque: VecDeque<(usize, V)>,
    period: usize,
}

impl<V: Copy + PartialOrd> MonotonicDeque<V> {
    /// Creates a new monotonic deque for a window of `period` elements.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of entries currently in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Pushes the value at `index` while tracking the window maximum.
    ///
    /// Indices must be pushed in increasing order.
    #[inline]
    pub fn push_max(&mut self, index: usize, value: V) {
        while matches!(self.deque.back(), Some(&(_, back)) if value >= back) {
            self.deque.pop_back();
        }
        self.deque.push_back((index, value));
        self.remove_expired(index);
    }

    /// Pushes the value at `index` while tracking the window minimum.
    ///
    /// Indices must be pushed in increasing order.
    #[inline]
    pub fn push_min(&mut self, index: usize, value: V) {
        while matches!(self.deque.back(), Some(&(_, back)) if value <= back) {
            self.deque.pop_back();
        }
        self.deque.push_back((index, value));
        self.remove_expired(index);
    }

    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index >= self.period {
            let window_start = current_index + 1 - self.period;
            while matches!(self.deque.front(), Some(&(idx, _)) if idx < window_start) {
                self.deque.pop_front();
            }
        }
    }

    /// Returns the extremum of the current window, `None` when empty.
    #[inline]
    #[must_use]
    pub fn extremum(&self) -> Option<V> {
        self.deque.front().map(|&(_, value)| value)
    }
}

fn validate_extrema_input<V>(data: &[V], period: usize) -> Result<()> {
    validate_period(period)?;
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    if data.len() < period {
        return Err(Error::InsufficientData {
            required: period,
            actual: data.len(),
            indicator: "rolling_extrema",
        });
    }
    Ok(())
}

/// Computes the rolling maximum, `None` for the first `period - 1` indices.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data` is shorter than `period`
pub fn rolling_max<V: Copy + PartialOrd>(data: &[V], period: usize) -> Result<Vec<Option<V>>> {
    validate_extrema_input(data, period)?;
    let mut deque = MonotonicDeque::new(period);
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            deque.push_max(i, value);
            if i + 1 >= period {
                deque.extremum()
            } else {
                None
            }
        })
        .collect())
}

/// Computes the rolling minimum, `None` for the first `period - 1` indices.
///
/// # Errors
///
/// Same as [`rolling_max`].
pub fn rolling_min<V: Copy + PartialOrd>(data: &[V], period: usize) -> Result<Vec<Option<V>>> {
    validate_extrema_input(data, period)?;
    let mut deque = MonotonicDeque::new(period);
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            deque.push_min(i, value);
            if i + 1 >= period {
                deque.extremum()
            } else {
                None
            }
        })
        .collect())
}
