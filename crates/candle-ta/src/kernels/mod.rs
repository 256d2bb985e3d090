//! Shared computation kernels.
//!
//! # Kernels
//!
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min, used by
//!   the Stochastic oscillator to find the highest high and lowest low of
//!   each `%K` window.

pub mod rolling_extrema;

pub use rolling_extrema::{rolling_max, rolling_min, MonotonicDeque};
