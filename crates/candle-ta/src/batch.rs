//! Multi-series batch processing.
//!
//! Runs one indicator over many independent candle series, typically one per
//! symbol or timeframe. Series are processed sequentially unless the
//! `parallel` feature is enabled and the batch reaches the configured
//! threshold, in which case Rayon spreads them across its thread pool.
//!
//! Results come back in input order. The first failing series aborts the
//! batch with its error.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! candle-ta = { version = "1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use candle_ta::batch::BatchProcessor;
//! use candle_ta::indicators::sma;
//! use candle_ta::Candle;
//!
//! let up: Vec<Candle> = (1..=5).map(|c| Candle::from_close(0, c)).collect();
//! let down: Vec<Candle> = (1..=5).rev().map(|c| Candle::from_close(0, c)).collect();
//! let series = vec![up, down];
//!
//! let results: Vec<Vec<f64>> = BatchProcessor::new()
//!     .process(&series, |s| sma(s, 3))
//!     .unwrap();
//!
//! assert_eq!(results[0][4], 4.0);
//! assert_eq!(results[1][4], 2.0);
//! ```

use crate::candle::Candle;
use crate::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of series at which parallel processing kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Batch processor for multi-series indicator computation.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series required to use parallel processing.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a new batch processor with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Below this threshold series are processed sequentially.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process<F, R>(&self, series: &[Vec<Candle>], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            series.iter().map(|s| indicator_fn(s)).collect()
        } else {
            series.par_iter().map(|s| indicator_fn(s)).collect()
        }
    }

    /// Applies `indicator_fn` to every series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<F, R>(&self, series: &[Vec<Candle>], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R>,
    {
        series.iter().map(|s| indicator_fn(s)).collect()
    }

    /// Like [`process`](Self::process), over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process_refs<F, R>(&self, series: &[&[Candle]], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            series.iter().map(|s| indicator_fn(s)).collect()
        } else {
            series.par_iter().map(|s| indicator_fn(s)).collect()
        }
    }

    /// Like [`process`](Self::process), over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process_refs<F, R>(&self, series: &[&[Candle]], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[Candle]) -> Result<R>,
    {
        series.iter().map(|s| indicator_fn(s)).collect()
    }
}

/// Shorthand for `BatchProcessor::new().process(series, indicator_fn)`.
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(feature = "parallel")]
pub fn process_batch<F, R>(series: &[Vec<Candle>], indicator_fn: F) -> Result<Vec<R>>
where
    F: Fn(&[Candle]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Shorthand for `BatchProcessor::new().process(series, indicator_fn)`.
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<F, R>(series: &[Vec<Candle>], indicator_fn: F) -> Result<Vec<R>>
where
    F: Fn(&[Candle]) -> Result<R>,
{
    BatchProcessor::new().process(series, indicator_fn)
}
