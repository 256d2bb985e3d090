//! candle-ta: technical indicators over fixed-point OHLCV candles
//!
//! Prices arrive as integer [`Candle`] records. The crate computes trend,
//! momentum and volatility indicators over them in two modes:
//!
//! - **Batch**: recompute a full series in one pass ([`indicators`]).
//! - **Incremental**: advance SMA, EMA or RSI by one candle in O(1) from
//!   caller-held state ([`incremental`]).
//!
//! Both modes share the same step arithmetic, so switching from batch to
//! incremental at any index reproduces the batch values exactly.
//!
//! # Features
//!
//! - **Generics**: works with both `f32` and `f64` outputs
//! - **C layout**: [`Candle`] is `#[repr(C)]` and can be passed straight from
//!   a foreign host (see the `candle-ta-ffi` crate)
//! - **Parallel batching**: optional Rayon support behind the `parallel`
//!   feature ([`batch`])
//!
//! # Quick Start
//!
//! ```
//! use candle_ta::prelude::*;
//!
//! let candles: Vec<Candle> = [10, 11, 12, 13, 14]
//!     .iter()
//!     .map(|&c| Candle::from_close(0, c))
//!     .collect();
//! let result: Vec<f64> = sma(&candles, 3).unwrap();
//!
//! // First 2 values are warm-up zeros
//! assert_eq!(result[..2], [0.0, 0.0]);
//! assert_eq!(result[2], 11.0);
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//! - [`indicators::wma()`]: Weighted Moving Average
//!
//! ## Momentum
//! - [`indicators::rsi()`]: Relative Strength Index
//! - [`indicators::macd()`]: Moving Average Convergence Divergence
//! - [`indicators::stochastic()`]: Stochastic Oscillator
//! - [`indicators::cci()`]: Commodity Channel Index
//!
//! ## Volatility
//! - [`indicators::atr()`]: Average True Range
//! - [`indicators::bollinger()`]: Bollinger Bands
//!
//! # Error Handling
//!
//! All indicator functions return [`Result<T, Error>`]:
//!
//! ```
//! use candle_ta::prelude::*;
//!
//! // Period too long for data
//! let short: Vec<Candle> = (1..=2).map(|c| Candle::from_close(0, c)).collect();
//! assert!(sma::<f64>(&short, 10).is_err());
//!
//! // Empty data
//! assert!(matches!(sma::<f64>(&[], 5), Err(Error::EmptyInput)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod candle;
pub mod error;
pub mod incremental;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;
pub mod version;

// Re-export commonly used types at crate root
pub use candle::Candle;
pub use error::{Error, Result};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, count_warmup_prefix, EPSILON, LOOSE_EPSILON};
pub use version::{version, version_cstr};
