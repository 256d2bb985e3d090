//! Batch indicators over candle series.
//!
//! Every indicator reads a full `&[Candle]` and writes one value per candle.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Aligned**: output has the same length as the input; positions inside
//!   the warm-up window hold `0.0`
//! - **Float arithmetic**: `i32` prices are converted before any sum, so
//!   extreme prices cannot overflow
//! - **Error-safe**: typed errors for empty input, zero periods, short series
//!   and undersized buffers
//!
//! Each indicator comes in two forms: an allocating function returning
//! `Vec<T>` (or an output struct), and an `_into` variant writing into
//! caller-supplied buffers and returning the processed count.
//!
//! # Indicator Categories
//!
//! ## Trend
//!
//! - [`sma`] - Simple Moving Average
//! - [`ema`] - Exponential Moving Average, seeded from the SMA
//! - [`wma`] - Linearly Weighted Moving Average
//! - [`macd`] - fast EMA minus slow EMA, with signal line and histogram
//!
//! ## Momentum
//!
//! - [`rsi`] - Relative Strength Index (Wilder)
//! - [`stochastic`] - Stochastic Oscillator %K / %D
//! - [`cci`] - Commodity Channel Index
//!
//! ## Volatility
//!
//! - [`atr`] - Average True Range (Wilder)
//! - [`true_range`] - per-candle True Range
//! - [`bollinger`] - Bollinger Bands
//!
//! # Example
//!
//! ```
//! use candle_ta::indicators::{ema, rsi, sma};
//! use candle_ta::Candle;
//!
//! let candles: Vec<Candle> = [44, 45, 43, 44, 46, 47, 45, 46, 48, 49]
//!     .iter()
//!     .map(|&c| Candle::from_close(0, c))
//!     .collect();
//!
//! let sma_result: Vec<f64> = sma(&candles, 5).unwrap();
//! let ema_result: Vec<f64> = ema(&candles, 5).unwrap();
//! let rsi_result: Vec<f64> = rsi(&candles, 5).unwrap();
//!
//! assert_eq!(sma_result.len(), candles.len());
//! assert_eq!(ema_result[4], sma_result[4]);
//! assert_eq!(rsi_result[4], 0.0);
//! ```

pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod wma;

// Re-export indicator functions for convenient access.
//
// These re-exports allow users to import directly from `indicators` without
// needing to specify the submodule, e.g., `use candle_ta::indicators::sma;`

pub use atr::{atr, atr_into, atr_lookback, atr_min_len, true_range};
pub use bollinger::{
    bollinger, bollinger_into, bollinger_lookback, bollinger_min_len, Bollinger, BollingerOutput,
};
pub use cci::{cci, cci_into, cci_lookback, cci_min_len};
pub use ema::{ema, ema_into, ema_lookback, ema_min_len};
pub use macd::{macd, macd_into, macd_min_len, macd_signal_lookback, Macd, MacdOutput};
pub use rsi::{rsi, rsi_into, rsi_lookback, rsi_min_len};
pub use sma::{sma, sma_into, sma_lookback, sma_min_len};
pub use stochastic::{
    stochastic, stochastic_d_lookback, stochastic_into, stochastic_k_lookback,
    stochastic_min_len, Stochastic, StochasticOutput,
};
pub use wma::{wma, wma_into, wma_lookback, wma_min_len};
