//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use candle_ta::prelude::*;
//!
//! let candles: Vec<Candle> = (1..=10).map(|c| Candle::from_close(0, c)).collect();
//!
//! let sma_result: Vec<f64> = sma(&candles, 3).unwrap();
//! let ema_result: Vec<f64> = ema(&candles, 3).unwrap();
//! let bands = Bollinger::new().period(5).compute::<f64>(&candles).unwrap();
//!
//! assert_eq!(sma_result[2], 2.0);
//! assert_eq!(ema_result[2], 2.0);
//! assert_eq!(bands.middle[4], 3.0);
//! ```
//!
//! # Contents
//!
//! - [`Candle`], [`Error`], [`Result`]
//! - [`SeriesElement`] and [`ValidatedInput`]
//! - every indicator function with its `_into` variant
//! - output structs and configuration types
//! - lookback and minimum-length helpers
//! - incremental state types

// Core types
pub use crate::candle::Candle;
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indicator functions (simple API)
pub use crate::indicators::{
    atr, bollinger, cci, ema, macd, rsi, sma, stochastic, true_range, wma,
};

// Indicator functions (_into API for pre-allocated buffers)
pub use crate::indicators::{
    atr_into, bollinger_into, cci_into, ema_into, macd_into, rsi_into, sma_into, stochastic_into,
    wma_into,
};

// Multi-output types
pub use crate::indicators::{BollingerOutput, MacdOutput, StochasticOutput};

// Configuration types
pub use crate::indicators::{Bollinger, Macd, Stochastic};

// Lookback functions
pub use crate::indicators::{
    atr_lookback, atr_min_len, bollinger_lookback, bollinger_min_len, cci_lookback, cci_min_len,
    ema_lookback, ema_min_len, macd_min_len, macd_signal_lookback, rsi_lookback, rsi_min_len,
    sma_lookback, sma_min_len, stochastic_d_lookback, stochastic_k_lookback, stochastic_min_len,
    wma_lookback, wma_min_len,
};

// Incremental engine
pub use crate::incremental::{
    ema_incremental, rsi_incremental, sma_incremental, EmaState, RsiState, SmaState,
};
