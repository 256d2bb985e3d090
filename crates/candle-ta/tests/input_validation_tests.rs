//! Input validation tests.
//!
//! Every indicator must fail fast with a typed error on empty input, zero
//! periods, series too short for the period and undersized output buffers,
//! and must leave output buffers untouched when it rejects a call.

#![allow(clippy::float_cmp)]

mod common;

use candle_ta::error::Error;
use candle_ta::indicators::{
    atr::{atr, atr_into},
    bollinger::{bollinger, bollinger_into, Bollinger},
    cci::{cci, cci_into},
    ema::{ema, ema_into},
    macd::{macd, macd_into, Macd},
    rsi::{rsi, rsi_into},
    sma::{sma, sma_into},
    stochastic::{stochastic, stochastic_into, Stochastic},
    wma::{wma, wma_into},
};
use candle_ta::Candle;
use common::{closes, sample_candles};

// ==================== Empty Input Tests ====================

#[test]
fn validation_empty_input() {
    let empty: Vec<Candle> = vec![];
    assert!(matches!(sma::<f64>(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(ema::<f64>(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(wma::<f64>(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(rsi::<f64>(&empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(cci::<f64>(&empty, 20), Err(Error::EmptyInput)));
    assert!(matches!(atr::<f64>(&empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(stochastic::<f64>(&empty, 14, 3), Err(Error::EmptyInput)));
    assert!(matches!(bollinger::<f64>(&empty, 20, 2.0), Err(Error::EmptyInput)));
    assert!(matches!(macd::<f64>(&empty, 12, 26, 9), Err(Error::EmptyInput)));
}

// ==================== Zero Period Tests ====================

#[test]
fn validation_zero_period() {
    let candles = sample_candles();
    assert!(matches!(sma::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(ema::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(wma::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(rsi::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(cci::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(atr::<f64>(&candles, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(
        bollinger::<f64>(&candles, 0, 2.0),
        Err(Error::InvalidPeriod { period: 0, .. })
    ));
}

#[test]
fn validation_zero_period_multi_parameter() {
    let candles = sample_candles();
    assert!(matches!(stochastic::<f64>(&candles, 0, 3), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(stochastic::<f64>(&candles, 14, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(macd::<f64>(&candles, 0, 26, 9), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(macd::<f64>(&candles, 12, 0, 9), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(macd::<f64>(&candles, 12, 26, 0), Err(Error::InvalidPeriod { .. })));
}

#[test]
fn validation_period_checked_before_length() {
    let empty: Vec<Candle> = vec![];
    assert!(matches!(sma::<f64>(&empty, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(atr::<f64>(&empty, 0), Err(Error::InvalidPeriod { .. })));
}

// ==================== Insufficient Data Tests ====================

#[test]
fn validation_period_exceeds_count() {
    let candles = closes(&[1, 2, 3, 4, 5]);
    for (result, name) in [
        (sma::<f64>(&candles, 6), "sma"),
        (ema::<f64>(&candles, 6), "ema"),
        (wma::<f64>(&candles, 6), "wma"),
        (cci::<f64>(&candles, 6), "cci"),
    ] {
        assert!(
            matches!(result, Err(Error::InsufficientData { required: 6, actual: 5, indicator }) if indicator == name),
            "{name}"
        );
    }
}

#[test]
fn validation_period_equal_to_count() {
    let candles = closes(&[1, 2, 3, 4, 5]);
    // Windowed indicators accept period == count
    assert!(sma::<f64>(&candles, 5).is_ok());
    assert!(ema::<f64>(&candles, 5).is_ok());
    assert!(wma::<f64>(&candles, 5).is_ok());
    assert!(cci::<f64>(&candles, 5).is_ok());
    assert!(bollinger::<f64>(&candles, 5, 2.0).is_ok());
    assert!(stochastic::<f64>(&candles, 5, 3).is_ok());

    // Change-based indicators need one extra candle
    assert!(matches!(
        rsi::<f64>(&candles, 5),
        Err(Error::InsufficientData { required: 6, actual: 5, .. })
    ));
    assert!(matches!(
        atr::<f64>(&candles, 5),
        Err(Error::InsufficientData { required: 6, actual: 5, .. })
    ));
}

#[test]
fn validation_atr_single_candle() {
    let candles = closes(&[42]);
    assert!(matches!(atr::<f64>(&candles, 1), Err(Error::InsufficientData { .. })));
}

#[test]
fn validation_macd_short_series() {
    let candles = closes(&[1, 2, 3, 4, 5]);
    assert!(matches!(
        macd::<f64>(&candles, 3, 6, 2),
        Err(Error::InsufficientData { required: 6, .. })
    ));
    assert!(matches!(
        macd::<f64>(&candles, 6, 3, 2),
        Err(Error::InsufficientData { required: 6, .. })
    ));
    // The signal period is not bounded by the series length
    assert!(macd::<f64>(&candles, 2, 5, 50).is_ok());
}

#[test]
fn validation_large_period() {
    let candles = sample_candles();
    assert!(matches!(
        sma::<f64>(&candles, usize::MAX),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        Bollinger::new().period(1_000_000).compute::<f64>(&candles),
        Err(Error::InsufficientData { .. })
    ));
}

#[test]
fn validation_max_period_does_not_overflow() {
    let candles = closes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(matches!(
        rsi::<f64>(&candles, usize::MAX),
        Err(Error::InsufficientData { required: usize::MAX, actual: 10, .. })
    ));
    assert!(matches!(
        atr::<f64>(&candles, usize::MAX),
        Err(Error::InsufficientData { required: usize::MAX, actual: 10, .. })
    ));
    assert!(matches!(
        stochastic::<f64>(&candles, usize::MAX, 3),
        Err(Error::InsufficientData { .. })
    ));

    // An oversized %D period leaves %D entirely in warm-up
    let out = stochastic::<f64>(&candles, 3, usize::MAX).unwrap();
    assert_eq!(out.k, stochastic::<f64>(&candles, 3, 1).unwrap().k);
    assert!(out.d.iter().all(|v| *v == 0.0));
}

// ==================== Buffer Tests ====================

#[test]
fn validation_buffer_too_small() {
    let candles = sample_candles();
    let n = candles.len();
    let mut short = vec![0.0_f64; n - 1];
    let mut full = vec![0.0_f64; n];
    let mut full2 = vec![0.0_f64; n];

    for result in [
        sma_into(&candles, 5, &mut short),
        ema_into(&candles, 5, &mut short),
        wma_into(&candles, 5, &mut short),
        rsi_into(&candles, 5, &mut short),
        cci_into(&candles, 5, &mut short),
        atr_into(&candles, 5, &mut short),
    ] {
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall { required, actual, .. }) if required == n && actual == n - 1
        ));
    }

    assert!(matches!(
        stochastic_into(&candles, 5, 3, &mut full, &mut short),
        Err(Error::BufferTooSmall { .. })
    ));
    assert!(matches!(
        bollinger_into(&candles, 5, 2.0, &mut full, &mut full2, &mut short),
        Err(Error::BufferTooSmall { .. })
    ));
    assert!(matches!(
        macd_into(&candles, 3, 6, 4, &mut short, &mut full, &mut full2),
        Err(Error::BufferTooSmall { .. })
    ));
}

#[test]
fn validation_rejection_leaves_buffers_untouched() {
    let candles = sample_candles();
    let n = candles.len();
    let mut a = vec![-1.0_f64; n];
    let mut b = vec![-1.0_f64; n];
    let mut c = vec![-1.0_f64; n - 1];

    assert!(sma_into(&candles, n + 1, &mut a).is_err());
    assert!(stochastic_into(&candles, 5, 0, &mut a, &mut b).is_err());
    assert!(bollinger_into(&candles, 5, 2.0, &mut a, &mut b, &mut c).is_err());
    assert!(macd_into(&candles, 3, 6, 4, &mut a, &mut b, &mut c).is_err());
    assert!(Macd::new().compute_into(&candles, &mut a, &mut b, &mut c).is_err());
    assert!(Stochastic::new()
        .d_period(0)
        .compute_into(&candles, &mut a, &mut b)
        .is_err());

    assert!(a.iter().all(|v| *v == -1.0));
    assert!(b.iter().all(|v| *v == -1.0));
    assert!(c.iter().all(|v| *v == -1.0));
}

// ==================== Error Messages ====================

#[test]
fn validation_error_messages_name_the_indicator() {
    let candles = closes(&[1, 2]);
    let err = rsi::<f64>(&candles, 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rsi: insufficient data: required 6 candles, got 2"
    );

    let mut out = [0.0_f64; 1];
    let err = sma_into(&candles, 1, &mut out).unwrap_err();
    assert!(err.to_string().starts_with("sma: output buffer too small"));
}
