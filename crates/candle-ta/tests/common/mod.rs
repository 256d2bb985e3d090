//! Shared test utilities for candle-ta tests.

use candle_ta::Candle;

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Candles carrying only a close (open/high/low set to the close).
#[allow(dead_code)]
pub fn closes(values: &[i32]) -> Vec<Candle> {
    values
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::from_close(i as i64 * 60, c))
        .collect()
}

/// Candles from `(open, high, low, close)` rows, one minute apart.
#[allow(dead_code)]
pub fn ohlc(rows: &[(i32, i32, i32, i32)]) -> Vec<Candle> {
    rows.iter()
        .enumerate()
        .map(|(i, &(o, h, l, c))| Candle::new(i as i64 * 60, o, h, l, c, 1_000 + i as i64))
        .collect()
}

/// Thirty minutes of a realistic quote in fixed-point ticks.
#[allow(dead_code)]
pub fn sample_candles() -> Vec<Candle> {
    ohlc(&[
        (70_100, 70_250, 70_000, 70_200),
        (70_200, 70_300, 70_050, 70_150),
        (70_150, 70_400, 70_100, 70_350),
        (70_350, 70_500, 70_300, 70_450),
        (70_450, 70_450, 70_200, 70_250),
        (70_250, 70_300, 70_000, 70_050),
        (70_050, 70_150, 69_900, 69_950),
        (69_950, 70_100, 69_850, 70_050),
        (70_050, 70_250, 70_000, 70_200),
        (70_200, 70_400, 70_150, 70_350),
        (70_350, 70_600, 70_300, 70_550),
        (70_550, 70_700, 70_450, 70_500),
        (70_500, 70_550, 70_250, 70_300),
        (70_300, 70_350, 70_100, 70_150),
        (70_150, 70_300, 70_050, 70_250),
        (70_250, 70_500, 70_200, 70_450),
        (70_450, 70_650, 70_400, 70_600),
        (70_600, 70_800, 70_550, 70_750),
        (70_750, 70_800, 70_500, 70_550),
        (70_550, 70_600, 70_350, 70_400),
        (70_400, 70_450, 70_200, 70_250),
        (70_250, 70_350, 70_150, 70_300),
        (70_300, 70_550, 70_250, 70_500),
        (70_500, 70_750, 70_450, 70_700),
        (70_700, 70_900, 70_650, 70_850),
        (70_850, 70_950, 70_700, 70_750),
        (70_750, 70_800, 70_550, 70_600),
        (70_600, 70_650, 70_400, 70_450),
        (70_450, 70_600, 70_400, 70_550),
        (70_550, 70_750, 70_500, 70_700),
    ])
}

/// A longer deterministic series with a wandering trend.
#[allow(dead_code)]
pub fn long_series(len: usize) -> Vec<Candle> {
    let mut close = 50_000_i32;
    (0..len)
        .map(|i| {
            let step = ((i * 7_919) % 211) as i32 - 105;
            close += step;
            let spread = 20 + ((i * 31) % 47) as i32;
            Candle::new(i as i64 * 60, close - step / 2, close + spread, close - spread, close, 500)
        })
        .collect()
}
