//! C ABI for the candle-ta indicator engine.
//!
//! Every function here is `extern "C"` and `#[no_mangle]`, so a host process
//! can load the library dynamically and bind the symbols by name.
//!
//! # Conventions
//!
//! - Candles are passed as a pointer to `count` contiguous [`Candle`]
//!   records (32 bytes each, C layout).
//! - Output buffers are caller-allocated `double` arrays of at least `count`
//!   elements. Distinct outputs must not overlap; overlapping outputs are
//!   rejected.
//! - Batch functions return `count` on success and `-1` on any rejected call:
//!   null pointer, `count <= 0`, a period out of range, or a series too short
//!   for the period. Nothing is written on rejection.
//! - Incremental functions return the next value directly, or `NaN` when the
//!   call is rejected.
//! - No panic unwinds into the host. A panic is logged and reported like a
//!   rejected call.
//!
//! Rejections are logged at `debug` level through `tracing`. Nothing is
//! printed unless the host calls [`ta_init_logging`] or installs its own
//! subscriber.

#![allow(clippy::missing_safety_doc)] // Safety contracts are documented per function under "# Safety"
#![allow(clippy::too_many_arguments)] // C signatures mirror the indicator parameters

use std::ffi::c_char;
use std::mem::size_of;
use std::os::raw::{c_double, c_int};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

use candle_ta::incremental::{ema_incremental, rsi_incremental, sma_incremental, RsiState};
use candle_ta::indicators;
use candle_ta::Candle;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Returned by batch functions for any rejected call.
pub const TA_ERROR: c_int = -1;

// =============================================================================
// Boundary helpers
// =============================================================================

/// Returns true if any two of the `count`-element output buffers overlap.
fn outputs_overlap(outputs: &[*mut c_double], count: usize) -> bool {
    let span = count.saturating_mul(size_of::<c_double>());
    outputs.iter().enumerate().any(|(i, &a)| {
        outputs[i + 1..]
            .iter()
            .any(|&b| (a as usize).abs_diff(b as usize) < span)
    })
}

/// Checks the pointers and count of a batch call and returns the series
/// length.
fn checked_len(
    indicator: &'static str,
    candles: *const Candle,
    count: c_int,
    outputs: &[*mut c_double],
) -> Option<usize> {
    if candles.is_null() || outputs.iter().any(|p| p.is_null()) {
        debug!(indicator, "rejected call: null pointer");
        return None;
    }
    let n = match usize::try_from(count) {
        Ok(n) if n > 0 => n,
        _ => {
            debug!(indicator, count, "rejected call: non-positive count");
            return None;
        }
    };
    if outputs_overlap(outputs, n) {
        debug!(indicator, "rejected call: overlapping output buffers");
        return None;
    }
    Some(n)
}

/// Converts a C period to `usize`, rejecting zero and negative values.
fn checked_period(indicator: &'static str, period: c_int) -> Option<usize> {
    match usize::try_from(period) {
        Ok(p) if p > 0 => Some(p),
        _ => {
            debug!(indicator, period, "rejected call: non-positive period");
            None
        }
    }
}

/// Runs a batch computation, mapping errors and panics to [`TA_ERROR`].
fn run_batch<F>(indicator: &'static str, body: F) -> c_int
where
    F: FnOnce() -> candle_ta::Result<usize>,
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(n)) => c_int::try_from(n).unwrap_or(TA_ERROR),
        Ok(Err(error)) => {
            debug!(indicator, %error, "rejected call");
            TA_ERROR
        }
        Err(_) => {
            warn!(indicator, "panic caught at the C boundary");
            TA_ERROR
        }
    }
}

/// Runs an incremental step, mapping panics to `NaN`.
fn run_step<F>(indicator: &'static str, body: F) -> c_double
where
    F: FnOnce() -> c_double,
{
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|_| {
        warn!(indicator, "panic caught at the C boundary");
        c_double::NAN
    })
}

/// Borrows `count` candles from the host.
///
/// # Safety
///
/// `candles` must be non-null and point to `count` initialized candles that
/// stay valid and unmodified for `'a`.
unsafe fn candle_slice<'a>(candles: *const Candle, count: usize) -> &'a [Candle] {
    // SAFETY: upheld by the caller
    unsafe { slice::from_raw_parts(candles, count) }
}

/// Borrows a host output buffer.
///
/// # Safety
///
/// `out` must be non-null, valid for `count` writes, and not aliased by any
/// other live reference for `'a`.
unsafe fn output_slice<'a>(out: *mut c_double, count: usize) -> &'a mut [c_double] {
    // SAFETY: upheld by the caller
    unsafe { slice::from_raw_parts_mut(out, count) }
}

// =============================================================================
// Single-period indicators
// =============================================================================

/// Shared body of the `(candles, count, period, out)` entry points.
///
/// # Safety
///
/// See the module-level conventions.
unsafe fn single_period(
    indicator: &'static str,
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
    compute: fn(&[Candle], usize, &mut [f64]) -> candle_ta::Result<usize>,
) -> c_int {
    let Some(n) = checked_len(indicator, candles, count, &[out]) else {
        return TA_ERROR;
    };
    let Some(period) = checked_period(indicator, period) else {
        return TA_ERROR;
    };
    run_batch(indicator, || {
        // SAFETY: pointers checked non-null; length and validity are the caller's contract
        let (input, output) = unsafe { (candle_slice(candles, n), output_slice(out, n)) };
        compute(input, period, output)
    })
}

/// Simple Moving Average of the closes.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_sma(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("sma", candles, count, period, out, indicators::sma_into) }
}

/// Exponential Moving Average of the closes.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_ema(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("ema", candles, count, period, out, indicators::ema_into) }
}

/// Weighted Moving Average of the closes.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_wma(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("wma", candles, count, period, out, indicators::wma_into) }
}

/// Relative Strength Index. Requires `period < count`.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_rsi(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("rsi", candles, count, period, out, indicators::rsi_into) }
}

/// Commodity Channel Index.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_cci(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("cci", candles, count, period, out, indicators::cci_into) }
}

/// Average True Range. Requires `count > 1` and `period < count`.
///
/// # Safety
///
/// `candles` must point to `count` candles and `out` to `count` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn ta_atr(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    out: *mut c_double,
) -> c_int {
    unsafe { single_period("atr", candles, count, period, out, indicators::atr_into) }
}

// =============================================================================
// Multi-output indicators
// =============================================================================

/// Stochastic Oscillator %K and %D.
///
/// # Safety
///
/// `candles` must point to `count` candles; `out_k` and `out_d` must each
/// point to `count` writable doubles and must not overlap.
#[no_mangle]
pub unsafe extern "C" fn ta_stochastic(
    candles: *const Candle,
    count: c_int,
    k_period: c_int,
    d_period: c_int,
    out_k: *mut c_double,
    out_d: *mut c_double,
) -> c_int {
    const NAME: &str = "stochastic";
    let Some(n) = checked_len(NAME, candles, count, &[out_k, out_d]) else {
        return TA_ERROR;
    };
    let (Some(k_period), Some(d_period)) =
        (checked_period(NAME, k_period), checked_period(NAME, d_period))
    else {
        return TA_ERROR;
    };
    run_batch(NAME, || {
        // SAFETY: pointers checked non-null; non-overlap is the caller's contract
        let (input, k, d) = unsafe {
            (
                candle_slice(candles, n),
                output_slice(out_k, n),
                output_slice(out_d, n),
            )
        };
        indicators::stochastic_into(input, k_period, d_period, k, d)
    })
}

/// Bollinger Bands. Outputs are written in middle, upper, lower order.
///
/// # Safety
///
/// `candles` must point to `count` candles; the three outputs must each
/// point to `count` writable doubles and must not overlap.
#[no_mangle]
pub unsafe extern "C" fn ta_bollinger(
    candles: *const Candle,
    count: c_int,
    period: c_int,
    multiplier: c_double,
    out_middle: *mut c_double,
    out_upper: *mut c_double,
    out_lower: *mut c_double,
) -> c_int {
    const NAME: &str = "bollinger";
    let Some(n) = checked_len(NAME, candles, count, &[out_middle, out_upper, out_lower]) else {
        return TA_ERROR;
    };
    let Some(period) = checked_period(NAME, period) else {
        return TA_ERROR;
    };
    run_batch(NAME, || {
        // SAFETY: pointers checked non-null; non-overlap is the caller's contract
        let (input, middle, upper, lower) = unsafe {
            (
                candle_slice(candles, n),
                output_slice(out_middle, n),
                output_slice(out_upper, n),
                output_slice(out_lower, n),
            )
        };
        indicators::bollinger_into(input, period, multiplier, middle, upper, lower)
    })
}

/// MACD line, signal line and histogram.
///
/// # Safety
///
/// `candles` must point to `count` candles; the three outputs must each
/// point to `count` writable doubles and must not overlap.
#[no_mangle]
pub unsafe extern "C" fn ta_macd(
    candles: *const Candle,
    count: c_int,
    fast_period: c_int,
    slow_period: c_int,
    signal_period: c_int,
    out_macd: *mut c_double,
    out_signal: *mut c_double,
    out_histogram: *mut c_double,
) -> c_int {
    const NAME: &str = "macd";
    let Some(n) = checked_len(NAME, candles, count, &[out_macd, out_signal, out_histogram]) else {
        return TA_ERROR;
    };
    let (Some(fast), Some(slow), Some(signal)) = (
        checked_period(NAME, fast_period),
        checked_period(NAME, slow_period),
        checked_period(NAME, signal_period),
    ) else {
        return TA_ERROR;
    };
    run_batch(NAME, || {
        // SAFETY: pointers checked non-null; non-overlap is the caller's contract
        let (input, line, sig, hist) = unsafe {
            (
                candle_slice(candles, n),
                output_slice(out_macd, n),
                output_slice(out_signal, n),
                output_slice(out_histogram, n),
            )
        };
        indicators::macd_into(input, fast, slow, signal, line, sig, hist)
    })
}

// =============================================================================
// Incremental updates
// =============================================================================

/// Next SMA value: `(prev_sum - old_close + new_close) / period`.
///
/// Returns `NaN` if `period <= 0`.
#[no_mangle]
pub extern "C" fn ta_sma_incremental(
    prev_sum: c_double,
    new_close: c_double,
    old_close: c_double,
    period: c_int,
) -> c_double {
    let Some(period) = checked_period("sma_incremental", period) else {
        return c_double::NAN;
    };
    run_step("sma_incremental", || {
        sma_incremental(prev_sum, new_close, old_close, period)
    })
}

/// Next EMA value from the previous EMA.
///
/// Returns `NaN` if `period <= 0`.
#[no_mangle]
pub extern "C" fn ta_ema_incremental(
    prev_ema: c_double,
    new_close: c_double,
    period: c_int,
) -> c_double {
    let Some(period) = checked_period("ema_incremental", period) else {
        return c_double::NAN;
    };
    run_step("ema_incremental", || ema_incremental(prev_ema, new_close, period))
}

/// Next RSI value from the previous Wilder averages.
///
/// The updated averages are not returned; use [`ta_rsi_incremental_state`]
/// to keep streaming. Returns `NaN` if `period <= 0`.
#[no_mangle]
pub extern "C" fn ta_rsi_incremental(
    prev_avg_gain: c_double,
    prev_avg_loss: c_double,
    new_close: c_double,
    prev_close: c_double,
    period: c_int,
) -> c_double {
    let Some(period) = checked_period("rsi_incremental", period) else {
        return c_double::NAN;
    };
    run_step("rsi_incremental", || {
        rsi_incremental(prev_avg_gain, prev_avg_loss, new_close, prev_close, period)
    })
}

/// Advances a caller-held [`RsiState`] by one close and returns the RSI.
///
/// Returns `NaN` and leaves the state untouched if `state` is null or
/// `period <= 0`.
///
/// # Safety
///
/// `state` must be null or point to a valid, exclusively borrowed
/// `RsiState`.
#[no_mangle]
pub unsafe extern "C" fn ta_rsi_incremental_state(
    state: *mut RsiState,
    new_close: c_double,
    prev_close: c_double,
    period: c_int,
) -> c_double {
    const NAME: &str = "rsi_incremental_state";
    if state.is_null() {
        debug!(indicator = NAME, "rejected call: null pointer");
        return c_double::NAN;
    }
    let Some(period) = checked_period(NAME, period) else {
        return c_double::NAN;
    };
    run_step(NAME, || {
        // SAFETY: non-null; validity and exclusivity are the caller's contract
        let state = unsafe { &mut *state };
        let (next, rsi) = state.update(new_close, prev_close, period);
        *state = next;
        rsi
    })
}

// =============================================================================
// Identity and diagnostics
// =============================================================================

/// Returns the library identity as a static NUL-terminated string.
///
/// The pointer stays valid for the life of the process and must not be
/// freed.
#[no_mangle]
pub extern "C" fn ta_version() -> *const c_char {
    candle_ta::version_cstr().as_ptr()
}

/// Installs a `tracing` subscriber that writes to stderr, filtered by
/// `RUST_LOG` (default `warn`).
///
/// Returns `0` when installed and `1` if a global subscriber already exists.
#[no_mangle]
pub extern "C" fn ta_init_logging() -> c_int {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = catch_unwind(AssertUnwindSafe(move || {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }))
    .unwrap_or(false);

    if installed {
        info!(version = candle_ta::version(), "logging initialized");
        0
    } else {
        1
    }
}
