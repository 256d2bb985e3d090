//! Error types for candle-ta.
//!
//! Every batch indicator validates its inputs before touching an output
//! buffer and reports the first violated precondition as an [`Error`].
//! Degenerate but valid numeric situations (a flat window, zero average loss)
//! are not errors; each indicator documents the fallback value it writes.

use thiserror::Error;

/// The main error type for candle-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The candle series is too short for the requested period.
    ///
    /// Returned when the series has fewer candles than the indicator's
    /// warm-up window requires.
    #[error("{indicator}: insufficient data: required {required} candles, got {actual}")]
    InsufficientData {
        /// The number of candles required.
        required: usize,
        /// The number of candles provided.
        actual: usize,
        /// The indicator that rejected the input.
        indicator: &'static str,
    },

    /// An output buffer is shorter than the candle series.
    #[error("{indicator}: output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of elements required.
        required: usize,
        /// The length of the buffer that was provided.
        actual: usize,
        /// The indicator that rejected the buffer.
        indicator: &'static str,
    },

    /// Failed to convert a numeric value to the output element type.
    ///
    /// This error occurs when `NumCast::from()` cannot represent a period,
    /// a price or a constant in the target floating-point type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The candle series is empty.
    #[error("empty input: no candles provided")]
    EmptyInput,

    /// A period parameter is invalid.
    ///
    /// Returned when a period is zero or otherwise unusable for the
    /// requested operation.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },
}

/// Convenience type alias for Results using the candle-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
