//! Error types for the signal pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur during trace generation.
///
/// Every invalid configuration is detected before or during the numeric
/// computation and surfaced synchronously; the pipeline never emits NaN
/// sequences in place of an error.
#[derive(Debug, Error)]
pub enum DspError {
    /// A parameter is outside its valid domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A filter configuration that cannot produce a stable result.
    #[error("filter instability: {message}")]
    FilterInstability {
        /// Error message.
        message: String,
    },
}

impl DspError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a filter instability error.
    pub fn instability(message: impl Into<String>) -> Self {
        Self::FilterInstability {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DspError::InvalidParameter { .. } => "DSP_001",
            DspError::FilterInstability { .. } => "DSP_002",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "dsp"
    }
}
