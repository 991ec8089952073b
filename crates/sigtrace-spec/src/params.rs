//! Pipeline parameter types.
//!
//! These structs are the `pipeline` section of a trace spec. Every section
//! carries serde defaults, so a minimal spec renders a sensible plot.

use serde::{Deserialize, Serialize};

/// Time grid bounds and resolution.
///
/// Describes `num_points` evenly spaced sample instants over
/// `[start, end]`, endpoints included. The sampling rate is derived as the
/// reciprocal of the spacing between consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeGridParams {
    /// First sample instant.
    #[serde(default = "default_grid_start")]
    pub start: f64,
    /// Last sample instant (inclusive).
    #[serde(default = "default_grid_end")]
    pub end: f64,
    /// Number of sample points (at least 2).
    #[serde(default = "default_grid_points")]
    pub num_points: usize,
}

fn default_grid_start() -> f64 {
    0.0
}

fn default_grid_end() -> f64 {
    10.0
}

fn default_grid_points() -> usize {
    1000
}

impl Default for TimeGridParams {
    fn default() -> Self {
        Self {
            start: default_grid_start(),
            end: default_grid_end(),
            num_points: default_grid_points(),
        }
    }
}

/// Harmonic signal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalParams {
    /// Peak amplitude.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Frequency in cycles per unit time.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f64,
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_frequency() -> f64 {
    1.0
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            phase: 0.0,
        }
    }
}

/// Additive Gaussian noise parameters.
///
/// `std_dev` is a standard deviation, not a variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseParams {
    /// Mean of the distribution.
    #[serde(default)]
    pub mean: f64,
    /// Standard deviation (non-negative; 0 yields the constant mean).
    #[serde(default = "default_std_dev")]
    pub std_dev: f64,
}

fn default_std_dev() -> f64 {
    0.1
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: default_std_dev(),
        }
    }
}

/// Smoothing filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterParams {
    /// Zero-phase Butterworth low-pass (forward-backward application).
    Butterworth {
        /// Cutoff frequency in cycles per unit time; must stay below the
        /// grid's Nyquist limit.
        cutoff_hz: f64,
        /// Filter order.
        #[serde(default = "default_order")]
        order: u32,
    },
    /// Centered moving average with zero-padded edges.
    MovingAverage {
        /// Window length in samples (1 is the identity).
        #[serde(default = "default_window_size")]
        window_size: usize,
    },
}

fn default_order() -> u32 {
    5
}

fn default_window_size() -> usize {
    5
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams::Butterworth {
            cutoff_hz: 3.0,
            order: default_order(),
        }
    }
}

/// Full pipeline configuration: grid, signal, noise, and filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineParams {
    /// Sample grid.
    #[serde(default)]
    pub time_grid: TimeGridParams,
    /// Harmonic signal.
    #[serde(default)]
    pub signal: SignalParams,
    /// Additive noise.
    #[serde(default)]
    pub noise: NoiseParams,
    /// Whether noise is added at all; when false the noisy trace equals
    /// the clean trace.
    #[serde(default = "default_show_noise")]
    pub show_noise: bool,
    /// Smoothing filter applied to the noisy trace.
    #[serde(default)]
    pub filter: FilterParams,
}

fn default_show_noise() -> bool {
    true
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            time_grid: TimeGridParams::default(),
            signal: SignalParams::default(),
            noise: NoiseParams::default(),
            show_noise: default_show_noise(),
            filter: FilterParams::default(),
        }
    }
}
