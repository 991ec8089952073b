//! Evenly spaced time grids.

use sigtrace_spec::TimeGridParams;

use crate::error::{DspError, DspResult};

/// An ordered, evenly spaced sequence of sample instants over a fixed
/// interval, endpoints included.
///
/// The grid is immutable once constructed. The sampling rate is derived as
/// the reciprocal of the spacing between consecutive samples,
/// `1 / (t[1] - t[0])`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    times: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid of `num_points` evenly spaced instants over
    /// `[start, end]`.
    ///
    /// # Errors
    /// `InvalidParameter` for non-finite bounds, `end <= start`, or fewer
    /// than 2 points.
    pub fn new(start: f64, end: f64, num_points: usize) -> DspResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DspError::invalid_param(
                "time_grid",
                format!("bounds must be finite, got [{}, {}]", start, end),
            ));
        }
        if end <= start {
            return Err(DspError::invalid_param(
                "time_grid",
                format!("end must be greater than start, got [{}, {}]", start, end),
            ));
        }
        if num_points < 2 {
            return Err(DspError::invalid_param(
                "time_grid",
                format!("need at least 2 points, got {}", num_points),
            ));
        }

        let step = (end - start) / (num_points - 1) as f64;
        let times = (0..num_points).map(|i| start + i as f64 * step).collect();

        Ok(Self { start, end, times })
    }

    /// Creates a grid from spec parameters.
    pub fn from_params(params: &TimeGridParams) -> DspResult<Self> {
        Self::new(params.start, params.end, params.num_points)
    }

    /// The sample instants.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; construction requires at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First sample instant.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last sample instant.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.times.len() - 1) as f64
    }

    /// Derived sampling rate (1 / step).
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step()
    }

    /// Nyquist limit: half the sampling rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate() / 2.0
    }
}
