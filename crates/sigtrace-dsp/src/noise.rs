//! Gaussian noise generation.

use rand::Rng;
use rand_distr::Normal;
use rand_pcg::Pcg32;
use sigtrace_spec::NoiseParams;

use crate::error::{DspError, DspResult};
use crate::grid::TimeGrid;

/// A materialized noise vector, one draw per grid point.
///
/// A sample is drawn once and reused across recomputation so a plotted
/// noise trace stays stable while only the harmonic parameters change.
/// `regenerate` overwrites the values in place; the sample is never
/// partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseSample {
    values: Vec<f64>,
}

impl NoiseSample {
    /// Draws a fresh sample from `Normal(mean, std_dev)` over the grid.
    ///
    /// # Errors
    /// `InvalidParameter` for a negative or non-finite spread. A spread of
    /// zero is valid and yields the constant `mean`.
    pub fn generate(grid: &TimeGrid, params: &NoiseParams, rng: &mut Pcg32) -> DspResult<Self> {
        let dist = normal_dist(params)?;
        let values = (0..grid.len()).map(|_| rng.sample(dist)).collect();
        Ok(Self { values })
    }

    /// Redraws every value in place with the given parameters.
    pub fn regenerate(
        &mut self,
        grid: &TimeGrid,
        params: &NoiseParams,
        rng: &mut Pcg32,
    ) -> DspResult<()> {
        let dist = normal_dist(params)?;
        self.values.clear();
        self.values.extend((0..grid.len()).map(|_| rng.sample(dist)));
        Ok(())
    }

    /// The noise values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of draws.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the sample holds no draws.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds the distribution, validating the spread.
fn normal_dist(params: &NoiseParams) -> DspResult<Normal<f64>> {
    if !params.mean.is_finite() {
        return Err(DspError::invalid_param(
            "mean",
            format!("must be finite, got {}", params.mean),
        ));
    }
    if !params.std_dev.is_finite() || params.std_dev < 0.0 {
        return Err(DspError::invalid_param(
            "std_dev",
            format!("must be non-negative, got {}", params.std_dev),
        ));
    }
    Normal::new(params.mean, params.std_dev)
        .map_err(|e| DspError::invalid_param("std_dev", e.to_string()))
}
