//! Main entry point for trace generation, plus interactive session state.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;
use sigtrace_spec::{FilterParams, NoiseParams, PipelineParams, SignalParams, TraceSpec};

use crate::compose::compose;
use crate::error::DspResult;
use crate::filter::butterworth_filtfilt;
use crate::grid::TimeGrid;
use crate::harmonic::harmonic;
use crate::noise::NoiseSample;
use crate::rng::{create_noise_rng, create_params_rng};
use crate::smooth::moving_average;

/// Result of one pipeline run: three equal-length traces over the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSet {
    /// Sample instants.
    pub times: Vec<f64>,
    /// Clean harmonic signal.
    pub clean: Vec<f64>,
    /// Harmonic plus noise (equals `clean` when noise is hidden).
    pub noisy: Vec<f64>,
    /// Smoothed/filtered version of the noisy trace.
    pub filtered: Vec<f64>,
}

impl TraceSet {
    /// Number of samples in each trace.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if the traces hold no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Generates traces from a spec.
pub fn generate(spec: &TraceSpec) -> DspResult<TraceSet> {
    generate_from_params(&spec.pipeline, spec.seed)
}

/// Generates traces from parameters directly.
///
/// One full, non-incremental run: harmonic synthesis, noise composition
/// with a freshly drawn sample from the seed's derived noise stream, then
/// the configured filter.
pub fn generate_from_params(params: &PipelineParams, seed: u32) -> DspResult<TraceSet> {
    let grid = TimeGrid::from_params(&params.time_grid)?;
    let mut rng = create_noise_rng(seed);

    let clean = harmonic(&grid, &params.signal);
    let noise = NoiseSample::generate(&grid, &params.noise, &mut rng)?;
    let noisy = compose(
        &clean,
        &grid,
        &params.noise,
        params.show_noise,
        Some(&noise),
        &mut rng,
    )?;
    let filtered = apply_filter(&noisy, &grid, &params.filter)?;

    Ok(TraceSet {
        times: grid.times().to_vec(),
        clean,
        noisy,
        filtered,
    })
}

/// Applies the configured smoothing filter to a trace.
pub fn apply_filter(data: &[f64], grid: &TimeGrid, filter: &FilterParams) -> DspResult<Vec<f64>> {
    match *filter {
        FilterParams::Butterworth { cutoff_hz, order } => {
            butterworth_filtfilt(data, cutoff_hz, grid.sample_rate(), order)
        }
        FilterParams::MovingAverage { window_size } => moving_average(data, window_size),
    }
}

/// Interactive session state for a host UI.
///
/// Owns the cached [`NoiseSample`] explicitly and passes it by reference
/// into the composer. The host drives parameter changes through the
/// setters and calls [`Session::recompute`] after each one; the noise
/// trace stays stable until the noise parameters change or a regenerate
/// is requested.
#[derive(Debug, Clone)]
pub struct Session {
    grid: TimeGrid,
    signal: SignalParams,
    noise_params: NoiseParams,
    show_noise: bool,
    filter: FilterParams,
    noise: NoiseSample,
    noise_rng: Pcg32,
    params_rng: Pcg32,
}

impl Session {
    /// Creates a session from pipeline parameters, drawing the initial
    /// noise sample from the seed's derived noise stream.
    pub fn new(params: &PipelineParams, seed: u32) -> DspResult<Self> {
        let grid = TimeGrid::from_params(&params.time_grid)?;
        let mut noise_rng = create_noise_rng(seed);
        let noise = NoiseSample::generate(&grid, &params.noise, &mut noise_rng)?;

        Ok(Self {
            grid,
            signal: params.signal,
            noise_params: params.noise,
            show_noise: params.show_noise,
            filter: params.filter,
            noise,
            noise_rng,
            params_rng: create_params_rng(seed),
        })
    }

    /// Runs the full pipeline with the current parameters, reusing the
    /// cached noise sample.
    pub fn recompute(&mut self) -> DspResult<TraceSet> {
        let clean = harmonic(&self.grid, &self.signal);
        let noisy = compose(
            &clean,
            &self.grid,
            &self.noise_params,
            self.show_noise,
            Some(&self.noise),
            &mut self.noise_rng,
        )?;
        let filtered = apply_filter(&noisy, &self.grid, &self.filter)?;

        Ok(TraceSet {
            times: self.grid.times().to_vec(),
            clean,
            noisy,
            filtered,
        })
    }

    /// Redraws the cached noise sample in place.
    pub fn regenerate_noise(&mut self) -> DspResult<()> {
        self.noise
            .regenerate(&self.grid, &self.noise_params, &mut self.noise_rng)
    }

    /// Updates the harmonic parameters.
    pub fn set_signal(&mut self, signal: SignalParams) {
        self.signal = signal;
    }

    /// Updates the noise parameters and redraws the cached sample, so the
    /// plotted noise immediately reflects the new distribution.
    pub fn set_noise(&mut self, noise: NoiseParams) -> DspResult<()> {
        self.noise_params = noise;
        self.regenerate_noise()
    }

    /// Updates the filter configuration.
    pub fn set_filter(&mut self, filter: FilterParams) {
        self.filter = filter;
    }

    /// Toggles noise visibility.
    pub fn set_show_noise(&mut self, show_noise: bool) {
        self.show_noise = show_noise;
    }

    /// Draws random parameters (amplitude and frequency in [0.1, 10],
    /// phase in [0, 2*pi], mean in [-1, 1], spread in [0, 1]) and redraws
    /// the noise sample.
    pub fn randomize(&mut self) -> DspResult<()> {
        self.signal = SignalParams {
            amplitude: self.params_rng.gen_range(0.1..=10.0),
            frequency: self.params_rng.gen_range(0.1..=10.0),
            phase: self.params_rng.gen_range(0.0..=2.0 * PI),
        };
        self.noise_params = NoiseParams {
            mean: self.params_rng.gen_range(-1.0..=1.0),
            std_dev: self.params_rng.gen_range(0.0..=1.0),
        };
        self.regenerate_noise()
    }

    /// Restores the default parameters (keeping the filter variant) and
    /// redraws the noise sample.
    pub fn reset(&mut self) -> DspResult<()> {
        self.signal = SignalParams::default();
        self.noise_params = NoiseParams::default();
        self.show_noise = true;
        self.filter = match self.filter {
            FilterParams::Butterworth { .. } => FilterParams::default(),
            FilterParams::MovingAverage { .. } => FilterParams::MovingAverage { window_size: 5 },
        };
        self.regenerate_noise()
    }

    /// The session's time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Current harmonic parameters.
    pub fn signal(&self) -> SignalParams {
        self.signal
    }

    /// Current noise parameters.
    pub fn noise_params(&self) -> NoiseParams {
        self.noise_params
    }

    /// Current filter configuration.
    pub fn filter(&self) -> FilterParams {
        self.filter
    }

    /// Whether noise is currently shown.
    pub fn show_noise(&self) -> bool {
        self.show_noise
    }

    /// The cached noise sample.
    pub fn noise(&self) -> &NoiseSample {
        &self.noise
    }
}
