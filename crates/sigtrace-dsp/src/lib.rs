//! sigtrace Signal Pipeline
//!
//! This crate implements the numeric core of sigtrace: given a time grid
//! and pipeline parameters, it produces three equal-length traces for
//! plotting — the clean harmonic signal, the same signal with additive
//! Gaussian noise, and a smoothed/filtered version of the noisy signal.
//!
//! # Overview
//!
//! - **Harmonic generator** — `amplitude * sin(2*pi*frequency*t + phase)`
//! - **Noise generator** — Gaussian draws over the grid, materialized as a
//!   reusable [`NoiseSample`]
//! - **Composer** — adds a reused or fresh noise sample to the harmonic,
//!   or passes the clean signal through when noise is hidden
//! - **Filters** — zero-phase Butterworth low-pass (forward-backward
//!   biquad cascade) or a zero-padded centered moving average
//!
//! # Determinism
//!
//! All randomness flows through PCG32 generators seeded from the spec seed
//! via BLAKE3 derivation. Given the same spec and seed, the output traces
//! are identical across runs.
//!
//! # Example
//!
//! ```
//! use sigtrace_dsp::generate_from_params;
//! use sigtrace_spec::PipelineParams;
//!
//! let traces = generate_from_params(&PipelineParams::default(), 42).unwrap();
//! assert_eq!(traces.clean.len(), traces.filtered.len());
//! ```
//!
//! # Crate Structure
//!
//! - [`pipeline`] - Main entry points ([`generate`], [`Session`])
//! - [`grid`] - Evenly spaced time grids
//! - [`harmonic`] - Harmonic signal generation
//! - [`noise`] - Gaussian noise samples
//! - [`compose`] - Noisy-signal composition
//! - [`filter`] - Biquad filters and zero-phase Butterworth filtering
//! - [`smooth`] - Moving-average smoothing
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod compose;
pub mod error;
pub mod filter;
pub mod grid;
pub mod harmonic;
pub mod noise;
pub mod pipeline;
pub mod rng;
pub mod smooth;

// Re-export main types at crate root
pub use compose::compose;
pub use error::{DspError, DspResult};
pub use filter::butterworth_filtfilt;
pub use grid::TimeGrid;
pub use harmonic::harmonic;
pub use noise::NoiseSample;
pub use pipeline::{apply_filter, generate, generate_from_params, Session, TraceSet};
pub use smooth::moving_average;
