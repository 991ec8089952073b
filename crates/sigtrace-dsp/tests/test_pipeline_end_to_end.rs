//! End-to-end pipeline integration tests driven by full specs.

use sigtrace_dsp::generate;
use sigtrace_spec::{
    FilterParams, NoiseParams, OutputFormat, OutputSpec, PipelineParams, SignalParams,
    TimeGridParams, TraceSpec,
};

fn build_spec(seed: u32, pipeline: PipelineParams) -> TraceSpec {
    TraceSpec::builder("pipeline-e2e-01")
        .seed(seed)
        .description("end-to-end pipeline test")
        .output(OutputSpec::primary(OutputFormat::Csv, "traces/e2e.csv"))
        .pipeline(pipeline)
        .build()
}

#[test]
fn test_default_spec_produces_three_traces() {
    let spec = build_spec(42, PipelineParams::default());
    let traces = generate(&spec).expect("generation should succeed");

    assert_eq!(traces.times.len(), 1000);
    assert_eq!(traces.clean.len(), 1000);
    assert_eq!(traces.noisy.len(), 1000);
    assert_eq!(traces.filtered.len(), 1000);

    // The time axis covers [0, 10] inclusive.
    assert_eq!(traces.times[0], 0.0);
    assert!((traces.times[999] - 10.0).abs() < 1e-12);
}

#[test]
fn test_generation_determinism() {
    let spec = build_spec(42, PipelineParams::default());

    let first = generate(&spec).expect("first generation");
    let second = generate(&spec).expect("second generation");

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_change_only_the_noise() {
    let a = generate(&build_spec(42, PipelineParams::default())).unwrap();
    let b = generate(&build_spec(43, PipelineParams::default())).unwrap();

    assert_eq!(a.clean, b.clean);
    assert_ne!(a.noisy, b.noisy);
    assert_ne!(a.filtered, b.filtered);
}

#[test]
fn test_clean_passband_signal_survives_filtering() {
    // 100 points over [0, 10], unit 1 Hz sine, zero noise spread,
    // Butterworth cutoff 3 order 5: the filtered trace approximates the
    // clean harmonic since nothing was added and the signal sits well
    // inside the passband.
    let pipeline = PipelineParams {
        time_grid: TimeGridParams {
            start: 0.0,
            end: 10.0,
            num_points: 100,
        },
        signal: SignalParams {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
        },
        noise: NoiseParams {
            mean: 0.0,
            std_dev: 0.0,
        },
        show_noise: true,
        filter: FilterParams::Butterworth {
            cutoff_hz: 3.0,
            order: 5,
        },
    };

    let traces = generate(&build_spec(42, pipeline)).unwrap();

    assert_eq!(traces.noisy, traces.clean);
    for i in 0..traces.len() {
        assert!(
            (traces.filtered[i] - traces.clean[i]).abs() < 0.05,
            "sample {}: filtered {} vs clean {}",
            i,
            traces.filtered[i],
            traces.clean[i]
        );
    }
}

#[test]
fn test_filtering_reduces_noise_deviation() {
    let traces = generate(&build_spec(42, PipelineParams::default())).unwrap();

    // Mean absolute deviation from the clean trace, edges skipped.
    let dev = |xs: &[f64]| -> f64 {
        xs.iter()
            .zip(traces.clean.iter())
            .skip(50)
            .take(900)
            .map(|(x, c)| (x - c).abs())
            .sum::<f64>()
            / 900.0
    };

    assert!(dev(&traces.filtered) < dev(&traces.noisy));
}

#[test]
fn test_nyquist_violation_is_an_error_not_nan() {
    // Default grid: fs = 99.9, Nyquist ~49.95.
    let pipeline = PipelineParams {
        filter: FilterParams::Butterworth {
            cutoff_hz: 60.0,
            order: 5,
        },
        ..PipelineParams::default()
    };

    let err = generate(&build_spec(42, pipeline)).unwrap_err();
    assert_eq!(err.code(), "DSP_002");
}

#[test]
fn test_moving_average_spec_end_to_end() {
    let pipeline = PipelineParams {
        filter: FilterParams::MovingAverage { window_size: 5 },
        ..PipelineParams::default()
    };

    let traces = generate(&build_spec(7, pipeline)).unwrap();
    assert_eq!(traces.filtered.len(), 1000);
    assert!(traces.filtered.iter().all(|v| v.is_finite()));
}

#[test]
fn test_window_of_one_is_identity_end_to_end() {
    let pipeline = PipelineParams {
        filter: FilterParams::MovingAverage { window_size: 1 },
        ..PipelineParams::default()
    };

    let traces = generate(&build_spec(7, pipeline)).unwrap();
    assert_eq!(traces.filtered, traces.noisy);
}

#[test]
fn test_oversize_window_is_an_error() {
    let pipeline = PipelineParams {
        filter: FilterParams::MovingAverage { window_size: 1001 },
        ..PipelineParams::default()
    };

    let err = generate(&build_spec(7, pipeline)).unwrap_err();
    assert_eq!(err.code(), "DSP_001");
}

#[test]
fn test_negative_spread_is_an_error() {
    let pipeline = PipelineParams {
        noise: NoiseParams {
            mean: 0.0,
            std_dev: -1.0,
        },
        ..PipelineParams::default()
    };

    let err = generate(&build_spec(7, pipeline)).unwrap_err();
    assert_eq!(err.code(), "DSP_001");
}
