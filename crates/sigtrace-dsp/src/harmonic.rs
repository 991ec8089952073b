//! Harmonic signal generation.

use std::f64::consts::PI;

use sigtrace_spec::SignalParams;

use crate::grid::TimeGrid;

/// Generates `amplitude * sin(2*pi*frequency*t + phase)` for every grid
/// point.
///
/// Pure and deterministic; finite inputs are enforced upstream by spec
/// validation, so there is no error path here.
pub fn harmonic(grid: &TimeGrid, params: &SignalParams) -> Vec<f64> {
    let omega = 2.0 * PI * params.frequency;
    grid.times()
        .iter()
        .map(|&t| params.amplitude * (omega * t + params.phase).sin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_signal() -> SignalParams {
        SignalParams {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
        }
    }

    #[test]
    fn test_output_length_matches_grid() {
        let grid = TimeGrid::new(0.0, 10.0, 1000).unwrap();
        let samples = harmonic(&grid, &unit_signal());
        assert_eq!(samples.len(), grid.len());
    }

    #[test]
    fn test_zero_phase_starts_at_zero() {
        let grid = TimeGrid::new(0.0, 10.0, 1000).unwrap();
        let samples = harmonic(&grid, &unit_signal());
        assert!(samples[0].abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_bounds() {
        let grid = TimeGrid::new(0.0, 10.0, 1000).unwrap();
        let params = SignalParams {
            amplitude: 2.5,
            frequency: 3.0,
            phase: 0.7,
        };
        let samples = harmonic(&grid, &params);
        for s in &samples {
            assert!(s.abs() <= 2.5 + 1e-12);
        }
        // A few full cycles should get close to the peak.
        let peak = samples.iter().cloned().fold(f64::MIN, f64::max);
        assert!(peak > 2.4);
    }

    #[test]
    fn test_phase_shift() {
        // phase = pi/2 turns sine into cosine: value at t=0 is the amplitude.
        let grid = TimeGrid::new(0.0, 1.0, 100).unwrap();
        let params = SignalParams {
            amplitude: 1.0,
            frequency: 1.0,
            phase: PI / 2.0,
        };
        let samples = harmonic(&grid, &params);
        assert!((samples[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_quarter_period_value() {
        // 1 Hz sine sampled at t = 0.25 is exactly sin(pi/2) = 1.
        let grid = TimeGrid::new(0.0, 1.0, 5).unwrap();
        let samples = harmonic(&grid, &unit_signal());
        assert!((samples[1] - 1.0).abs() < 1e-12);
        assert!(samples[2].abs() < 1e-12);
        assert!((samples[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let grid = TimeGrid::new(0.0, 10.0, 500).unwrap();
        let a = harmonic(&grid, &unit_signal());
        let b = harmonic(&grid, &unit_signal());
        assert_eq!(a, b);
    }
}
