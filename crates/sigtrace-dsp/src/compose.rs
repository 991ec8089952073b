//! Noisy-signal composition.

use rand_pcg::Pcg32;
use sigtrace_spec::NoiseParams;

use crate::error::{DspError, DspResult};
use crate::grid::TimeGrid;
use crate::noise::NoiseSample;

/// Adds noise to a clean harmonic signal.
///
/// Three-way behavior:
/// 1. `show_noise` with a supplied `sample` — elementwise
///    `harmonic + sample`, reusing the draws (no fresh randomness);
/// 2. `show_noise` without a sample — a fresh [`NoiseSample`] is drawn
///    from `rng` and added;
/// 3. `!show_noise` — the clean harmonic is returned unchanged, regardless
///    of any supplied sample.
///
/// # Errors
/// `InvalidParameter` if the harmonic or a supplied sample does not match
/// the grid length, or if the noise parameters are invalid when a fresh
/// draw is needed.
pub fn compose(
    harmonic: &[f64],
    grid: &TimeGrid,
    params: &NoiseParams,
    show_noise: bool,
    sample: Option<&NoiseSample>,
    rng: &mut Pcg32,
) -> DspResult<Vec<f64>> {
    if harmonic.len() != grid.len() {
        return Err(DspError::invalid_param(
            "harmonic",
            format!(
                "length {} does not match grid length {}",
                harmonic.len(),
                grid.len()
            ),
        ));
    }

    if !show_noise {
        return Ok(harmonic.to_vec());
    }

    match sample {
        Some(sample) => {
            if sample.len() != harmonic.len() {
                return Err(DspError::invalid_param(
                    "noise_sample",
                    format!(
                        "length {} does not match grid length {}",
                        sample.len(),
                        harmonic.len()
                    ),
                ));
            }
            Ok(add(harmonic, sample.values()))
        }
        None => {
            let fresh = NoiseSample::generate(grid, params, rng)?;
            Ok(add(harmonic, fresh.values()))
        }
    }
}

fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, n)| x + n).collect()
}
