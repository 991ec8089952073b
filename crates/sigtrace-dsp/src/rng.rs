//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the pipeline flows through this module to ensure
//! deterministic output: the same spec and seed always produce the same
//! traces. The noise stream gets its own derived seed so it stays
//! independent of any other randomness (e.g. parameter randomization).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use sigtrace_spec::derive_component_seed;

/// Component key for the noise sample stream.
const NOISE_STREAM_KEY: &str = "noise";

/// Component key for the parameter-randomization stream.
const PARAMS_STREAM_KEY: &str = "params";

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates the RNG for the noise sample stream of a spec seed.
pub fn create_noise_rng(base_seed: u32) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, NOISE_STREAM_KEY))
}

/// Creates the RNG for the parameter-randomization stream of a spec seed.
pub fn create_params_rng(base_seed: u32) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, PARAMS_STREAM_KEY))
}
