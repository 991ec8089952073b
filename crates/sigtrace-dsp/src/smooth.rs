//! Moving-average smoothing.

use crate::error::{DspError, DspResult};

/// Same-length centered moving average with zero-padded edges.
///
/// Equivalent to convolving with a `ones(w)/w` kernel in "same" mode: each
/// output element averages a window of `window_size` inputs centered at
/// that index (for even windows the extra tap falls on the earlier side),
/// and positions outside the sequence count as zero. The divisor is always
/// `window_size`, so edge averages are biased toward zero; hosts plotting
/// these traces expect exactly that edge behavior.
///
/// `window_size = 1` returns the input unchanged.
///
/// # Errors
/// `InvalidParameter` when `window_size` is zero or exceeds the sequence
/// length.
pub fn moving_average(data: &[f64], window_size: usize) -> DspResult<Vec<f64>> {
    if window_size == 0 {
        return Err(DspError::invalid_param(
            "window_size",
            "must be at least 1",
        ));
    }
    if window_size > data.len() {
        return Err(DspError::invalid_param(
            "window_size",
            format!(
                "window {} exceeds the sequence length {}",
                window_size,
                data.len()
            ),
        ));
    }

    // Taps before (inclusive of) and after the center, matching the
    // even-window alignment of `mode='same'`.
    let half_after = (window_size - 1) / 2;
    let half_before = window_size - 1 - half_after;
    let scale = 1.0 / window_size as f64;

    let out = (0..data.len())
        .map(|i| {
            let lo = i.saturating_sub(half_before);
            let hi = (i + half_after).min(data.len() - 1);
            data[lo..=hi].iter().sum::<f64>() * scale
        })
        .collect();

    Ok(out)
}
