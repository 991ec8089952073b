//! Spec validation logic.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::output::OutputKind;
use crate::params::{FilterParams, NoiseParams, PipelineParams, SignalParams, TimeGridParams};
use crate::spec::{TraceSpec, SPEC_VERSION};

/// Regex pattern for valid trace_id.
/// Format: starts with lowercase letter, followed by 2-63 lowercase letters,
/// digits, underscores, or hyphens.
const TRACE_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

/// Threshold for warning about seed near overflow boundary.
const SEED_OVERFLOW_WARNING_THRESHOLD: u32 = u32::MAX - 1000;

/// Fraction of the Nyquist limit above which a cutoff draws a warning.
const CUTOFF_NYQUIST_WARNING_RATIO: f64 = 0.9;

static TRACE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn trace_id_regex() -> &'static Regex {
    TRACE_ID_REGEX.get_or_init(|| Regex::new(TRACE_ID_PATTERN).expect("invalid regex pattern"))
}

/// Checks whether a string is a valid trace_id.
pub fn is_valid_trace_id(id: &str) -> bool {
    trace_id_regex().is_match(id)
}

/// Checks whether an output path is safe (relative, no traversal).
pub fn is_safe_output_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    // Reject absolute paths and Windows drive prefixes.
    if path.starts_with('/') || path.starts_with('\\') || path.contains(':') {
        return false;
    }
    // Reject any `..` component.
    !path
        .split(['/', '\\'])
        .any(|component| component == "..")
}

/// Validates a spec and returns a validation result.
///
/// # Example
/// ```
/// use sigtrace_spec::{OutputFormat, OutputSpec, TraceSpec};
/// use sigtrace_spec::validation::validate_spec;
///
/// let spec = TraceSpec::builder("test-trace-01")
///     .seed(42)
///     .output(OutputSpec::primary(OutputFormat::Csv, "traces/test.csv"))
///     .build();
///
/// let result = validate_spec(&spec);
/// assert!(result.is_ok());
/// ```
pub fn validate_spec(spec: &TraceSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_spec_version(spec, &mut result);
    validate_trace_id(spec, &mut result);
    validate_outputs(spec, &mut result);
    validate_pipeline(&spec.pipeline, &mut result);

    check_warnings(spec, &mut result);

    result
}

/// Validates the spec version.
fn validate_spec_version(spec: &TraceSpec, result: &mut ValidationResult) {
    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }
}

/// Validates the trace_id format.
fn validate_trace_id(spec: &TraceSpec, result: &mut ValidationResult) {
    if !is_valid_trace_id(&spec.trace_id) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTraceId,
            format!(
                "trace_id must match pattern '{}', got '{}'",
                TRACE_ID_PATTERN, spec.trace_id
            ),
            "trace_id",
        ));
    }
}

/// Validates the outputs array.
fn validate_outputs(spec: &TraceSpec, result: &mut ValidationResult) {
    if spec.outputs.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoOutputs,
            "outputs array must have at least one entry",
            "outputs",
        ));
        return;
    }

    if !spec.outputs.iter().any(|o| o.kind == OutputKind::Primary) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoPrimaryOutput,
            "no primary output declared",
            "outputs",
        ));
    }

    let mut seen_paths: HashSet<&str> = HashSet::new();
    for (i, output) in spec.outputs.iter().enumerate() {
        let path_field = format!("outputs[{}].path", i);

        if !seen_paths.insert(output.path.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateOutputPath,
                format!("duplicate output path '{}'", output.path),
                path_field.clone(),
            ));
        }

        if !is_safe_output_path(&output.path) {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnsafeOutputPath,
                format!(
                    "output path '{}' must be relative and free of '..'",
                    output.path
                ),
                path_field.clone(),
            ));
        }

        if !output.extension_matches() {
            result.add_error(ValidationError::with_path(
                ErrorCode::PathFormatMismatch,
                format!(
                    "output path '{}' does not end in '.{}'",
                    output.path,
                    output.format.extension()
                ),
                path_field,
            ));
        }
    }
}

/// Validates the pipeline parameter block.
fn validate_pipeline(pipeline: &PipelineParams, result: &mut ValidationResult) {
    validate_time_grid(&pipeline.time_grid, result);
    validate_signal(&pipeline.signal, result);
    validate_noise(&pipeline.noise, result);

    // Filter checks need the grid's sampling rate; skip the Nyquist bound if
    // the grid itself is invalid.
    let sample_rate = grid_sample_rate(&pipeline.time_grid);
    validate_filter(&pipeline.filter, &pipeline.time_grid, sample_rate, result);
}

/// Derived sampling rate, if the grid is well-formed.
fn grid_sample_rate(grid: &TimeGridParams) -> Option<f64> {
    if grid.num_points < 2 || !grid.start.is_finite() || !grid.end.is_finite() {
        return None;
    }
    let span = grid.end - grid.start;
    if span <= 0.0 {
        return None;
    }
    Some((grid.num_points - 1) as f64 / span)
}

fn validate_time_grid(grid: &TimeGridParams, result: &mut ValidationResult) {
    if !grid.start.is_finite() || !grid.end.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimeGrid,
            format!("grid bounds must be finite, got [{}, {}]", grid.start, grid.end),
            "pipeline.time_grid",
        ));
        return;
    }
    if grid.end <= grid.start {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimeGrid,
            format!(
                "grid end must be greater than start, got [{}, {}]",
                grid.start, grid.end
            ),
            "pipeline.time_grid",
        ));
    }
    if grid.num_points < 2 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimeGrid,
            format!("num_points must be at least 2, got {}", grid.num_points),
            "pipeline.time_grid.num_points",
        ));
    }
}

fn validate_signal(signal: &SignalParams, result: &mut ValidationResult) {
    for (name, value) in [
        ("amplitude", signal.amplitude),
        ("frequency", signal.frequency),
        ("phase", signal.phase),
    ] {
        if !value.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidSignalParams,
                format!("{} must be finite, got {}", name, value),
                format!("pipeline.signal.{}", name),
            ));
        }
    }
}

fn validate_noise(noise: &NoiseParams, result: &mut ValidationResult) {
    if !noise.mean.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidNoiseParams,
            format!("mean must be finite, got {}", noise.mean),
            "pipeline.noise.mean",
        ));
    }
    if !noise.std_dev.is_finite() || noise.std_dev < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidNoiseParams,
            format!("std_dev must be non-negative, got {}", noise.std_dev),
            "pipeline.noise.std_dev",
        ));
    }
}

fn validate_filter(
    filter: &FilterParams,
    grid: &TimeGridParams,
    sample_rate: Option<f64>,
    result: &mut ValidationResult,
) {
    match filter {
        FilterParams::Butterworth { cutoff_hz, order } => {
            if !cutoff_hz.is_finite() || *cutoff_hz <= 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFilterParams,
                    format!("cutoff_hz must be positive, got {}", cutoff_hz),
                    "pipeline.filter.cutoff_hz",
                ));
            } else if let Some(fs) = sample_rate {
                let nyquist = fs / 2.0;
                if *cutoff_hz >= nyquist {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::InvalidFilterParams,
                        format!(
                            "cutoff_hz {} is at or above the Nyquist limit {}",
                            cutoff_hz, nyquist
                        ),
                        "pipeline.filter.cutoff_hz",
                    ));
                } else if *cutoff_hz >= CUTOFF_NYQUIST_WARNING_RATIO * nyquist {
                    result.add_warning(ValidationWarning::with_path(
                        WarningCode::CutoffNearNyquist,
                        format!(
                            "cutoff_hz {} is close to the Nyquist limit {}",
                            cutoff_hz, nyquist
                        ),
                        "pipeline.filter.cutoff_hz",
                    ));
                }
            }
            if *order == 0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFilterParams,
                    "order must be at least 1",
                    "pipeline.filter.order",
                ));
            }
        }
        FilterParams::MovingAverage { window_size } => {
            if *window_size == 0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFilterParams,
                    "window_size must be at least 1",
                    "pipeline.filter.window_size",
                ));
            } else if *window_size > grid.num_points {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFilterParams,
                    format!(
                        "window_size {} exceeds the grid length {}",
                        window_size, grid.num_points
                    ),
                    "pipeline.filter.window_size",
                ));
            }
        }
    }
}

/// Emits non-fatal warnings.
fn check_warnings(spec: &TraceSpec, result: &mut ValidationResult) {
    if spec.description.is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "spec has no description",
            "description",
        ));
    }

    if spec.seed >= SEED_OVERFLOW_WARNING_THRESHOLD {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SeedNearOverflow,
            format!(
                "seed {} is close to the maximum value ({})",
                spec.seed,
                u32::MAX
            ),
            "seed",
        ));
    }
}
