//! Generate command implementation
//!
//! Validates a spec file, runs the signal pipeline, and writes every
//! declared output artifact.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use sigtrace_dsp::{generate_from_params, TraceSet};
use sigtrace_spec::{
    canonical_spec_hash, validate_spec, OutputFormat, OutputKind, TraceSpec,
};

use crate::input::{load_spec, LoadResult};

use super::validate::validation_to_json;

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the spec file (JSON)
/// * `out_root` - Output root directory (default: current directory)
/// * `seed` - Optional override of the spec's seed
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on validation or generation failure
pub fn run(
    spec_path: &str,
    out_root: Option<&str>,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    let ok = if json_output {
        run_json(spec_path, out_root, seed)?
    } else {
        run_human(spec_path, out_root, seed)?
    };

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Run generate with human-readable (colored) output
fn run_human(spec_path: &str, out_root: Option<&str>, seed: Option<u32>) -> Result<bool> {
    println!("{} {}", "Generating:".cyan().bold(), spec_path);

    let LoadResult { spec, .. } = load_spec(Path::new(spec_path))?;
    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());

    let result = validate_spec(&spec);
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    if !result.is_ok() {
        for error in &result.errors {
            println!("  {} {}", "x".red(), error);
        }
        println!(
            "{} {} ({} error(s))",
            "FAILED".red().bold(),
            spec.trace_id,
            result.errors.len()
        );
        return Ok(false);
    }

    let effective_seed = seed.unwrap_or(spec.seed);
    if effective_seed != spec.seed {
        println!("{} {} (spec: {})", "Seed:".dimmed(), effective_seed, spec.seed);
    }

    let traces = generate_from_params(&spec.pipeline, effective_seed)
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))?;

    let written = write_outputs(&spec, &traces, out_root, effective_seed, &spec_hash)?;
    for path in &written {
        println!("  {} {}", "wrote".green(), path.display());
    }

    println!(
        "{} {} ({} samples, sample rate {:.4})",
        "OK".green().bold(),
        spec.trace_id,
        traces.len(),
        sample_rate(&traces)
    );
    Ok(true)
}

/// Run generate with machine-readable JSON output
fn run_json(spec_path: &str, out_root: Option<&str>, seed: Option<u32>) -> Result<bool> {
    let loaded = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!(
                "{}",
                json!({
                    "ok": false,
                    "error": {"kind": "load", "message": format!("{:#}", e)},
                })
            );
            return Ok(false);
        }
    };

    let spec_hash = canonical_spec_hash(&loaded.spec).unwrap_or_else(|_| "unknown".to_string());

    let result = validate_spec(&loaded.spec);
    if !result.is_ok() {
        println!("{}", validation_to_json(&loaded, &spec_hash, &result));
        return Ok(false);
    }

    let spec = &loaded.spec;
    let effective_seed = seed.unwrap_or(spec.seed);

    let traces = match generate_from_params(&spec.pipeline, effective_seed) {
        Ok(traces) => traces,
        Err(e) => {
            println!(
                "{}",
                json!({
                    "ok": false,
                    "trace_id": spec.trace_id,
                    "error": {"kind": e.category(), "code": e.code(), "message": e.to_string()},
                })
            );
            return Ok(false);
        }
    };

    let written = write_outputs(spec, &traces, out_root, effective_seed, &spec_hash)?;

    println!(
        "{}",
        json!({
            "ok": true,
            "trace_id": spec.trace_id,
            "spec_hash": spec_hash,
            "seed": effective_seed,
            "num_samples": traces.len(),
            "sample_rate": sample_rate(&traces),
            "outputs": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        })
    );
    Ok(true)
}

/// Derived sampling rate of a trace set.
fn sample_rate(traces: &TraceSet) -> f64 {
    1.0 / (traces.times[1] - traces.times[0])
}

/// Full trace payload for primary JSON outputs.
#[derive(Debug, Serialize)]
struct TracePayload<'a> {
    trace_id: &'a str,
    seed: u32,
    spec_hash: &'a str,
    sample_rate: f64,
    num_samples: usize,
    times: &'a [f64],
    clean: &'a [f64],
    noisy: &'a [f64],
    filtered: &'a [f64],
}

/// Sidecar payload for metadata outputs: everything but the series.
#[derive(Debug, Serialize)]
struct TraceMetadata<'a> {
    trace_id: &'a str,
    seed: u32,
    spec_hash: &'a str,
    sample_rate: f64,
    num_samples: usize,
}

/// Writes every declared output under the output root, creating parent
/// directories as needed. Returns the written paths.
fn write_outputs(
    spec: &TraceSpec,
    traces: &TraceSet,
    out_root: Option<&str>,
    seed: u32,
    spec_hash: &str,
) -> Result<Vec<PathBuf>> {
    let root = Path::new(out_root.unwrap_or("."));
    let mut written = Vec::with_capacity(spec.outputs.len());

    for output in &spec.outputs {
        let path = root.join(&output.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        let contents = match (output.kind, output.format) {
            (_, OutputFormat::Csv) => render_csv(traces),
            (OutputKind::Metadata, OutputFormat::Json) => {
                serde_json::to_string_pretty(&TraceMetadata {
                    trace_id: &spec.trace_id,
                    seed,
                    spec_hash,
                    sample_rate: sample_rate(traces),
                    num_samples: traces.len(),
                })?
            }
            (_, OutputFormat::Json) => serde_json::to_string_pretty(&TracePayload {
                trace_id: &spec.trace_id,
                seed,
                spec_hash,
                sample_rate: sample_rate(traces),
                num_samples: traces.len(),
                times: &traces.times,
                clean: &traces.clean,
                noisy: &traces.noisy,
                filtered: &traces.filtered,
            })?,
        };

        fs::write(&path, contents)
            .with_context(|| format!("failed to write output: {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

/// Renders the three traces as `time,clean,noisy,filtered` rows.
fn render_csv(traces: &TraceSet) -> String {
    let mut out = String::with_capacity(traces.len() * 48);
    out.push_str("time,clean,noisy,filtered\n");
    for i in 0..traces.len() {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            traces.times[i], traces.clean[i], traces.noisy[i], traces.filtered[i]
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const FULL_SPEC: &str = r#"{
        "spec_version": 1,
        "trace_id": "generate-test-01",
        "seed": 42,
        "description": "generate command test",
        "outputs": [
            {"kind": "primary", "format": "csv", "path": "traces/test.csv"},
            {"kind": "primary", "format": "json", "path": "traces/test.json"},
            {"kind": "metadata", "format": "json", "path": "traces/test.meta.json"}
        ],
        "pipeline": {
            "time_grid": {"start": 0.0, "end": 10.0, "num_points": 100},
            "filter": {"type": "butterworth", "cutoff_hz": 3.0, "order": 5}
        }
    }"#;

    fn write_spec(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(&path, content).unwrap();
        let path_str = path.to_string_lossy().into_owned();
        (dir, path_str)
    }

    #[test]
    fn test_generate_writes_all_outputs() {
        let (dir, spec_path) = write_spec(FULL_SPEC);
        let out_root = dir.path().join("out");

        let ok = run_human(&spec_path, Some(out_root.to_str().unwrap()), None).unwrap();
        assert!(ok);

        assert!(out_root.join("traces/test.csv").exists());
        assert!(out_root.join("traces/test.json").exists());
        assert!(out_root.join("traces/test.meta.json").exists());
    }

    #[test]
    fn test_csv_output_shape() {
        let (dir, spec_path) = write_spec(FULL_SPEC);
        let out_root = dir.path().join("out");

        run_human(&spec_path, Some(out_root.to_str().unwrap()), None).unwrap();

        let csv = fs::read_to_string(out_root.join("traces/test.csv")).unwrap();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines[0], "time,clean,noisy,filtered");
        assert_eq!(lines.len(), 101); // header + 100 samples
        assert_eq!(lines[1].split(',').count(), 4);
    }

    #[test]
    fn test_json_output_parses_back() {
        let (dir, spec_path) = write_spec(FULL_SPEC);
        let out_root = dir.path().join("out");

        run_json(&spec_path, Some(out_root.to_str().unwrap()), None).unwrap();

        let raw = fs::read_to_string(out_root.join("traces/test.json")).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(payload["trace_id"], "generate-test-01");
        assert_eq!(payload["seed"], 42);
        assert_eq!(payload["num_samples"], 100);
        assert_eq!(payload["clean"].as_array().unwrap().len(), 100);
        assert_eq!(payload["filtered"].as_array().unwrap().len(), 100);

        let meta_raw = fs::read_to_string(out_root.join("traces/test.meta.json")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&meta_raw).unwrap();
        assert!(meta.get("clean").is_none());
        assert_eq!(meta["num_samples"], 100);
    }

    #[test]
    fn test_generation_is_deterministic_across_runs() {
        let (dir, spec_path) = write_spec(FULL_SPEC);
        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");

        run_human(&spec_path, Some(out_a.to_str().unwrap()), None).unwrap();
        run_human(&spec_path, Some(out_b.to_str().unwrap()), None).unwrap();

        let a = fs::read_to_string(out_a.join("traces/test.csv")).unwrap();
        let b = fs::read_to_string(out_b.join("traces/test.csv")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_override_changes_output() {
        let (dir, spec_path) = write_spec(FULL_SPEC);
        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");

        run_human(&spec_path, Some(out_a.to_str().unwrap()), None).unwrap();
        run_human(&spec_path, Some(out_b.to_str().unwrap()), Some(7)).unwrap();

        let a = fs::read_to_string(out_a.join("traces/test.csv")).unwrap();
        let b = fs::read_to_string(out_b.join("traces/test.csv")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_spec_fails_before_writing() {
        let (dir, spec_path) = write_spec(&FULL_SPEC.replace("generate-test-01", "BAD"));
        let out_root = dir.path().join("out");

        let ok = run_human(&spec_path, Some(out_root.to_str().unwrap()), None).unwrap();
        assert!(!ok);
        assert!(!out_root.exists());
    }

    #[test]
    fn test_invalid_spec_json_mode() {
        let (dir, spec_path) = write_spec(&FULL_SPEC.replace("\"seed\": 42", "\"seed\": 42, \"pipeline2\": 1"));
        let out_root = dir.path().join("out");

        // Unknown field fails at load; the command still reports cleanly.
        let ok = run_json(&spec_path, Some(out_root.to_str().unwrap()), None).unwrap();
        assert!(!ok);
    }
}
