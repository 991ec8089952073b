//! Validate command implementation
//!
//! Validates a spec file and reports errors and warnings.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use sigtrace_spec::{canonical_spec_hash, validate_spec, ValidationResult};

use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the spec file (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    let valid = if json_output {
        run_json(spec_path)?
    } else {
        run_human(spec_path)?
    };

    if valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Run validate with human-readable (colored) output
fn run_human(spec_path: &str) -> Result<bool> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    println!(
        "{} {}",
        "Spec hash:".dimmed(),
        spec_hash.get(..16).unwrap_or(&spec_hash)
    );

    let result = validate_spec(&spec);

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }

    if result.is_ok() {
        println!(
            "{} {} ({} warning(s))",
            "OK".green().bold(),
            spec.trace_id,
            result.warnings.len()
        );
        Ok(true)
    } else {
        println!(
            "{} {} ({} error(s))",
            "FAILED".red().bold(),
            spec.trace_id,
            result.errors.len()
        );
        Ok(false)
    }
}

/// Run validate with machine-readable JSON output
fn run_json(spec_path: &str) -> Result<bool> {
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

    println!("{}", validation_to_json(&loaded, &spec_hash, &result));

    Ok(result.is_ok())
}

/// Builds the JSON diagnostics envelope for a validation run.
pub(crate) fn validation_to_json(
    loaded: &LoadResult,
    spec_hash: &str,
    result: &ValidationResult,
) -> serde_json::Value {
    json!({
        "ok": result.is_ok(),
        "trace_id": loaded.spec.trace_id,
        "spec_hash": spec_hash,
        "source_hash": loaded.source_hash,
        "errors": result.errors.iter().map(|e| json!({
            "code": e.code.code(),
            "message": e.message,
            "path": e.path,
        })).collect::<Vec<_>>(),
        "warnings": result.warnings.iter().map(|w| json!({
            "code": w.code.code(),
            "message": w.message,
            "path": w.path,
        })).collect::<Vec<_>>(),
    })
}
