//! Spec file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sigtrace_spec::{blake3_hash_str, TraceSpec};

/// A loaded spec plus provenance of its source file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed spec.
    pub spec: TraceSpec,
    /// BLAKE3 hash of the raw source text.
    pub source_hash: String,
}

/// Loads and parses a JSON spec file.
pub fn load_spec(path: &Path) -> Result<LoadResult> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file: {}", path.display()))?;

    let source_hash = blake3_hash_str(&raw);

    let spec = TraceSpec::from_json(&raw)
        .with_context(|| format!("failed to parse spec file: {}", path.display()))?;

    Ok(LoadResult { spec, source_hash })
}
