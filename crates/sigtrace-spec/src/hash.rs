//! Canonical hashing and seed derivation.
//!
//! This module implements the determinism policy for sigtrace:
//! - Spec canonicalization using RFC 8785 (JCS)
//! - BLAKE3 hashing for spec hashes
//! - Seed derivation for independent random streams

use crate::error::SpecError;
use crate::spec::TraceSpec;

/// Computes the canonical BLAKE3 hash of a spec.
///
/// The hash is computed as:
/// ```text
/// spec_hash = hex(BLAKE3(JCS(spec_json)))
/// ```
///
/// Where JCS is JSON Canonicalization Scheme per RFC 8785.
///
/// # Example
/// ```
/// use sigtrace_spec::{OutputFormat, OutputSpec, TraceSpec};
/// use sigtrace_spec::hash::canonical_spec_hash;
///
/// let spec = TraceSpec::builder("test-01")
///     .seed(42)
///     .output(OutputSpec::primary(OutputFormat::Csv, "traces/test.csv"))
///     .build();
///
/// let hash = canonical_spec_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &TraceSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value)?;
    let hash = blake3::hash(canonical.as_bytes());
    Ok(hash.to_hex().to_string())
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// This produces a deterministic JSON string where:
/// - Object keys are sorted lexicographically
/// - No whitespace between tokens
/// - Numbers are formatted per IEEE 754
/// - Strings use minimal escaping
pub fn canonicalize_json(value: &serde_json::Value) -> Result<String, SpecError> {
    Ok(canonicalize_value(value))
}

/// Internal canonicalization function.
fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            // Sort keys lexicographically
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    let v = obj.get(*k).unwrap();
                    format!("{}:{}", format_jcs_string(k), canonicalize_value(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Formats a number according to JCS rules.
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(f) = n.as_f64() {
        if f.is_nan() || f.is_infinite() {
            return "null".to_string(); // JCS treats these as null
        }
        if f == 0.0 {
            return "0".to_string();
        }
        if f.fract() == 0.0 && f.abs() < 1e15 {
            // Integer-like float
            return format!("{}", f as i64);
        }
        let s = format!("{}", f);
        // Remove unnecessary trailing zeros and decimal points
        if s.contains('.') && !s.contains('e') && !s.contains('E') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            return trimmed.to_string();
        }
        s
    } else {
        "null".to_string()
    }
}

/// Formats a string according to JCS rules.
fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                // Control characters
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Derives a seed for a specific component from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the component key,
/// producing an independent seed for each random stream:
///
/// ```text
/// component_seed = truncate_u32(BLAKE3(base_seed || key))
/// ```
///
/// # Example
/// ```
/// use sigtrace_spec::hash::derive_component_seed;
///
/// let base = 42u32;
/// let noise_seed = derive_component_seed(base, "noise");
/// let params_seed = derive_component_seed(base, "params");
/// assert_ne!(noise_seed, params_seed);
/// ```
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    // Concatenate base_seed (as little-endian bytes) and key (as UTF-8)
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Computes a BLAKE3 hash of arbitrary data.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
