//! sigtrace Canonical Spec Library
//!
//! This crate provides types, validation, and hashing for sigtrace trace
//! specs. Specs are JSON documents that describe one deterministic
//! trace-generation request: a time grid, a harmonic signal, additive
//! Gaussian noise, a smoothing filter, and the declared output artifacts.
//!
//! # Overview
//!
//! - **Contract fields**: `trace_id`, `seed`, and `outputs`
//! - **Pipeline**: grid/signal/noise/filter parameters for the numeric core
//!
//! # Example
//!
//! ```
//! use sigtrace_spec::{OutputFormat, OutputSpec, TraceSpec};
//! use sigtrace_spec::validation::validate_spec;
//! use sigtrace_spec::hash::canonical_spec_hash;
//!
//! let spec = TraceSpec::builder("noisy-sine-01")
//!     .seed(42)
//!     .description("Noisy 1 Hz sine with low-pass filter")
//!     .output(OutputSpec::primary(OutputFormat::Csv, "traces/noisy_sine.csv"))
//!     .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`output`]: Output specification types (kind, format, path)
//! - [`params`]: Pipeline parameter types
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing and seed derivation

pub mod error;
pub mod hash;
pub mod output;
pub mod params;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::{blake3_hash, blake3_hash_str, canonical_spec_hash, derive_component_seed};
pub use output::{OutputFormat, OutputKind, OutputSpec};
pub use params::{FilterParams, NoiseParams, PipelineParams, SignalParams, TimeGridParams};
pub use spec::{TraceSpec, TraceSpecBuilder, MAX_SEED, SPEC_VERSION};
pub use validation::{is_safe_output_path, is_valid_trace_id, validate_spec};
