//! Main spec types.

use serde::{Deserialize, Serialize};

use crate::output::{OutputFormat, OutputKind, OutputSpec};
use crate::params::PipelineParams;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Maximum valid seed value (2^32 - 1).
pub const MAX_SEED: u32 = u32::MAX;

/// A sigtrace canonical spec.
///
/// This is the top-level document describing one trace-generation request:
/// contract fields (identity, seed, declared outputs) plus the pipeline
/// parameters that drive the numeric core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceSpec {
    /// Schema version; must be 1 for v1 specs.
    pub spec_version: u32,

    /// Stable identifier for the trace.
    /// Format: `[a-z][a-z0-9_-]{2,63}`
    pub trace_id: String,

    /// RNG seed for deterministic noise generation.
    /// Range: 0 to 2^32-1 (4294967295).
    pub seed: u32,

    /// Expected output artifacts.
    pub outputs: Vec<OutputSpec>,

    /// Pipeline parameters (grid, signal, noise, filter).
    pub pipeline: PipelineParams,

    /// Human-readable description of the trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Semantic tags for filtering/search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TraceSpec {
    /// Creates a new spec builder.
    pub fn builder(trace_id: impl Into<String>) -> TraceSpecBuilder {
        TraceSpecBuilder::new(trace_id)
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the spec to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns true if the spec has at least one primary output.
    pub fn has_primary_output(&self) -> bool {
        self.outputs.iter().any(|o| o.kind == OutputKind::Primary)
    }

    /// Returns all primary outputs.
    pub fn primary_outputs(&self) -> impl Iterator<Item = &OutputSpec> {
        self.outputs
            .iter()
            .filter(|o| o.kind == OutputKind::Primary)
    }
}

/// Builder for constructing TraceSpec instances.
#[derive(Debug, Clone)]
pub struct TraceSpecBuilder {
    trace_id: String,
    seed: u32,
    outputs: Vec<OutputSpec>,
    pipeline: PipelineParams,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

impl TraceSpecBuilder {
    /// Creates a new spec builder.
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            seed: 0,
            outputs: Vec::new(),
            pipeline: PipelineParams::default(),
            description: None,
            tags: None,
        }
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Adds an output.
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Adds a primary CSV output at the given path.
    pub fn csv_output(self, path: impl Into<String>) -> Self {
        self.output(OutputSpec::primary(OutputFormat::Csv, path))
    }

    /// Sets the pipeline parameters.
    pub fn pipeline(mut self, pipeline: PipelineParams) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Builds the spec.
    pub fn build(self) -> TraceSpec {
        TraceSpec {
            spec_version: SPEC_VERSION,
            trace_id: self.trace_id,
            seed: self.seed,
            outputs: self.outputs,
            pipeline: self.pipeline,
            description: self.description,
            tags: self.tags,
        }
    }
}
