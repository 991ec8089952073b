//! Output specification types.

use serde::{Deserialize, Serialize};

/// Output kind (what role the output serves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// Primary trace output (the main generated file).
    Primary,
    /// Metadata sidecar file.
    Metadata,
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Primary => write!(f, "primary"),
            OutputKind::Metadata => write!(f, "metadata"),
        }
    }
}

/// Output format (file type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Comma-separated `time,clean,noisy,filtered` rows.
    Csv,
    /// JSON trace payload with metadata.
    Json,
}

impl OutputFormat {
    /// Returns the expected file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Specification for a single output artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    /// The kind of output (primary, metadata).
    pub kind: OutputKind,
    /// The file format.
    pub format: OutputFormat,
    /// Relative path under the output root.
    pub path: String,
}

impl OutputSpec {
    /// Creates a new output specification.
    pub fn new(kind: OutputKind, format: OutputFormat, path: impl Into<String>) -> Self {
        Self {
            kind,
            format,
            path: path.into(),
        }
    }

    /// Creates a primary output specification.
    pub fn primary(format: OutputFormat, path: impl Into<String>) -> Self {
        Self::new(OutputKind::Primary, format, path)
    }

    /// Creates a metadata output specification.
    pub fn metadata(path: impl Into<String>) -> Self {
        Self::new(OutputKind::Metadata, OutputFormat::Json, path)
    }

    /// Extracts the file extension from the path.
    pub fn path_extension(&self) -> Option<&str> {
        self.path.rsplit('.').next()
    }

    /// Checks if the path extension matches the format.
    pub fn extension_matches(&self) -> bool {
        self.path_extension()
            .map(|ext| ext.eq_ignore_ascii_case(self.format.extension()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");

        let parsed: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, OutputFormat::Json);
    }

    #[test]
    fn test_extension_matches() {
        let out = OutputSpec::primary(OutputFormat::Csv, "traces/demo.csv");
        assert!(out.extension_matches());

        let mismatched = OutputSpec::primary(OutputFormat::Csv, "traces/demo.json");
        assert!(!mismatched.extension_matches());

        let upper = OutputSpec::primary(OutputFormat::Json, "traces/DEMO.JSON");
        assert!(upper.extension_matches());
    }

    #[test]
    fn test_metadata_helper() {
        let out = OutputSpec::metadata("traces/demo.meta.json");
        assert_eq!(out.kind, OutputKind::Metadata);
        assert_eq!(out.format, OutputFormat::Json);
    }
}
