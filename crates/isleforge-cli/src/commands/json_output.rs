//! JSON output types for the `--json` flag.
//!
//! Every command prints exactly one JSON document to stdout when `--json` is
//! set. Diagnostics go to stderr.

use isleforge_spec::{HeightmapStats, SynthesisReport, ValidationError, ValidationWarning};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Recipe validation failures pass through their own `H0xx` codes.
pub mod error_codes {
    /// Recipe or parameter file could not be loaded
    pub const LOAD: &str = "CLI_001";
    /// Unknown recipe preset
    pub const UNKNOWN_PRESET: &str = "CLI_002";
    /// Synthesis failed after validation
    pub const SYNTHESIS: &str = "CLI_003";
    /// Noise configuration rejected
    pub const NOISE_CONFIG: &str = "CLI_004";
}

/// A structured diagnostic in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonDiagnostic {
    /// Stable code (e.g. "CLI_001", "H010", "W002")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// JSON path to the offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonDiagnostic {
    /// Creates a diagnostic without a path.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonDiagnostic {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

impl From<&ValidationWarning> for JsonDiagnostic {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `isleforge generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    /// Whether synthesis completed
    pub success: bool,
    /// Errors that stopped the run
    pub errors: Vec<JsonDiagnostic>,
    /// Synthesis result, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Successful synthesis outcome.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Whether the seed was drawn at random
    pub random_seed: bool,
    /// Per-pass timings, digest and recipe hash
    pub report: SynthesisReport,
    /// Elevation summary of the final grid
    pub stats: HeightmapStats,
    /// ASCII preview lines, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<String>>,
}

impl GenerateOutput {
    /// Creates a successful output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonDiagnostic>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Output of `isleforge validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Whether the recipe is valid
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonDiagnostic>,
    /// Validation warnings
    pub warnings: Vec<JsonDiagnostic>,
    /// Canonical recipe hash, when the recipe loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_hash: Option<String>,
}

/// One noise sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoiseSample {
    /// Sampled x coordinate, after warping if enabled
    pub x: f32,
    /// Sampled y coordinate, after warping if enabled
    pub y: f32,
    /// Sampled z coordinate for 3D samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// Raw noise value
    pub value: f32,
    /// Value remapped by `(1 + v) / 2`
    pub value_01: f32,
}

/// Output of `isleforge noise --json`.
#[derive(Debug, Serialize)]
pub struct NoiseOutput {
    /// Whether sampling succeeded
    pub success: bool,
    /// Errors that stopped the run
    pub errors: Vec<JsonDiagnostic>,
    /// The sample, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<NoiseSample>,
}

/// Serializes `value` as pretty JSON and prints it to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
