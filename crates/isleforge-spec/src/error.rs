//! Error types for recipe validation and processing.

use thiserror::Error;

/// Error codes for recipe validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Noise errors (H001-H005)
    /// H001: Fractal octave count must be at least 1
    InvalidOctaves,
    /// H002: Cellular distance indices outside [0, 3]
    InvalidDistanceIndices,
    /// H003: NoiseLookup return type without a lookup generator
    MissingNoiseLookup,
    /// H004: A floating-point parameter is NaN or infinite
    NonFiniteParameter,
    /// H005: A lookup generator is itself configured for NoiseLookup
    NestedNoiseLookup,

    // Heightmap errors (H010-H014)
    /// H010: Heightmap size is zero or too large
    InvalidGridSize,
    /// H011: World size or world height is not positive
    InvalidWorldScale,
    /// H012: Falloff edges are not strictly increasing
    InvalidFalloffEdges,
    /// H013: Too many smoothing iterations
    InvalidSmoothingIterations,
    /// H014: Base-fill elevation scale is negative
    InvalidElevationScale,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "H001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidOctaves => "H001",
            ErrorCode::InvalidDistanceIndices => "H002",
            ErrorCode::MissingNoiseLookup => "H003",
            ErrorCode::NonFiniteParameter => "H004",
            ErrorCode::NestedNoiseLookup => "H005",
            ErrorCode::InvalidGridSize => "H010",
            ErrorCode::InvalidWorldScale => "H011",
            ErrorCode::InvalidFalloffEdges => "H012",
            ErrorCode::InvalidSmoothingIterations => "H013",
            ErrorCode::InvalidElevationScale => "H014",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for recipe validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Coordinate-offset seed is large enough that f32 sample
    /// coordinates can no longer represent every integer
    SeedBeyondFloatPrecision,
    /// W002: Elevation scale guarantees saturated cells
    ScaleExceedsElevationRange,
    /// W003: Lookup generator configured but never consulted
    UnusedNoiseLookup,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::SeedBeyondFloatPrecision => "W001",
            WarningCode::ScaleExceedsElevationRange => "W002",
            WarningCode::UnusedNoiseLookup => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "cellular.distance_indices").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for recipe operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Recipe validation failed with one or more errors.
    #[error("recipe validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of recipe validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.ok &= other.ok;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Backend crates implement this so hosts can report failures from the
/// noise library and the terrain synthesizer uniformly, without the recipe
/// crate depending on either of them.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "NOISE_001" or "TERRAIN_002". These codes
    /// are stable and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors ("noise", "terrain").
    fn category(&self) -> &'static str;
}
