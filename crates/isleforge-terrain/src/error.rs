//! Error types for heightmap synthesis.

use isleforge_noise::NoiseConfigError;
use isleforge_spec::{BackendError, Pass, SpecError, ValidationError};
use thiserror::Error;

/// Result type for grid access.
pub type GridResult<T> = Result<T, GridError>;

/// Result type for synthesis.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Grid access and construction errors. These are programming errors in
/// the caller and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// Grid dimensions disagree with the recipe.
    #[error("grid is {width}x{height} but the recipe expects {expected}x{expected}")]
    SizeMismatch {
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
        /// Recipe heightmap size.
        expected: u32,
    },

    /// A grid cannot have a zero dimension, or the sample buffer has the
    /// wrong length.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// Errors from a synthesis run.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Grid access failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The base-fill generator configuration was rejected.
    #[error("noise configuration error: {0}")]
    Noise(#[from] NoiseConfigError),

    /// The recipe failed validation.
    #[error("recipe validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// The recipe could not be hashed.
    #[error("recipe error: {0}")]
    Recipe(#[from] SpecError),

    /// A pass was run before the pass it depends on, or twice.
    #[error("pass '{requested}' cannot run after '{completed}'")]
    StageOrder {
        /// Pass that was requested.
        requested: Pass,
        /// Last completed pass, or `none`.
        completed: &'static str,
    },
}

impl BackendError for GridError {
    fn code(&self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "TERRAIN_001",
            GridError::SizeMismatch { .. } => "TERRAIN_002",
            GridError::InvalidDimensions { .. } => "TERRAIN_003",
        }
    }

    fn category(&self) -> &'static str {
        "terrain"
    }
}

impl BackendError for SynthesisError {
    fn code(&self) -> &'static str {
        match self {
            SynthesisError::Grid(e) => e.code(),
            SynthesisError::Noise(_) => "TERRAIN_004",
            SynthesisError::Validation(_) => "TERRAIN_005",
            SynthesisError::StageOrder { .. } => "TERRAIN_006",
            SynthesisError::Recipe(_) => "TERRAIN_007",
        }
    }

    fn category(&self) -> &'static str {
        "terrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = GridError::OutOfBounds {
            x: 4,
            y: 0,
            width: 4,
            height: 4,
        };
        assert_eq!(err.to_string(), "cell (4, 0) is outside the 4x4 grid");
        assert_eq!(err.code(), "TERRAIN_001");
    }

    #[test]
    fn test_grid_error_code_passes_through() {
        let err = SynthesisError::from(GridError::SizeMismatch {
            width: 8,
            height: 8,
            expected: 16,
        });
        assert_eq!(err.code(), "TERRAIN_002");
        assert_eq!(err.category(), "terrain");
    }

    #[test]
    fn test_noise_error_wraps() {
        let err = SynthesisError::from(NoiseConfigError::InvalidOctaves { octaves: 0 });
        assert_eq!(err.code(), "TERRAIN_004");
        assert!(err.message().contains("octave"));
    }
}
