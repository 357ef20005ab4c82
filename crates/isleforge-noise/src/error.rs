//! Error types for noise configuration.

use isleforge_spec::BackendError;
use thiserror::Error;

/// Result type for noise configuration.
pub type NoiseResult<T> = Result<T, NoiseConfigError>;

/// Configuration rejected before any sample is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseConfigError {
    /// Octave count of zero.
    #[error("fractal octave count must be at least 1, got {octaves}")]
    InvalidOctaves {
        /// The rejected octave count.
        octaves: u32,
    },

    /// Cellular distance rank outside the tracked range.
    #[error("cellular distance indices must be in [0, 3], got [{index0}, {index1}]")]
    InvalidDistanceIndices {
        /// First requested rank.
        index0: u32,
        /// Second requested rank.
        index1: u32,
    },

    /// `noise_lookup` return type without a lookup generator.
    #[error("cellular return type noise_lookup requires a lookup generator")]
    MissingNoiseLookup,

    /// A floating-point parameter is NaN or infinite.
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl NoiseConfigError {
    /// Returns `Ok(value)` if finite, otherwise a `NonFiniteParameter` error.
    pub fn require_finite(name: &'static str, value: f32) -> NoiseResult<f32> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFiniteParameter { name, value })
        }
    }
}

impl BackendError for NoiseConfigError {
    fn code(&self) -> &'static str {
        match self {
            NoiseConfigError::InvalidOctaves { .. } => "NOISE_001",
            NoiseConfigError::InvalidDistanceIndices { .. } => "NOISE_002",
            NoiseConfigError::MissingNoiseLookup => "NOISE_003",
            NoiseConfigError::NonFiniteParameter { .. } => "NOISE_004",
        }
    }

    fn category(&self) -> &'static str {
        "noise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite() {
        assert_eq!(NoiseConfigError::require_finite("gain", 0.5), Ok(0.5));
        let err = NoiseConfigError::require_finite("gain", f32::NAN).unwrap_err();
        assert!(err.to_string().contains("gain"));
        assert_eq!(err.code(), "NOISE_004");
    }

    #[test]
    fn test_codes_and_category() {
        let err = NoiseConfigError::InvalidDistanceIndices {
            index0: 0,
            index1: 5,
        };
        assert_eq!(err.code(), "NOISE_002");
        assert_eq!(err.category(), "noise");
        assert!(err.message().contains("[0, 5]"));
    }
}
