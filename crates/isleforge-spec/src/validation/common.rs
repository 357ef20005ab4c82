//! Common validation utilities for numeric recipe parameters.

use std::fmt;

/// Largest accepted heightmap side length.
pub const MAX_GRID_SIZE: u32 = 8192;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a square grid size is non-zero and bounded.
///
/// # Example
/// ```
/// use isleforge_spec::validation::common::validate_grid_size;
///
/// assert!(validate_grid_size(512).is_ok());
/// assert!(validate_grid_size(0).is_err());
/// ```
pub fn validate_grid_size(size: u32) -> Result<(), CommonValidationError> {
    if size == 0 {
        return Err(CommonValidationError::new(
            "size must be at least 1, got 0",
        ));
    }
    if size > MAX_GRID_SIZE {
        return Err(CommonValidationError::new(format!(
            "size is too large: max is {}, got {}",
            MAX_GRID_SIZE, size
        )));
    }
    Ok(())
}

/// Validate that a value is neither NaN nor infinite.
pub fn validate_finite(name: &str, value: f32) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite and > 0.
///
/// # Example
/// ```
/// use isleforge_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("world_size", 1.0).is_ok());
/// assert!(validate_positive("world_size", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f32) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite and >= 0.
pub fn validate_non_negative(name: &str, value: f32) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that `lower < upper` with both finite and `lower >= 0`.
pub fn validate_edges(lower: f32, upper: f32) -> Result<(), CommonValidationError> {
    validate_non_negative("inner_edge", lower)?;
    validate_finite("outer_edge", upper)?;
    if lower >= upper {
        return Err(CommonValidationError::new(format!(
            "inner_edge must be below outer_edge, got {} >= {}",
            lower, upper
        )));
    }
    Ok(())
}
