//! Recipe validation logic.

pub mod common;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::recipe::{CellularReturnType, HeightmapRecipe, NoiseParams, SeedingMode};

pub use common::{
    validate_edges, validate_finite, validate_grid_size, validate_non_negative, validate_positive,
    CommonValidationError, MAX_GRID_SIZE,
};

/// Largest accepted smoothing iteration count.
pub const MAX_SMOOTHING_ITERATIONS: u32 = 1000;

/// Cellular distance ranks are tracked in a four-slot array.
pub const MAX_DISTANCE_INDEX: u32 = 3;

/// Largest magnitude at which every integer is exactly representable in `f32`.
const F32_EXACT_INTEGER_LIMIT: i64 = 1 << 24;

/// Validates noise parameters.
///
/// # Example
/// ```
/// use isleforge_spec::NoiseParams;
/// use isleforge_spec::validation::validate_noise_params;
///
/// assert!(validate_noise_params(&NoiseParams::default()).is_ok());
/// ```
pub fn validate_noise_params(params: &NoiseParams) -> ValidationResult {
    let mut result = ValidationResult::default();
    check_noise_params(params, "", &mut result);

    if let Some(ref lookup) = params.cellular.lookup {
        if lookup.cellular.return_type == CellularReturnType::NoiseLookup {
            result.add_error(ValidationError::with_path(
                ErrorCode::NestedNoiseLookup,
                "a lookup generator cannot itself use noise_lookup",
                "cellular.lookup.cellular.return_type",
            ));
        } else {
            check_noise_params(lookup, "cellular.lookup.", &mut result);
        }
    }

    result
}

fn check_noise_params(params: &NoiseParams, prefix: &str, result: &mut ValidationResult) {
    if params.fractal.octaves == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOctaves,
            "octaves must be at least 1",
            format!("{}fractal.octaves", prefix),
        ));
    }

    let [i0, i1] = params.cellular.distance_indices;
    if i0 > MAX_DISTANCE_INDEX || i1 > MAX_DISTANCE_INDEX {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDistanceIndices,
            format!(
                "distance indices must be in [0, {}], got [{}, {}]",
                MAX_DISTANCE_INDEX, i0, i1
            ),
            format!("{}cellular.distance_indices", prefix),
        ));
    }

    match (
        params.cellular.return_type,
        params.cellular.lookup.is_some(),
    ) {
        (CellularReturnType::NoiseLookup, false) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::MissingNoiseLookup,
                "noise_lookup return type requires a lookup generator",
                format!("{}cellular.lookup", prefix),
            ));
        }
        (return_type, true) if return_type != CellularReturnType::NoiseLookup => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnusedNoiseLookup,
                "lookup generator is ignored unless return_type is noise_lookup",
                format!("{}cellular.lookup", prefix),
            ));
        }
        _ => {}
    }

    let floats = [
        ("frequency", params.frequency),
        ("fractal.lacunarity", params.fractal.lacunarity),
        ("fractal.gain", params.fractal.gain),
        ("cellular.jitter", params.cellular.jitter),
        ("gradient_perturb_amp", params.gradient_perturb_amp),
    ];
    for (name, value) in floats {
        if let Err(e) = validate_finite(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteParameter,
                e.message,
                format!("{}{}", prefix, name),
            ));
        }
    }
}

/// Validates a heightmap recipe.
///
/// # Example
/// ```
/// use isleforge_spec::HeightmapRecipe;
/// use isleforge_spec::validation::validate_heightmap_recipe;
///
/// assert!(validate_heightmap_recipe(&HeightmapRecipe::dense(64)).is_ok());
/// assert!(!validate_heightmap_recipe(&HeightmapRecipe::dense(0)).is_ok());
/// ```
pub fn validate_heightmap_recipe(recipe: &HeightmapRecipe) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Err(e) = validate_grid_size(recipe.size) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGridSize,
            e.message,
            "size",
        ));
    }

    for (name, value) in [
        ("world_size", recipe.world_size),
        ("world_height", recipe.world_height),
    ] {
        if let Err(e) = validate_positive(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidWorldScale,
                e.message,
                name,
            ));
        }
    }

    if let Err(e) = validate_finite("frequency", recipe.base_fill.frequency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteParameter,
            e.message,
            "base_fill.frequency",
        ));
    }

    match validate_non_negative("scale", recipe.base_fill.scale) {
        Err(e) => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidElevationScale,
            e.message,
            "base_fill.scale",
        )),
        Ok(()) if recipe.base_fill.scale > f32::from(u16::MAX) => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::ScaleExceedsElevationRange,
                format!(
                    "scale {} can push elevations past {}; those cells will saturate",
                    recipe.base_fill.scale,
                    u16::MAX
                ),
                "base_fill.scale",
            ));
        }
        Ok(()) => {}
    }

    if let Err(e) = validate_edges(recipe.falloff.inner_edge, recipe.falloff.outer_edge) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFalloffEdges,
            e.message,
            "falloff",
        ));
    }

    if recipe.smoothing.iterations > MAX_SMOOTHING_ITERATIONS {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSmoothingIterations,
            format!(
                "iterations must be at most {}, got {}",
                MAX_SMOOTHING_ITERATIONS, recipe.smoothing.iterations
            ),
            "smoothing.iterations",
        ));
    }

    result
}

/// Validates a recipe together with the seed it will be synthesized with.
///
/// Adds a warning when coordinate-offset seeding moves sample coordinates
/// past the range where `f32` represents every integer, since neighboring
/// cells then collapse onto the same sample.
pub fn validate_for_synthesis(recipe: &HeightmapRecipe, seed: i32) -> ValidationResult {
    let mut result = validate_heightmap_recipe(recipe);

    if recipe.base_fill.seeding == SeedingMode::CoordinateOffset {
        let reach = i64::from(seed).abs() + i64::from(recipe.size);
        if reach > F32_EXACT_INTEGER_LIMIT {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::SeedBeyondFloatPrecision,
                format!(
                    "seed {} offsets coordinates beyond {}; adjacent cells may sample identical noise",
                    seed, F32_EXACT_INTEGER_LIMIT
                ),
                "base_fill.seeding",
            ));
        }
    }

    result
}
