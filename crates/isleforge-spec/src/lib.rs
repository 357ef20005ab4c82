//! Isleforge recipe library.
//!
//! This crate provides serializable parameter types, validation, and hashing
//! for noise generators and heightmap synthesis. It performs no numeric work;
//! `isleforge-noise` and `isleforge-terrain` consume the types defined here.
//!
//! # Example
//!
//! ```
//! use isleforge_spec::HeightmapRecipe;
//! use isleforge_spec::validation::validate_heightmap_recipe;
//! use isleforge_spec::hash::recipe_hash;
//!
//! let recipe = HeightmapRecipe::from_json(r#"{
//!     "size": 128,
//!     "smoothing": { "iterations": 2 }
//! }"#).unwrap();
//!
//! let result = validate_heightmap_recipe(&recipe);
//! assert!(result.is_ok());
//!
//! let hash = recipe_hash(&recipe).unwrap();
//! println!("Recipe hash: {}", hash);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`recipe`]: Noise and heightmap parameter types
//! - [`validation`]: Recipe validation functions
//! - [`hash`]: Canonical recipe hashing
//! - [`report`]: Synthesis report types

pub mod error;
pub mod hash;
pub mod recipe;
pub mod report;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{noise_params_hash, recipe_hash};
pub use recipe::{
    BaseFillParams, CellularDistanceFunction, CellularParams, CellularReturnType, FalloffParams,
    FractalParams, FractalType, HeightmapRecipe, Interp, NoiseParams, NoiseType, SeedingMode,
    SmoothingMode, SmoothingOrder, SmoothingParams,
};
pub use report::{HeightmapStats, Pass, StageTiming, SynthesisReport};
pub use validation::{validate_for_synthesis, validate_heightmap_recipe, validate_noise_params};
