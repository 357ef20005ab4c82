//! Isleforge heightmap synthesis.
//!
//! Builds an island-shaped elevation grid in three passes over a
//! caller-owned [`HeightGrid`]:
//!
//! 1. **Base fill**: Perlin noise remapped to `[0, scale]`.
//! 2. **Falloff**: a square smoothstep mask that suppresses the border.
//! 3. **Smoothing**: repeated 3×3 box filtering of interior cells.
//!
//! Every float-to-elevation conversion saturates into the `u16` range
//! instead of wrapping. Output is fully determined by the recipe and seed.
//!
//! # Example
//!
//! ```
//! use isleforge_spec::HeightmapRecipe;
//! use isleforge_terrain::{synthesize, Heightmap};
//!
//! let recipe = HeightmapRecipe::dense(32);
//! let mut grid = Heightmap::square(recipe.size).unwrap();
//! let report = synthesize(&mut grid, 1234, &recipe).unwrap();
//! assert_eq!(report.stages.len(), 3);
//! ```

pub mod base_fill;
pub mod convert;
pub mod digest;
pub mod error;
pub mod falloff;
pub mod grid;
pub mod smoothing;
pub mod stats;
pub mod synthesizer;

pub use convert::{saturate_u16, to_unit_range, Elevation};
pub use digest::grid_digest;
pub use error::{GridError, GridResult, SynthesisError, SynthesisResult};
pub use grid::{HeightGrid, Heightmap};
pub use stats::heightmap_stats;
pub use synthesizer::{synthesize, Synthesizer};
