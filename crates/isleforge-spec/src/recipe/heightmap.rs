//! Heightmap synthesis recipe.

use serde::{Deserialize, Serialize};

use super::noise::{Interp, NoiseParams, NoiseType};

/// How the synthesis seed reaches the base-fill generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// A generator with the fixed `noise_seed` is sampled at `(x + seed, y + seed)`.
    #[default]
    CoordinateOffset,
    /// The generator's seed is the synthesis seed; coordinates are unmodified.
    GeneratorSeed,
}

/// How each smoothing iteration reads its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Writes go straight into the grid, so later cells in the same pass see
    /// already-smoothed neighbors. Output depends on traversal order.
    #[default]
    InPlace,
    /// Every cell reads the previous iteration's values only.
    DoubleBuffered,
}

/// Cell traversal order for in-place smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingOrder {
    /// Outer loop over x, inner loop over y.
    #[default]
    ColumnMajor,
    /// Outer loop over y, inner loop over x.
    RowMajor,
}

/// Base elevation fill parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseFillParams {
    /// Perlin frequency.
    #[serde(default = "default_base_frequency")]
    pub frequency: f32,
    /// Generator seed used in `coordinate_offset` mode.
    #[serde(default = "default_noise_seed")]
    pub noise_seed: i32,
    /// Seeding contract.
    #[serde(default)]
    pub seeding: SeedingMode,
    /// Interpolation curve for the Perlin generator.
    #[serde(default)]
    pub interp: Interp,
    /// Multiplier applied to the unit-range noise value.
    #[serde(default = "default_elevation_scale")]
    pub scale: f32,
}

impl Default for BaseFillParams {
    fn default() -> Self {
        Self {
            frequency: default_base_frequency(),
            noise_seed: default_noise_seed(),
            seeding: SeedingMode::default(),
            interp: Interp::default(),
            scale: default_elevation_scale(),
        }
    }
}

impl BaseFillParams {
    /// Generator parameters for a synthesis run with the given seed.
    pub fn noise_params(&self, seed: i32) -> NoiseParams {
        let generator_seed = match self.seeding {
            SeedingMode::CoordinateOffset => self.noise_seed,
            SeedingMode::GeneratorSeed => seed,
        };
        NoiseParams {
            seed: generator_seed,
            frequency: self.frequency,
            interp: self.interp,
            noise_type: NoiseType::Perlin,
            ..Default::default()
        }
    }

    /// Integer offset added to both lattice coordinates before sampling.
    pub fn coordinate_offset(&self, seed: i32) -> i32 {
        match self.seeding {
            SeedingMode::CoordinateOffset => seed,
            SeedingMode::GeneratorSeed => 0,
        }
    }
}

/// Border falloff parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FalloffParams {
    /// Whether the falloff pass runs.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Normalized distance where suppression starts.
    #[serde(default = "default_inner_edge")]
    pub inner_edge: f32,
    /// Normalized distance where elevation reaches zero.
    #[serde(default = "default_outer_edge")]
    pub outer_edge: f32,
}

impl Default for FalloffParams {
    fn default() -> Self {
        Self {
            enabled: true,
            inner_edge: default_inner_edge(),
            outer_edge: default_outer_edge(),
        }
    }
}

/// Box-filter smoothing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingParams {
    /// Number of passes.
    #[serde(default = "default_smoothing_iterations")]
    pub iterations: u32,
    /// Read/write strategy.
    #[serde(default)]
    pub mode: SmoothingMode,
    /// Traversal order (meaningful for `in_place` only).
    #[serde(default)]
    pub order: SmoothingOrder,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            iterations: default_smoothing_iterations(),
            mode: SmoothingMode::default(),
            order: SmoothingOrder::default(),
        }
    }
}

/// Complete description of one heightmap synthesis.
///
/// The grid is square: width and height both equal `size`. `world_size` and
/// `world_height` are carried through to the grid for the consumer and are
/// never read by the synthesizer.
///
/// # Example
///
/// ```
/// use isleforge_spec::HeightmapRecipe;
///
/// let recipe = HeightmapRecipe::from_json(r#"{ "size": 64 }"#).unwrap();
/// assert_eq!(recipe.smoothing.iterations, 5);
/// assert_eq!(recipe.base_fill.noise_seed, 5633);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightmapRecipe {
    /// Heightmap size in cells per side.
    pub size: u32,
    /// World-space extent of the terrain.
    #[serde(default = "default_world_size")]
    pub world_size: f32,
    /// World-space height of the terrain.
    #[serde(default = "default_world_height")]
    pub world_height: f32,
    /// Base elevation fill.
    #[serde(default)]
    pub base_fill: BaseFillParams,
    /// Border falloff.
    #[serde(default)]
    pub falloff: FalloffParams,
    /// Smoothing passes.
    #[serde(default)]
    pub smoothing: SmoothingParams,
}

impl HeightmapRecipe {
    /// The denser configuration: five in-place smoothing iterations.
    pub fn dense(size: u32) -> Self {
        Self {
            size,
            world_size: default_world_size(),
            world_height: default_world_height(),
            base_fill: BaseFillParams::default(),
            falloff: FalloffParams::default(),
            smoothing: SmoothingParams::default(),
        }
    }

    /// The sparse configuration: no smoothing.
    pub fn sparse(size: u32) -> Self {
        let mut recipe = Self::dense(size);
        recipe.smoothing.iterations = 0;
        recipe
    }

    /// Parses a recipe from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn default_base_frequency() -> f32 {
    0.03
}

fn default_noise_seed() -> i32 {
    5633
}

fn default_elevation_scale() -> f32 {
    100.0
}

fn default_true() -> bool {
    true
}

fn default_inner_edge() -> f32 {
    0.5
}

fn default_outer_edge() -> f32 {
    1.0
}

fn default_smoothing_iterations() -> u32 {
    5
}

fn default_world_size() -> f32 {
    22500.0
}

fn default_world_height() -> f32 {
    315999.0
}
