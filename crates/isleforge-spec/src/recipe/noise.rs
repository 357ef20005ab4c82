//! Noise generator parameters.
//!
//! These types describe a coherent-noise generator declaratively. The
//! `isleforge-noise` crate turns a validated [`NoiseParams`] into a runtime
//! configuration.

use serde::{Deserialize, Serialize};

/// Noise families, each with an optional fractal variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Interpolated per-lattice-point scalars.
    Value,
    /// Fractal sum of value noise.
    ValueFractal,
    /// Gradient (Perlin) noise.
    Perlin,
    /// Fractal sum of gradient noise.
    PerlinFractal,
    /// Simplex noise.
    #[default]
    Simplex,
    /// Fractal sum of simplex noise.
    SimplexFractal,
    /// Cellular (Worley) noise.
    Cellular,
    /// Per-sample hash with no spatial coherence.
    WhiteNoise,
    /// Bicubic/tricubic interpolated value noise.
    Cubic,
    /// Fractal sum of cubic noise.
    CubicFractal,
}

impl NoiseType {
    /// Whether this type runs through the fractal compositor.
    pub fn is_fractal(&self) -> bool {
        matches!(
            self,
            NoiseType::ValueFractal
                | NoiseType::PerlinFractal
                | NoiseType::SimplexFractal
                | NoiseType::CubicFractal
        )
    }
}

/// Interpolation curve used by value and gradient noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    /// Straight linear blend.
    Linear,
    /// Smoothstep `t²(3 − 2t)`.
    Hermite,
    /// Quintic fade `t³(t(6t − 15) + 10)`.
    #[default]
    Quintic,
}

/// Octave-combination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalType {
    /// Fractal Brownian motion.
    #[default]
    Fbm,
    /// `2|n| − 1` per octave.
    Billow,
    /// `1 − |n|` ridges, not normalized.
    RigidMulti,
}

/// Distance metric for cellular noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellularDistanceFunction {
    /// Sum of squares (squared Euclidean distance).
    #[default]
    Euclidean,
    /// Sum of absolute differences.
    Manhattan,
    /// Manhattan plus squared Euclidean.
    Natural,
}

/// What a cellular sample returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellularReturnType {
    /// Hashed value of the nearest cell.
    #[default]
    CellValue,
    /// Sample of a second generator at the nearest feature point.
    NoiseLookup,
    /// Distance to the nearest feature point.
    Distance,
    /// Distance at rank `i1`.
    Distance2,
    /// `d[i1] + d[i0]`.
    Distance2Add,
    /// `d[i1] - d[i0]`.
    Distance2Sub,
    /// `d[i1] * d[i0]`.
    Distance2Mul,
    /// `d[i0] / d[i1]`.
    Distance2Div,
}

impl CellularReturnType {
    /// Whether this mode tracks a ranked set of distances instead of only
    /// the nearest feature point.
    pub fn uses_distance_ranks(&self) -> bool {
        !matches!(
            self,
            CellularReturnType::CellValue
                | CellularReturnType::NoiseLookup
                | CellularReturnType::Distance
        )
    }
}

/// Fractal compositor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FractalParams {
    /// Octave-combination strategy.
    #[serde(default)]
    pub fractal_type: FractalType,
    /// Number of octaves (at least 1).
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    /// Per-octave frequency multiplier.
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    /// Per-octave amplitude multiplier.
    #[serde(default = "default_gain")]
    pub gain: f32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            fractal_type: FractalType::default(),
            octaves: default_octaves(),
            lacunarity: default_lacunarity(),
            gain: default_gain(),
        }
    }
}

/// Cellular noise parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellularParams {
    /// Distance metric.
    #[serde(default)]
    pub distance_function: CellularDistanceFunction,
    /// Return mode.
    #[serde(default)]
    pub return_type: CellularReturnType,
    /// Distance ranks `[i0, i1]` combined by the `distance2*` modes.
    #[serde(default = "default_distance_indices")]
    pub distance_indices: [u32; 2],
    /// Feature-point displacement from the lattice position.
    #[serde(default = "default_jitter")]
    pub jitter: f32,
    /// Secondary generator sampled by `noise_lookup` mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<Box<NoiseParams>>,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            distance_function: CellularDistanceFunction::default(),
            return_type: CellularReturnType::default(),
            distance_indices: default_distance_indices(),
            jitter: default_jitter(),
            lookup: None,
        }
    }
}

/// Full parameter set for one noise generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseParams {
    /// Lattice seed.
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Coordinate scale applied before sampling.
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    /// Interpolation curve.
    #[serde(default)]
    pub interp: Interp,
    /// Noise family.
    #[serde(default)]
    pub noise_type: NoiseType,
    /// Fractal parameters (used by the `*_fractal` types and fractal perturbation).
    #[serde(default)]
    pub fractal: FractalParams,
    /// Cellular parameters (used by the `cellular` type).
    #[serde(default)]
    pub cellular: CellularParams,
    /// Amplitude of gradient perturbation.
    #[serde(default = "default_gradient_perturb_amp")]
    pub gradient_perturb_amp: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frequency: default_frequency(),
            interp: Interp::default(),
            noise_type: NoiseType::default(),
            fractal: FractalParams::default(),
            cellular: CellularParams::default(),
            gradient_perturb_amp: default_gradient_perturb_amp(),
        }
    }
}

impl NoiseParams {
    /// Single-octave Perlin noise with the given seed and frequency.
    pub fn perlin(seed: i32, frequency: f32) -> Self {
        Self {
            seed,
            frequency,
            noise_type: NoiseType::Perlin,
            ..Default::default()
        }
    }

    /// Parses noise parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub(crate) fn default_seed() -> i32 {
    1337
}

pub(crate) fn default_frequency() -> f32 {
    0.01
}

pub(crate) fn default_octaves() -> u32 {
    3
}

pub(crate) fn default_lacunarity() -> f32 {
    2.0
}

pub(crate) fn default_gain() -> f32 {
    0.5
}

pub(crate) fn default_distance_indices() -> [u32; 2] {
    [0, 1]
}

pub(crate) fn default_jitter() -> f32 {
    0.45
}

pub(crate) fn default_gradient_perturb_amp() -> f32 {
    1.0
}
