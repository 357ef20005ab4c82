//! Isleforge coherent noise.
//!
//! Deterministic, single-precision noise over integer lattices: value,
//! gradient (Perlin), simplex, cellular (Worley), cubic and white noise in
//! 2D and 3D (simplex and white noise also in 4D), each composable into
//! fractal sums, plus gradient-based domain warping.
//!
//! Output for a given seed and configuration is bit-for-bit stable.
//!
//! # Example
//!
//! ```
//! use isleforge_noise::{NoiseConfig, NoiseGenerator};
//! use isleforge_spec::NoiseType;
//!
//! let mut config = NoiseConfig::new(42);
//! config.set_noise_type(NoiseType::PerlinFractal);
//! config.set_fractal_octaves(4).unwrap();
//!
//! let generator = NoiseGenerator::new(config).unwrap();
//! let v = generator.get_noise_2d(10.0, 20.0);
//! assert!(v.is_finite());
//! ```

mod cellular;
mod config;
mod cubic;
mod error;
mod fractal;
mod generator;
pub mod hash;
mod perlin;
mod perturb;
mod simplex;
pub mod tables;
mod value;
mod white;

pub use config::NoiseConfig;
pub use error::{NoiseConfigError, NoiseResult};
pub use generator::NoiseGenerator;

pub use isleforge_spec::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interp, NoiseType,
};

/// Trait for 2D noise sources.
pub trait Noise2D {
    /// Sample the noise at a 2D coordinate, roughly in [-1, 1].
    fn sample(&self, x: f32, y: f32) -> f32;

    /// Sample the noise and remap to roughly [0, 1].
    fn sample_01(&self, x: f32, y: f32) -> f32 {
        (1.0 + self.sample(x, y)) / 2.0
    }
}

/// Trait for 3D noise sources.
pub trait Noise3D {
    /// Sample the noise at a 3D coordinate, roughly in [-1, 1].
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;

    /// Sample the noise and remap to roughly [0, 1].
    fn sample_01(&self, x: f32, y: f32, z: f32) -> f32 {
        (1.0 + self.sample(x, y, z)) / 2.0
    }
}

/// Truncating floor used for lattice-cell selection.
///
/// Negative inputs always step one cell down after truncation, so
/// `fast_floor(-1.0) == -2`. Lattice selection depends on exactly this rule.
#[inline]
pub fn fast_floor(f: f32) -> i32 {
    if f >= 0.0 {
        f as i32
    } else {
        f as i32 - 1
    }
}

/// Round half away from zero.
#[inline]
pub fn fast_round(f: f32) -> i32 {
    if f >= 0.0 {
        (f + 0.5) as i32
    } else {
        (f - 0.5) as i32
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Hermite smoothstep `t²(3 − 2t)`.
#[inline]
pub fn interp_hermite(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic fade `t³(t(6t − 15) + 10)`.
#[inline]
pub fn interp_quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Cubic interpolation through four evenly spaced samples, between `b` and `c`.
#[inline]
pub fn cubic_lerp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

/// Applies an interpolation curve to a fractional offset.
#[inline]
pub(crate) fn apply_interp(interp: Interp, t: f32) -> f32 {
    match interp {
        Interp::Linear => t,
        Interp::Hermite => interp_hermite(t),
        Interp::Quintic => interp_quintic(t),
    }
}
