//! Runtime noise configuration.

use isleforge_spec::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interp, NoiseParams, NoiseType,
};
use tracing::trace;

use crate::error::{NoiseConfigError, NoiseResult};

/// Largest cellular distance rank; ranks index a four-slot array.
pub const MAX_DISTANCE_INDEX: u32 = 3;

/// Mutable configuration for one noise generator.
///
/// Fields change only through setters. Changing the octave count or gain
/// recomputes [`fractal_bounding`](Self::fractal_bounding) immediately, so
/// it always matches the current pair.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    seed: i32,
    frequency: f32,
    interp: Interp,
    noise_type: NoiseType,

    octaves: u32,
    lacunarity: f32,
    gain: f32,
    fractal_type: FractalType,
    fractal_bounding: f32,

    cellular_distance_function: CellularDistanceFunction,
    cellular_return_type: CellularReturnType,
    cellular_distance_index0: usize,
    cellular_distance_index1: usize,
    cellular_jitter: f32,

    gradient_perturb_amp: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::new(1337)
    }
}

impl NoiseConfig {
    /// Creates a configuration with default parameters and the given seed.
    pub fn new(seed: i32) -> Self {
        let mut config = Self {
            seed,
            frequency: 0.01,
            interp: Interp::Quintic,
            noise_type: NoiseType::Simplex,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
            fractal_type: FractalType::Fbm,
            fractal_bounding: 1.0,
            cellular_distance_function: CellularDistanceFunction::Euclidean,
            cellular_return_type: CellularReturnType::CellValue,
            cellular_distance_index0: 0,
            cellular_distance_index1: 1,
            cellular_jitter: 0.45,
            gradient_perturb_amp: 1.0,
        };
        config.recompute_fractal_bounding();
        config
    }

    /// Builds a configuration from declarative parameters.
    ///
    /// The parameters' `cellular.lookup` is not part of the configuration; the
    /// lookup generator is attached when constructing a
    /// [`NoiseGenerator`](crate::NoiseGenerator).
    pub fn from_params(params: &NoiseParams) -> NoiseResult<Self> {
        let mut config = Self::new(params.seed);
        config.set_frequency(NoiseConfigError::require_finite(
            "frequency",
            params.frequency,
        )?);
        config.set_interp(params.interp);
        config.set_noise_type(params.noise_type);

        config.set_fractal_type(params.fractal.fractal_type);
        config.set_fractal_octaves(params.fractal.octaves)?;
        config.set_fractal_lacunarity(NoiseConfigError::require_finite(
            "fractal.lacunarity",
            params.fractal.lacunarity,
        )?);
        config.set_fractal_gain(params.fractal.gain)?;

        config.set_cellular_distance_function(params.cellular.distance_function);
        config.set_cellular_return_type(params.cellular.return_type);
        let [i0, i1] = params.cellular.distance_indices;
        config.set_cellular_distance_indices(i0, i1)?;
        config.set_cellular_jitter(NoiseConfigError::require_finite(
            "cellular.jitter",
            params.cellular.jitter,
        )?);

        config.set_gradient_perturb_amp(NoiseConfigError::require_finite(
            "gradient_perturb_amp",
            params.gradient_perturb_amp,
        )?);
        Ok(config)
    }

    fn recompute_fractal_bounding(&mut self) {
        let mut amp = self.gain;
        let mut amp_fractal = 1.0f32;
        for _ in 1..self.octaves {
            amp_fractal += amp;
            amp *= self.gain;
        }
        self.fractal_bounding = 1.0 / amp_fractal;
        trace!(
            octaves = self.octaves,
            gain = self.gain,
            fractal_bounding = self.fractal_bounding,
            "recomputed fractal bounding"
        );
    }

    /// Lattice seed.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Sets the lattice seed.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    /// Coordinate scale.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Sets the coordinate scale.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    /// Interpolation curve.
    pub fn interp(&self) -> Interp {
        self.interp
    }

    /// Sets the interpolation curve (value, Perlin and perturbation).
    pub fn set_interp(&mut self, interp: Interp) {
        self.interp = interp;
    }

    /// Noise family sampled by `get_noise_*`.
    pub fn noise_type(&self) -> NoiseType {
        self.noise_type
    }

    /// Sets the noise family.
    pub fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.noise_type = noise_type;
    }

    /// Fractal octave count.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Sets the octave count, recomputing the bounding if it changed.
    ///
    /// Zero is rejected and leaves the configuration untouched.
    pub fn set_fractal_octaves(&mut self, octaves: u32) -> NoiseResult<()> {
        if octaves == 0 {
            return Err(NoiseConfigError::InvalidOctaves { octaves });
        }
        if self.octaves != octaves {
            self.octaves = octaves;
            self.recompute_fractal_bounding();
        }
        Ok(())
    }

    /// Per-octave frequency multiplier.
    pub fn lacunarity(&self) -> f32 {
        self.lacunarity
    }

    /// Sets the per-octave frequency multiplier.
    pub fn set_fractal_lacunarity(&mut self, lacunarity: f32) {
        self.lacunarity = lacunarity;
    }

    /// Per-octave amplitude multiplier.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Sets the gain and recomputes the bounding.
    ///
    /// Non-finite gains are rejected and leave the configuration untouched.
    pub fn set_fractal_gain(&mut self, gain: f32) -> NoiseResult<()> {
        self.gain = NoiseConfigError::require_finite("fractal.gain", gain)?;
        self.recompute_fractal_bounding();
        Ok(())
    }

    /// Octave-combination strategy.
    pub fn fractal_type(&self) -> FractalType {
        self.fractal_type
    }

    /// Sets the octave-combination strategy.
    pub fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.fractal_type = fractal_type;
    }

    /// `1 / (1 + gain + gain² + … + gain^(octaves−1))`.
    pub fn fractal_bounding(&self) -> f32 {
        self.fractal_bounding
    }

    /// Cellular distance metric.
    pub fn cellular_distance_function(&self) -> CellularDistanceFunction {
        self.cellular_distance_function
    }

    /// Sets the cellular distance metric.
    pub fn set_cellular_distance_function(&mut self, function: CellularDistanceFunction) {
        self.cellular_distance_function = function;
    }

    /// Cellular return mode.
    pub fn cellular_return_type(&self) -> CellularReturnType {
        self.cellular_return_type
    }

    /// Sets the cellular return mode.
    pub fn set_cellular_return_type(&mut self, return_type: CellularReturnType) {
        self.cellular_return_type = return_type;
    }

    /// Ordered distance ranks `(i0, i1)` with `i0 <= i1`.
    pub fn cellular_distance_indices(&self) -> (usize, usize) {
        (self.cellular_distance_index0, self.cellular_distance_index1)
    }

    /// Sets the distance ranks combined by the `distance2*` modes.
    ///
    /// The pair is stored ordered. Ranks above 3 are rejected.
    pub fn set_cellular_distance_indices(&mut self, index0: u32, index1: u32) -> NoiseResult<()> {
        if index0 > MAX_DISTANCE_INDEX || index1 > MAX_DISTANCE_INDEX {
            return Err(NoiseConfigError::InvalidDistanceIndices { index0, index1 });
        }
        self.cellular_distance_index0 = index0.min(index1) as usize;
        self.cellular_distance_index1 = index0.max(index1) as usize;
        Ok(())
    }

    /// Feature-point displacement.
    pub fn cellular_jitter(&self) -> f32 {
        self.cellular_jitter
    }

    /// Sets the feature-point displacement.
    pub fn set_cellular_jitter(&mut self, jitter: f32) {
        self.cellular_jitter = jitter;
    }

    /// Gradient perturbation amplitude.
    pub fn gradient_perturb_amp(&self) -> f32 {
        self.gradient_perturb_amp
    }

    /// Sets the gradient perturbation amplitude.
    pub fn set_gradient_perturb_amp(&mut self, amp: f32) {
        self.gradient_perturb_amp = amp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounding() {
        // Three octaves at gain 0.5: 1 / (1 + 0.5 + 0.25).
        let config = NoiseConfig::default();
        assert_eq!(config.fractal_bounding(), 1.0 / 1.75);
    }

    #[test]
    fn test_single_octave_bounding_is_one() {
        let mut config = NoiseConfig::new(1);
        config.set_fractal_octaves(1).unwrap();
        assert_eq!(config.fractal_bounding(), 1.0);
    }

    #[test]
    fn test_gain_recomputes_bounding() {
        let mut config = NoiseConfig::new(1);
        config.set_fractal_octaves(2).unwrap();
        config.set_fractal_gain(0.25).unwrap();
        assert_eq!(config.fractal_bounding(), 1.0 / 1.25);
    }

    #[test]
    fn test_zero_octaves_keeps_previous_state() {
        let mut config = NoiseConfig::new(1);
        config.set_fractal_octaves(5).unwrap();
        let before = config.clone();

        let err = config.set_fractal_octaves(0).unwrap_err();
        assert_eq!(err, NoiseConfigError::InvalidOctaves { octaves: 0 });
        assert_eq!(config, before);
    }

    #[test]
    fn test_non_finite_gain_rejected() {
        let mut config = NoiseConfig::new(1);
        assert!(config.set_fractal_gain(f32::INFINITY).is_err());
        assert_eq!(config.gain(), 0.5);
    }

    #[test]
    fn test_distance_indices_are_ordered() {
        let mut config = NoiseConfig::new(1);
        config.set_cellular_distance_indices(3, 1).unwrap();
        assert_eq!(config.cellular_distance_indices(), (1, 3));
    }

    #[test]
    fn test_distance_index_out_of_range() {
        let mut config = NoiseConfig::new(1);
        let err = config.set_cellular_distance_indices(0, 4).unwrap_err();
        assert!(matches!(
            err,
            NoiseConfigError::InvalidDistanceIndices { index0: 0, index1: 4 }
        ));
        assert_eq!(config.cellular_distance_indices(), (0, 1));
    }

    #[test]
    fn test_from_params_defaults_match_new() {
        let config = NoiseConfig::from_params(&NoiseParams::default()).unwrap();
        assert_eq!(config, NoiseConfig::new(1337));
    }

    #[test]
    fn test_from_params_copies_fields() {
        let mut params = NoiseParams::perlin(99, 0.2);
        params.fractal.octaves = 4;
        params.fractal.gain = 0.6;
        params.cellular.distance_indices = [2, 0];
        let config = NoiseConfig::from_params(&params).unwrap();

        assert_eq!(config.seed(), 99);
        assert_eq!(config.frequency(), 0.2);
        assert_eq!(config.noise_type(), NoiseType::Perlin);
        assert_eq!(config.octaves(), 4);
        assert_eq!(config.cellular_distance_indices(), (0, 2));
    }

    #[test]
    fn test_from_params_rejects_nan() {
        let mut params = NoiseParams::default();
        params.cellular.jitter = f32::NAN;
        let err = NoiseConfig::from_params(&params).unwrap_err();
        assert!(matches!(
            err,
            NoiseConfigError::NonFiniteParameter {
                name: "cellular.jitter",
                ..
            }
        ));
    }
}
