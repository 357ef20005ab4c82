//! Noise generator: configuration plus an optional lookup generator.

use isleforge_spec::{CellularReturnType, NoiseType};

use crate::config::NoiseConfig;
use crate::error::{NoiseConfigError, NoiseResult};
use crate::{Noise2D, Noise3D};

/// Evaluates noise for a fixed [`NoiseConfig`].
///
/// A generator in `noise_lookup` cellular mode borrows a second, fully
/// configured generator for its whole lifetime. The borrow is shared and
/// never mutated, so one lookup generator can serve many generators.
#[derive(Debug, Clone)]
pub struct NoiseGenerator<'a> {
    config: NoiseConfig,
    lookup: Option<&'a NoiseGenerator<'a>>,
}

impl<'a> NoiseGenerator<'a> {
    /// Creates a generator without a lookup generator.
    ///
    /// Fails with [`NoiseConfigError::MissingNoiseLookup`] if the cellular
    /// return type is `noise_lookup`.
    pub fn new(config: NoiseConfig) -> NoiseResult<Self> {
        if config.cellular_return_type() == CellularReturnType::NoiseLookup {
            return Err(NoiseConfigError::MissingNoiseLookup);
        }
        Ok(Self {
            config,
            lookup: None,
        })
    }

    /// Creates a generator whose cellular `noise_lookup` mode samples `lookup`.
    pub fn with_lookup(config: NoiseConfig, lookup: &'a NoiseGenerator<'a>) -> Self {
        Self {
            config,
            lookup: Some(lookup),
        }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// The lookup generator, if any.
    pub fn lookup(&self) -> Option<&'a NoiseGenerator<'a>> {
        self.lookup
    }

    /// Samples the configured noise type at a 2D coordinate.
    pub fn get_noise_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config.frequency();
        let (x, y) = (x * freq, y * freq);
        let seed = self.config.seed();

        match self.config.noise_type() {
            NoiseType::Value => self.single_value_2d(seed, x, y),
            NoiseType::ValueFractal => {
                self.fractal_2d(|s, x, y| self.single_value_2d(s, x, y), x, y)
            }
            NoiseType::Perlin => self.single_perlin_2d(seed, x, y),
            NoiseType::PerlinFractal => {
                self.fractal_2d(|s, x, y| self.single_perlin_2d(s, x, y), x, y)
            }
            NoiseType::Simplex => crate::simplex::single_simplex_2d(seed, x, y),
            NoiseType::SimplexFractal => self.fractal_2d(crate::simplex::single_simplex_2d, x, y),
            NoiseType::Cellular => self.single_cellular_2d(x, y),
            NoiseType::WhiteNoise => self.white_noise_2d(x, y),
            NoiseType::Cubic => crate::cubic::single_cubic_2d(seed, x, y),
            NoiseType::CubicFractal => self.fractal_2d(crate::cubic::single_cubic_2d, x, y),
        }
    }

    /// Samples the configured noise type at a 3D coordinate.
    pub fn get_noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config.frequency();
        let (x, y, z) = (x * freq, y * freq, z * freq);
        let seed = self.config.seed();

        match self.config.noise_type() {
            NoiseType::Value => self.single_value_3d(seed, x, y, z),
            NoiseType::ValueFractal => {
                self.fractal_3d(|s, x, y, z| self.single_value_3d(s, x, y, z), x, y, z)
            }
            NoiseType::Perlin => self.single_perlin_3d(seed, x, y, z),
            NoiseType::PerlinFractal => {
                self.fractal_3d(|s, x, y, z| self.single_perlin_3d(s, x, y, z), x, y, z)
            }
            NoiseType::Simplex => crate::simplex::single_simplex_3d(seed, x, y, z),
            NoiseType::SimplexFractal => {
                self.fractal_3d(crate::simplex::single_simplex_3d, x, y, z)
            }
            NoiseType::Cellular => self.single_cellular_3d(x, y, z),
            NoiseType::WhiteNoise => self.white_noise_3d(x, y, z),
            NoiseType::Cubic => crate::cubic::single_cubic_3d(seed, x, y, z),
            NoiseType::CubicFractal => self.fractal_3d(crate::cubic::single_cubic_3d, x, y, z),
        }
    }
}

impl Noise2D for NoiseGenerator<'_> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        self.get_noise_2d(x, y)
    }
}

impl Noise3D for NoiseGenerator<'_> {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.get_noise_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_lookup_requires_lookup() {
        let mut config = NoiseConfig::new(1);
        config.set_noise_type(NoiseType::Cellular);
        config.set_cellular_return_type(CellularReturnType::NoiseLookup);

        let err = NoiseGenerator::new(config.clone()).unwrap_err();
        assert_eq!(err, NoiseConfigError::MissingNoiseLookup);

        let lookup = NoiseGenerator::new(NoiseConfig::new(2)).unwrap();
        let generator = NoiseGenerator::with_lookup(config, &lookup);
        assert!(generator.lookup().is_some());
    }

    #[test]
    fn test_every_type_is_finite() {
        let types = [
            NoiseType::Value,
            NoiseType::ValueFractal,
            NoiseType::Perlin,
            NoiseType::PerlinFractal,
            NoiseType::Simplex,
            NoiseType::SimplexFractal,
            NoiseType::Cellular,
            NoiseType::WhiteNoise,
            NoiseType::Cubic,
            NoiseType::CubicFractal,
        ];
        for noise_type in types {
            let mut config = NoiseConfig::new(1337);
            config.set_noise_type(noise_type);
            let generator = NoiseGenerator::new(config).unwrap();
            for i in -20..20 {
                let x = i as f32 * 13.7;
                let y = i as f32 * -7.3;
                assert!(
                    generator.get_noise_2d(x, y).is_finite(),
                    "{:?} 2D sample not finite",
                    noise_type
                );
                assert!(
                    generator.get_noise_3d(x, y, x - y).is_finite(),
                    "{:?} 3D sample not finite",
                    noise_type
                );
            }
        }
    }

    #[test]
    fn test_trait_matches_inherent() {
        let generator = NoiseGenerator::new(NoiseConfig::new(5)).unwrap();
        assert_eq!(
            Noise2D::sample(&generator, 3.0, 4.0),
            generator.get_noise_2d(3.0, 4.0)
        );
        assert_eq!(
            Noise3D::sample(&generator, 3.0, 4.0, 5.0),
            generator.get_noise_3d(3.0, 4.0, 5.0)
        );
    }
}
